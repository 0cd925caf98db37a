use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .locsyncrc.json"));

    let config = test.read_file(".locsyncrc.json")?;
    assert!(config.contains("localizationRoot"));
    assert!(config.contains("reportRoot"));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".locsyncrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".locsyncrc.json")?, "{}");

    Ok(())
}
