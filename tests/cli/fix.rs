use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_fix_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("localization-fr", "\"login\" = \"Connexion\";\n")?;
    test.write_file(
        "localization-en",
        "\"login\" = \"Login\";\n\"logout\" = \"Logout\";\n",
    )?;

    let output = test.run(&["fix"])?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("Would fix 1 missing key(s) across 1 file(s)"));
    assert!(out.contains("--apply"));
    assert_eq!(
        test.read_file("localization-fr")?,
        "\"login\" = \"Connexion\";\n"
    );

    Ok(())
}

#[test]
fn test_fix_apply_rewrites_sorted_with_placeholders() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("localization-fr", "\"login\" = \"Connexion\";\n")?;
    test.write_file(
        "localization-en",
        "\"welcome_message\" = \"Hello\";\n\"logout\" = \"Logout\";\n\"login\" = \"Login\";\n",
    )?;

    let output = test.run(&["fix", "--apply"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Corrected 2 file(s), added 2 missing key(s)"));

    assert_eq!(
        test.read_file("localization-fr")?,
        "\"login\" = \"Connexion\";\n\"logout\" = \"\";\n\"welcome_message\" = \"\";\n"
    );
    assert_eq!(
        test.read_file("localization-en")?,
        "\"login\" = \"Login\";\n\"logout\" = \"Logout\";\n\"welcome_message\" = \"Hello\";\n"
    );

    Ok(())
}

#[test]
fn test_fix_apply_then_check_is_clean() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("localization-es", "\"a\" = \"uno\";\n")?;
    test.write_file("localization-de", "\"b\" = \"zwei\";\n")?;

    let output = test.run(&["fix", "--apply"])?;
    assert_eq!(output.status.code(), Some(0));

    let output = test.run(&["check"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("All localization files are synchronized"));

    Ok(())
}

#[test]
fn test_fix_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("localization-es", "\"a\" = \"uno\";\n")?;
    test.write_file("localization-de", "\"b\" = \"zwei\";\n")?;

    test.run(&["fix", "--apply"])?;
    let first = test.read_file("localization-es")?;

    let output = test.run(&["fix", "--apply"])?;
    // Second run rewrites again but produces byte-identical output.
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Corrected 2 file(s), added 0 missing key(s)"));
    assert_eq!(test.read_file("localization-es")?, first);

    Ok(())
}

#[test]
fn test_fix_dry_run_synchronized_files_short_circuits() -> Result<()> {
    let test = CliTest::with_file("localization-en", "\"login\" = \"Login\";\n")?;

    let output = test.run(&["fix"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("All localization files are synchronized"));
    assert_eq!(test.read_file("localization-en")?, "\"login\" = \"Login\";\n");

    Ok(())
}

#[test]
fn test_fix_apply_canonicalizes_complete_files() -> Result<()> {
    // No missing keys anywhere, but the file is unsorted and carries a
    // comment; --apply must still rewrite it into canonical form.
    let test = CliTest::with_file(
        "localization-en",
        "// header\n\"b\" = \"2\";\n\"a\" = \"1\";\n",
    )?;

    let output = test.run(&["fix", "--apply"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Corrected 1 file(s), added 0 missing key(s)"));
    assert_eq!(
        test.read_file("localization-en")?,
        "\"a\" = \"1\";\n\"b\" = \"2\";\n"
    );

    Ok(())
}

#[test]
fn test_fix_discards_comments_and_blank_lines() -> Result<()> {
    let test = CliTest::with_file(
        "localization-en",
        "// header comment\n\n\"login\" = \"Login\";\n\n",
    )?;
    test.write_file(
        "localization-fr",
        "\"login\" = \"Connexion\";\n\"logout\" = \"Déconnexion\";\n",
    )?;

    let output = test.run(&["fix", "--apply"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("localization-en")?,
        "\"login\" = \"Login\";\n\"logout\" = \"\";\n"
    );

    Ok(())
}
