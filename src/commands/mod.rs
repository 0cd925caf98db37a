pub(crate) mod check;
pub(crate) mod context;
pub(crate) mod fix;
pub(crate) mod init;
pub(crate) mod report;

pub(crate) use check::check;
pub(crate) use fix::fix;
pub(crate) use init::init;
pub(crate) use report::report;
