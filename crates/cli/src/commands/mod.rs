pub(crate) mod init;
pub(crate) mod load;
pub(crate) mod pipeline;
pub(crate) mod query;
pub(crate) mod report;
