pub(crate) mod issues;
pub(crate) mod serve;
pub(crate) mod updates;
