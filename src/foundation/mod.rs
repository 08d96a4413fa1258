pub(crate) mod constants;
pub(crate) mod core;
pub(crate) mod error;
