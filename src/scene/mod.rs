pub(crate) mod object;
pub(crate) mod props;
pub(crate) mod registry;
