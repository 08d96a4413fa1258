pub(crate) mod anim;
pub(crate) mod builder;
pub(crate) mod ease;
pub(crate) mod group;
pub(crate) mod kinds;
