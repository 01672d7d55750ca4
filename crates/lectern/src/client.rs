pub(crate) mod base;
pub(crate) mod fallback;
pub(crate) mod simple;
pub(crate) mod token;
