pub(crate) mod classify;
pub(crate) mod engine;
pub(crate) mod theme;
