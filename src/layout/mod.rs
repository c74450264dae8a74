pub(crate) mod adapter;
pub(crate) mod layered;
pub(crate) mod options;
