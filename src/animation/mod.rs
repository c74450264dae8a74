pub(crate) mod ease;
pub(crate) mod join;
pub(crate) mod ops;
pub(crate) mod timeline;
pub(crate) mod tween;
