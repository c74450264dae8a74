pub(crate) mod geometry;
pub(crate) mod node;
pub(crate) mod polyline;
pub(crate) mod signal;
pub(crate) mod snapshot;
