//! Animated layered diagrams and emphasis transitions for programmatic video.
//!
//! The crate has two halves that share one animation model:
//!
//! - **Graphs**: a [`Graph`] owns [`Vertex`] and [`Edge`] entities, hands their topology and live
//!   sizes to a [`LayeredLayout`] engine (the built-in [`LayeredEngine`] by default), and turns
//!   the result into one joined transition that moves every vertex and re-routes every edge.
//! - **Emphasis**: an [`Emphasizer`] classifies any node subtree into text and shapes and drives
//!   it to one of the [`Emphasis`] states (lit, accented, dimmed, hidden), either immediately or
//!   as a transition. [`Emphasizer::highlight`] lights a group and dims its siblings.
//!
//! # Animation model
//!
//! Scene values live in [`Signal`]s. A [`Transition`] advances cooperatively via
//! [`Transition::step`]; [`join_all`] runs several side by side and completes with the slowest.
//! A [`Timeline`] plays transitions frame by frame, which is where a scene script "awaits" them.
//!
//! ```
//! use wavyte_diagram::{Edge, Fps, Graph, LayoutOptions, Timeline, Vertex};
//!
//! let mut graph = Graph::new(LayoutOptions::default());
//! let a = graph.add_vertex(Vertex::new("A"))?;
//! let b = graph.add_vertex(Vertex::new("B"))?;
//! graph.add_edge(Edge::new(&a, &b, "next"))?;
//!
//! let mut timeline = Timeline::new(Fps::default());
//! timeline.play(graph.layout(0.5)?);
//! # Ok::<(), wavyte_diagram::DiagramError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod emphasis;
mod foundation;
mod graph;
mod layout;
mod scene;

pub use animation::ease::Ease;
pub use animation::join::{All, join_all};
pub use animation::ops::{Sequence, Wait, delay, sequence};
pub use animation::timeline::Timeline;
pub use animation::tween::{BoxedTransition, Lerp, Step, Transition, Tween};
pub use emphasis::classify::{Classification, Classified, Classify, classify};
pub use emphasis::engine::{Emphasis, Emphasizer, PaintMapping};
pub use emphasis::theme::Theme;
pub use foundation::color::{Color, Rgba8Premul};
pub use foundation::core::{Fps, FrameIndex, FrameRange, Point, Rect, Size, Vec2};
pub use foundation::error::{DiagramError, DiagramResult};
pub use graph::Entity;
pub use graph::edge::{EDGE_ARROW_SIZE, EDGE_LABEL_OFFSET, EDGE_LINE_WIDTH, Edge};
pub use graph::topology::{Endpoint, Graph, GraphLayout};
pub use graph::vertex::{RING_INSET, VERTEX_MIN_SIZE, Vertex};
pub use layout::adapter::{
    EdgeKey, LayeredLayout, LayoutAdapter, LayoutEdge, LayoutInput, LayoutOutput,
};
pub use layout::layered::LayeredEngine;
pub use layout::options::{LayoutOptions, RankDir};
pub use scene::geometry::{Geometry, TEXT_ADVANCE_EM, TEXT_LINE_HEIGHT_EM, measure_text};
pub use scene::node::{DEFAULT_FONT_SIZE, LineData, NodeKind, NodeRef, ShapeKind, TextData};
pub use scene::polyline::Polyline;
pub use scene::signal::Signal;
pub use scene::snapshot::{NodeSnapshot, capture};
