use std::fmt;
use std::rc::Rc;

use crate::{
    foundation::core::{Point, Vec2},
    graph::vertex::{Vertex, WeakVertex},
    layout::adapter::EdgeKey,
    scene::geometry::Geometry,
    scene::node::{DEFAULT_FONT_SIZE, LineData, NodeRef},
    scene::polyline::Polyline,
    scene::signal::Signal,
};

/// Arrow head size of edge lines.
pub const EDGE_ARROW_SIZE: f64 = 16.0;
/// Stroke width of edge lines.
pub const EDGE_LINE_WIDTH: f64 = 2.0;
/// Distance between an edge label and its route.
pub const EDGE_LABEL_OFFSET: f64 = 32.0;

struct EdgeInner {
    from_id: String,
    to_id: String,
    from: WeakVertex,
    to: WeakVertex,
    label: String,
    points: Signal<Polyline>,
    node: NodeRef,
    text: NodeRef,
}

/// Directed, labelled edge between two vertices.
///
/// The route starts and ends at the vertex centers; half of each endpoint's width is hidden so
/// the visible line and its arrow stop at the circle boundaries. Endpoints are held weakly, an
/// edge never keeps a vertex alive.
#[derive(Clone)]
pub struct Edge(Rc<EdgeInner>);

impl Edge {
    /// Edge from `from` to `to`, initially drawn straight between their current centers.
    pub fn new(from: &Vertex, to: &Vertex, label: impl Into<String>) -> Self {
        let label = label.into();

        let (fp, tp) = (
            from.node().position_signal().clone(),
            to.node().position_signal().clone(),
        );
        let points = Signal::computed(move || Polyline::new(vec![fp.get(), tp.get()]));

        let (wf, wt) = (from.downgrade(), to.downgrade());
        let start_offset = Signal::computed(move || half_width(&wf));
        let end_offset = Signal::computed(move || half_width(&wt));

        let node = NodeRef::line_with(LineData {
            points: points.clone(),
            start_offset,
            end_offset,
            end_arrow: true,
            arrow_size: EDGE_ARROW_SIZE,
        })
        .with_line_width(EDGE_LINE_WIDTH)
        .with_z_index(-1);

        let text = NodeRef::text(label.clone(), DEFAULT_FONT_SIZE);
        let (route, wf) = (points.clone(), from.downgrade());
        text.position_signal()
            .bind(move || label_anchor(&route.get(), half_width(&wf)));
        node.add(text.clone());

        Self(Rc::new(EdgeInner {
            from_id: from.id().to_owned(),
            to_id: to.id().to_owned(),
            from: from.downgrade(),
            to: to.downgrade(),
            label,
            points,
            node,
            text,
        }))
    }

    /// `(from, to)` key of the endpoint IDs captured at construction.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.0.from_id.clone(), self.0.to_id.clone())
    }

    /// Source vertex, if it is still alive.
    pub fn from(&self) -> Option<Vertex> {
        self.0.from.upgrade()
    }

    /// Target vertex, if it is still alive.
    pub fn to(&self) -> Option<Vertex> {
        self.0.to.upgrade()
    }

    /// Edge label.
    pub fn label(&self) -> &str {
        &self.0.label
    }

    /// Line node.
    pub fn node(&self) -> &NodeRef {
        &self.0.node
    }

    /// Label text node.
    pub fn text(&self) -> &NodeRef {
        &self.0.text
    }

    /// Full route signal, center to center.
    pub fn points(&self) -> &Signal<Polyline> {
        &self.0.points
    }

    /// The drawn part of the route, boundary to boundary.
    pub fn route(&self) -> Polyline {
        self.0
            .node
            .as_line()
            .map(LineData::visible_route)
            .unwrap_or_default()
    }

    /// Return `true` when both handles refer to the same edge.
    pub fn ptr_eq(&self, other: &Edge) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn endpoint_ids(&self) -> (&str, &str) {
        (&self.0.from_id, &self.0.to_id)
    }
}

fn half_width(v: &WeakVertex) -> f64 {
    v.upgrade().map_or(0.0, |v| v.width() / 2.0)
}

// Point `distance` along the route, pushed off it along the left-hand normal.
fn label_anchor(route: &Polyline, distance: f64) -> Point {
    match route.point_at_distance(distance) {
        Some((p, t)) => p + Vec2::new(t.y, -t.x) * EDGE_LABEL_OFFSET,
        None => Point::ZERO,
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("from", &self.0.from_id)
            .field("to", &self.0.to_id)
            .field("label", &self.0.label)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/edge.rs"]
mod tests;
