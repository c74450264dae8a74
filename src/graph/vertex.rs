use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::{
    animation::tween::Tween,
    foundation::core::{Point, Size},
    scene::geometry::Geometry,
    scene::node::{DEFAULT_FONT_SIZE, NodeRef},
};

/// Smallest diameter a vertex circle is drawn with.
pub const VERTEX_MIN_SIZE: f64 = 128.0;
/// How far the inner ring shrinks when a vertex is outlined.
pub const RING_INSET: f64 = 16.0;

struct VertexInner {
    id: String,
    node: NodeRef,
    ring: NodeRef,
    text: NodeRef,
    outlined: Cell<bool>,
}

/// Circular graph vertex with a centered label and an inner ring.
///
/// The circle's diameter is bound to the label: it is the larger of [`VERTEX_MIN_SIZE`] and the
/// diagonal of the label's measured size, re-read on every query. Handles are cheap clones of one
/// shared vertex.
#[derive(Clone)]
pub struct Vertex(Rc<VertexInner>);

/// Non-owning vertex handle held by edges.
#[derive(Clone)]
pub(crate) struct WeakVertex(Weak<VertexInner>);

impl WeakVertex {
    pub(crate) fn upgrade(&self) -> Option<Vertex> {
        self.0.upgrade().map(Vertex)
    }
}

impl Vertex {
    /// Vertex labelled with its own ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = id.clone();
        Self::build(id, label, DEFAULT_FONT_SIZE)
    }

    /// Vertex with a label different from its ID.
    pub fn with_label(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::build(id.into(), label.into(), DEFAULT_FONT_SIZE)
    }

    /// Vertex with an explicit label font size.
    pub fn with_font(id: impl Into<String>, label: impl Into<String>, font_size: f64) -> Self {
        Self::build(id.into(), label.into(), font_size)
    }

    fn build(id: String, label: String, font_size: f64) -> Self {
        let text = NodeRef::text(label, font_size);
        let node = NodeRef::circle(VERTEX_MIN_SIZE);
        let measured = text.size_signal().clone();
        node.size_signal().bind(move || {
            let s = measured.get();
            let d = s.width.hypot(s.height).max(VERTEX_MIN_SIZE);
            Size::new(d, d)
        });

        let ring = NodeRef::circle(VERTEX_MIN_SIZE);
        node.add(ring.clone());
        node.add(text.clone());

        let v = Self(Rc::new(VertexInner {
            id,
            node,
            ring,
            text,
            outlined: Cell::new(false),
        }));
        v.bind_ring();
        v
    }

    /// Start outlined (or not) and return the handle.
    pub fn with_outline(self, outlined: bool) -> Self {
        self.outline(outlined);
        self
    }

    /// Place the vertex and return the handle.
    pub fn with_position(self, position: Point) -> Self {
        self.0.node.position_signal().set(position);
        self
    }

    /// Caller-assigned identity.
    pub fn id(&self) -> &str {
        &self.0.id
    }

    /// Outer circle; the vertex's position and size live here.
    pub fn node(&self) -> &NodeRef {
        &self.0.node
    }

    /// Inner ring.
    pub fn ring(&self) -> &NodeRef {
        &self.0.ring
    }

    /// Label text.
    pub fn text(&self) -> &NodeRef {
        &self.0.text
    }

    /// Current label.
    pub fn label(&self) -> String {
        self.0
            .text
            .as_text()
            .map(|t| t.content.get())
            .unwrap_or_default()
    }

    /// Replace the label; the vertex size follows on the next read.
    pub fn set_label(&self, label: impl Into<String>) {
        if let Some(t) = self.0.text.as_text() {
            t.content.set(label.into());
        }
    }

    /// Whether the inner ring is currently inset.
    pub fn is_outlined(&self) -> bool {
        self.0.outlined.get()
    }

    /// Show or hide the outline immediately.
    ///
    /// The ring stays bound to the circle size afterwards, so it follows label changes.
    pub fn outline(&self, visible: bool) {
        self.0.outlined.set(visible);
        self.bind_ring();
    }

    /// Animate the ring to the outlined (or plain) size over `duration` seconds.
    ///
    /// The ring holds the target size once the tween has run; call [`Vertex::outline`] to bind it
    /// to the circle again.
    pub fn outline_transition(&self, visible: bool, duration: f64) -> Tween<Size> {
        self.0.outlined.set(visible);
        Tween::new(
            self.0.ring.size_signal(),
            ring_size(self.0.node.size(), visible),
            duration,
        )
    }

    /// Return `true` when both handles refer to the same vertex.
    pub fn ptr_eq(&self, other: &Vertex) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn downgrade(&self) -> WeakVertex {
        WeakVertex(Rc::downgrade(&self.0))
    }

    fn bind_ring(&self) {
        let size = self.0.node.size_signal().clone();
        let inset = self.0.outlined.get();
        self.0
            .ring
            .size_signal()
            .bind(move || ring_size(size.get(), inset));
    }
}

fn ring_size(outer: Size, inset: bool) -> Size {
    if inset {
        Size::new(
            (outer.width - RING_INSET).max(0.0),
            (outer.height - RING_INSET).max(0.0),
        )
    } else {
        outer
    }
}

impl Geometry for Vertex {
    fn size(&self) -> Size {
        self.0.node.size()
    }

    fn position(&self) -> Point {
        self.0.node.position()
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.0.id)
            .field("outlined", &self.0.outlined.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/vertex.rs"]
mod tests;
