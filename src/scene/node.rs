use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::{
    foundation::color::Color,
    foundation::core::{Point, Size},
    scene::geometry::{Geometry, measure_text},
    scene::polyline::Polyline,
    scene::signal::Signal,
};

/// Default font size for text nodes.
pub const DEFAULT_FONT_SIZE: f64 = 48.0;

/// What a node renders as.
pub enum NodeKind {
    /// Grouping node without paint of its own.
    Container,
    /// Stroke/fill geometry.
    Shape(ShapeKind),
    /// Glyph run. Children of a text node are part of the run.
    Text(TextData),
}

/// Concrete shape geometry.
pub enum ShapeKind {
    /// Circle inscribed in the node size.
    Circle,
    /// Rectangle of the node size.
    Rect,
    /// Open polyline, optionally with an end arrow.
    Line(LineData),
}

/// Line-specific state.
pub struct LineData {
    /// Full route, including the parts hidden by the offsets.
    pub points: Signal<Polyline>,
    /// Length hidden at the start of the route.
    pub start_offset: Signal<f64>,
    /// Length hidden at the end of the route.
    pub end_offset: Signal<f64>,
    /// Draw an arrow head at the visible end.
    pub end_arrow: bool,
    /// Arrow head size.
    pub arrow_size: f64,
}

impl LineData {
    /// The drawn part of the route: [`LineData::points`] minus both offsets.
    pub fn visible_route(&self) -> Polyline {
        self.points
            .get()
            .trimmed(self.start_offset.get(), self.end_offset.get())
    }
}

/// Text-specific state.
pub struct TextData {
    /// Text content.
    pub content: Signal<String>,
    /// Font size in pixels.
    pub font_size: f64,
}

struct NodeData {
    kind: NodeKind,
    position: Signal<Point>,
    size: Signal<Size>,
    stroke: Signal<Color>,
    fill: Signal<Color>,
    line_width: Cell<f64>,
    z_index: Cell<i32>,
    children: RefCell<Vec<NodeRef>>,
}

/// Shared handle to a node in a visual tree.
///
/// Identity is the handle's allocation: two handles are the same node iff
/// [`NodeRef::ptr_eq`] holds, regardless of their current values.
#[derive(Clone)]
pub struct NodeRef(Rc<NodeData>);

impl NodeRef {
    fn with_kind(kind: NodeKind, size: Signal<Size>, stroke: Color, fill: Color) -> Self {
        Self(Rc::new(NodeData {
            kind,
            position: Signal::new(Point::ZERO),
            size,
            stroke: Signal::new(stroke),
            fill: Signal::new(fill),
            line_width: Cell::new(0.0),
            z_index: Cell::new(0),
            children: RefCell::new(Vec::new()),
        }))
    }

    /// Empty grouping node.
    pub fn container() -> Self {
        Self::with_kind(
            NodeKind::Container,
            Signal::new(Size::ZERO),
            Color::TRANSPARENT,
            Color::TRANSPARENT,
        )
    }

    /// Circle with the given diameter, white outline and no fill.
    pub fn circle(diameter: f64) -> Self {
        Self::with_kind(
            NodeKind::Shape(ShapeKind::Circle),
            Signal::new(Size::new(diameter, diameter)),
            Color::WHITE,
            Color::TRANSPARENT,
        )
        .with_line_width(2.0)
    }

    /// Rectangle with a white outline and no fill.
    pub fn rect(size: Size) -> Self {
        Self::with_kind(
            NodeKind::Shape(ShapeKind::Rect),
            Signal::new(size),
            Color::WHITE,
            Color::TRANSPARENT,
        )
        .with_line_width(2.0)
    }

    /// Line through `points` without arrow or offsets.
    pub fn line(points: impl Into<Polyline>) -> Self {
        let points = Signal::new(points.into());
        Self::line_with(LineData {
            points,
            start_offset: Signal::new(0.0),
            end_offset: Signal::new(0.0),
            end_arrow: false,
            arrow_size: 0.0,
        })
    }

    /// Line from fully specified line state.
    pub fn line_with(data: LineData) -> Self {
        let points = data.points.clone();
        let size = Signal::computed(move || {
            points
                .get()
                .bounding_box()
                .map(|r| r.size())
                .unwrap_or(Size::ZERO)
        });
        Self::with_kind(
            NodeKind::Shape(ShapeKind::Line(data)),
            size,
            Color::WHITE,
            Color::TRANSPARENT,
        )
        .with_line_width(2.0)
    }

    /// Text run; its size is measured from the content on every read.
    pub fn text(content: impl Into<String>, font_size: f64) -> Self {
        let content = Signal::new(content.into());
        let measured = content.clone();
        let size = Signal::computed(move || measure_text(&measured.get(), font_size));
        Self::with_kind(
            NodeKind::Text(TextData {
                content,
                font_size,
            }),
            size,
            Color::TRANSPARENT,
            Color::WHITE,
        )
    }

    /// Set the position and return the handle.
    pub fn with_position(self, position: Point) -> Self {
        self.0.position.set(position);
        self
    }

    /// Set the stroke color and return the handle.
    pub fn with_stroke(self, color: Color) -> Self {
        self.0.stroke.set(color);
        self
    }

    /// Set the fill color and return the handle.
    pub fn with_fill(self, color: Color) -> Self {
        self.0.fill.set(color);
        self
    }

    /// Set the stroke width and return the handle.
    pub fn with_line_width(self, width: f64) -> Self {
        self.0.line_width.set(width);
        self
    }

    /// Set the draw order among siblings and return the handle.
    pub fn with_z_index(self, z: i32) -> Self {
        self.0.z_index.set(z);
        self
    }

    /// Render kind.
    pub fn kind(&self) -> &NodeKind {
        &self.0.kind
    }

    /// Short name of the render kind.
    pub fn kind_name(&self) -> &'static str {
        match &self.0.kind {
            NodeKind::Container => "container",
            NodeKind::Shape(ShapeKind::Circle) => "circle",
            NodeKind::Shape(ShapeKind::Rect) => "rect",
            NodeKind::Shape(ShapeKind::Line(_)) => "line",
            NodeKind::Text(_) => "text",
        }
    }

    /// Text state, for text nodes.
    pub fn as_text(&self) -> Option<&TextData> {
        match &self.0.kind {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Line state, for line nodes.
    pub fn as_line(&self) -> Option<&LineData> {
        match &self.0.kind {
            NodeKind::Shape(ShapeKind::Line(l)) => Some(l),
            _ => None,
        }
    }

    /// Position signal (center, parent space).
    pub fn position_signal(&self) -> &Signal<Point> {
        &self.0.position
    }

    /// Size signal.
    pub fn size_signal(&self) -> &Signal<Size> {
        &self.0.size
    }

    /// Stroke color signal.
    pub fn stroke(&self) -> &Signal<Color> {
        &self.0.stroke
    }

    /// Fill color signal.
    pub fn fill(&self) -> &Signal<Color> {
        &self.0.fill
    }

    /// Stroke width.
    pub fn line_width(&self) -> f64 {
        self.0.line_width.get()
    }

    /// Draw order among siblings.
    pub fn z_index(&self) -> i32 {
        self.0.z_index.get()
    }

    /// Append `child` and return it.
    pub fn add(&self, child: NodeRef) -> NodeRef {
        self.0.children.borrow_mut().push(child.clone());
        child
    }

    /// Detach `child`; returns `false` when it was not a direct child.
    pub fn remove(&self, child: &NodeRef) -> bool {
        let mut children = self.0.children.borrow_mut();
        let before = children.len();
        children.retain(|c| !c.ptr_eq(child));
        children.len() != before
    }

    /// Snapshot of the direct children.
    pub fn children(&self) -> Vec<NodeRef> {
        self.0.children.borrow().clone()
    }

    /// Return `true` when both handles point at the same node.
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Geometry for NodeRef {
    fn size(&self) -> Size {
        self.0.size.get()
    }

    fn position(&self) -> Point {
        self.0.position.get()
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("kind", &self.kind_name())
            .field("children", &self.0.children.borrow().len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
