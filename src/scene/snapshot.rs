use crate::{
    foundation::color::Rgba8Premul,
    foundation::core::{Point, Size},
    scene::geometry::Geometry,
    scene::node::NodeRef,
};

/// Render-boundary view of one node at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NodeSnapshot {
    /// Render kind (`container`, `circle`, `rect`, `line`, `text`).
    pub kind: &'static str,
    /// Center position in parent space.
    pub position: Point,
    /// Current size.
    pub size: Size,
    /// Stroke color.
    pub stroke: Rgba8Premul,
    /// Fill color.
    pub fill: Rgba8Premul,
    /// Stroke width.
    pub line_width: f64,
    /// Draw order among siblings.
    pub z_index: i32,
    /// Text content, for text nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Visible route, for line nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<Point>>,
    /// Children in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

/// Capture `node` and its subtree with every binding evaluated.
pub fn capture(node: &NodeRef) -> NodeSnapshot {
    NodeSnapshot {
        kind: node.kind_name(),
        position: node.position(),
        size: node.size(),
        stroke: node.stroke().get().to_rgba8_premul(),
        fill: node.fill().get().to_rgba8_premul(),
        line_width: node.line_width(),
        z_index: node.z_index(),
        text: node.as_text().map(|t| t.content.get()),
        route: node.as_line().map(|l| l.visible_route().0),
        children: node.children().iter().map(capture).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/snapshot.rs"]
mod tests;
