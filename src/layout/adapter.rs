use std::collections::BTreeMap;
use std::fmt;

use crate::{
    foundation::core::{Point, Size},
    foundation::error::{DiagramError, DiagramResult},
    layout::options::LayoutOptions,
    scene::geometry::Geometry,
};

/// Ordered `(from, to)` vertex-ID pair identifying an edge.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    /// Source vertex ID.
    pub from: String,
    /// Target vertex ID.
    pub to: String,
}

impl EdgeKey {
    /// Build a key from two vertex IDs.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Return `true` when both ends are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Edge as seen by a layout engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEdge {
    /// Source vertex ID.
    pub from: String,
    /// Target vertex ID.
    pub to: String,
    /// Edge label.
    pub label: String,
}

/// Topology snapshot handed to a [`LayeredLayout`] engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutInput {
    /// Vertex sizes keyed by ID.
    pub nodes: BTreeMap<String, Size>,
    /// Edges in key order.
    pub edges: Vec<LayoutEdge>,
    /// Pass-through layout parameters.
    pub options: LayoutOptions,
}

/// Engine result in the engine's own coordinate frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutOutput {
    /// Vertex centers keyed by ID.
    pub nodes: BTreeMap<String, Point>,
    /// Routing points per edge, from the source boundary to the target boundary.
    pub edges: BTreeMap<EdgeKey, Vec<Point>>,
}

/// Layered ("Sugiyama-style") graph drawing algorithm.
pub trait LayeredLayout {
    /// Assign a center to every vertex and a route to every edge of `input`.
    fn layout(&self, input: &LayoutInput) -> DiagramResult<LayoutOutput>;
}

/// Bridge between the graph's live entities and a [`LayeredLayout`] engine.
///
/// Vertices are registered as geometry bindings, not sizes, so every run reads the size the
/// vertex has at that moment.
pub struct LayoutAdapter {
    engine: Box<dyn LayeredLayout>,
    nodes: BTreeMap<String, Box<dyn Geometry>>,
    edges: BTreeMap<EdgeKey, String>,
}

impl LayoutAdapter {
    /// Adapter over `engine`.
    pub fn new(engine: impl LayeredLayout + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Register (or replace) the size binding for vertex `id`.
    pub fn set_node(&mut self, id: impl Into<String>, binding: Box<dyn Geometry>) {
        self.nodes.insert(id.into(), binding);
    }

    /// Register (or replace) the edge `key`.
    pub fn set_edge(&mut self, key: EdgeKey, label: impl Into<String>) {
        self.edges.insert(key, label.into());
    }

    /// Number of registered vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of registered edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build the engine input from current sizes.
    pub fn input(&self, options: &LayoutOptions) -> LayoutInput {
        LayoutInput {
            nodes: self
                .nodes
                .iter()
                .map(|(id, g)| (id.clone(), g.size()))
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|(key, label)| LayoutEdge {
                    from: key.from.clone(),
                    to: key.to.clone(),
                    label: label.clone(),
                })
                .collect(),
            options: *options,
        }
    }

    /// Run the engine on `input` (built by [`LayoutAdapter::input`]) and check that it placed
    /// everything it was given.
    pub fn run(&self, input: &LayoutInput) -> DiagramResult<LayoutOutput> {
        input.options.validate()?;
        let output = self.engine.layout(input)?;

        if let Some(id) = input.nodes.keys().find(|id| !output.nodes.contains_key(*id)) {
            return Err(DiagramError::layout(format!(
                "engine returned no position for vertex '{id}'"
            )));
        }
        if let Some(e) = input
            .edges
            .iter()
            .find(|e| !output.edges.contains_key(&EdgeKey::new(&e.from, &e.to)))
        {
            return Err(DiagramError::layout(format!(
                "engine returned no route for edge '{}-{}'",
                e.from, e.to
            )));
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/adapter.rs"]
mod tests;
