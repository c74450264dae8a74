use std::collections::BTreeMap;

use crate::{
    animation::join::All,
    animation::tween::{Transition, Tween},
    foundation::core::{Point, Rect, Vec2},
    foundation::error::{DiagramError, DiagramResult},
    graph::Entity,
    graph::edge::Edge,
    graph::vertex::Vertex,
    layout::adapter::{EdgeKey, LayeredLayout, LayoutAdapter},
    layout::layered::LayeredEngine,
    layout::options::LayoutOptions,
    scene::node::NodeRef,
    scene::polyline::Polyline,
};

/// One end of an edge lookup: a vertex ID or a vertex handle.
#[derive(Clone, Copy, Debug)]
pub enum Endpoint<'a> {
    /// Vertex ID.
    Id(&'a str),
    /// Vertex handle; its ID is used.
    Vertex(&'a Vertex),
}

impl Endpoint<'_> {
    fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Vertex(v) => v.id(),
        }
    }
}

impl<'a> From<&'a str> for Endpoint<'a> {
    fn from(id: &'a str) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a String> for Endpoint<'a> {
    fn from(id: &'a String) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a Vertex> for Endpoint<'a> {
    fn from(v: &'a Vertex) -> Self {
        Self::Vertex(v)
    }
}

/// Result of one layout pass, already centered on the graph's origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphLayout {
    /// Vertex centers keyed by ID.
    pub positions: BTreeMap<String, Point>,
    /// Full edge routes, center to center.
    pub routes: BTreeMap<EdgeKey, Polyline>,
    /// Extent of all vertices; centered on the origin unless empty.
    pub bounds: Rect,
}

/// Directed graph of vertices and edges drawn with a layered layout.
///
/// Vertex and edge nodes are children of [`Graph::node`]. Registration is last-write-wins per
/// vertex ID and per `(from, to)` pair; the replaced entity's node is detached.
pub struct Graph {
    node: NodeRef,
    options: LayoutOptions,
    vertices: BTreeMap<String, Vertex>,
    edges: BTreeMap<EdgeKey, Edge>,
    adapter: LayoutAdapter,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(LayoutOptions::default())
    }
}

impl Graph {
    /// Empty graph using the built-in [`LayeredEngine`].
    pub fn new(options: LayoutOptions) -> Self {
        Self::with_engine(options, LayeredEngine::default())
    }

    /// Empty graph using a custom layout engine.
    pub fn with_engine(options: LayoutOptions, engine: impl LayeredLayout + 'static) -> Self {
        Self {
            node: NodeRef::container(),
            options,
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            adapter: LayoutAdapter::new(engine),
        }
    }

    /// Container holding every vertex and edge node.
    pub fn node(&self) -> &NodeRef {
        &self.node
    }

    /// Layout parameters.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Replace the layout parameters used by the next layout pass.
    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    /// Register a vertex under its ID, replacing any previous vertex with that ID.
    pub fn add_vertex(&mut self, entity: impl Into<Entity>) -> DiagramResult<Vertex> {
        let vertex = match entity.into() {
            Entity::Vertex(v) => v,
            other => {
                return Err(DiagramError::invalid_entity(format!(
                    "only vertices can be added as vertices, got {}",
                    other.kind_name()
                )));
            }
        };

        let id = vertex.id().to_owned();
        match self.vertices.insert(id.clone(), vertex.clone()) {
            Some(old) if old.ptr_eq(&vertex) => {}
            Some(old) => {
                tracing::debug!(id = %id, "vertex replaced");
                self.node.remove(old.node());
                self.node.add(vertex.node().clone());
            }
            None => {
                self.node.add(vertex.node().clone());
            }
        }
        self.adapter.set_node(id, Box::new(vertex.clone()));
        Ok(vertex)
    }

    /// Register an edge under its `(from, to)` key, replacing any previous edge for that pair.
    ///
    /// Both endpoints must be alive and registered by ID.
    pub fn add_edge(&mut self, entity: impl Into<Entity>) -> DiagramResult<Edge> {
        let edge = match entity.into() {
            Entity::Edge(e) => e,
            other => {
                return Err(DiagramError::invalid_entity(format!(
                    "only edges can be added as edges, got {}",
                    other.kind_name()
                )));
            }
        };

        let key = edge.key();
        let (from_id, to_id) = edge.endpoint_ids();
        for (id, alive) in [(from_id, edge.from().is_some()), (to_id, edge.to().is_some())] {
            if !alive || !self.vertices.contains_key(id) {
                return Err(DiagramError::unresolved_endpoint(key.to_string(), id));
            }
        }

        match self.edges.insert(key.clone(), edge.clone()) {
            Some(old) if old.ptr_eq(&edge) => {}
            Some(old) => {
                tracing::debug!(edge = %key, "edge replaced");
                self.node.remove(old.node());
                self.node.add(edge.node().clone());
            }
            None => {
                self.node.add(edge.node().clone());
            }
        }
        self.adapter.set_edge(key, edge.label());
        Ok(edge)
    }

    /// Vertex registered under `id`.
    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Edge registered for the `(from, to)` pair.
    pub fn edge<'a>(
        &self,
        from: impl Into<Endpoint<'a>>,
        to: impl Into<Endpoint<'a>>,
    ) -> Option<&Edge> {
        let key = EdgeKey::new(from.into().id(), to.into().id());
        self.edges.get(&key)
    }

    /// Registered vertices in ID order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Registered edges in key order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Run the layout engine on the current topology and sizes, without touching the scene.
    #[tracing::instrument(skip(self), fields(vertices = self.vertices.len(), edges = self.edges.len()))]
    pub fn compute_layout(&self) -> DiagramResult<GraphLayout> {
        let input = self.adapter.input(&self.options);
        let output = self.adapter.run(&input)?;

        let mut extent: Option<Rect> = None;
        for (id, size) in &input.nodes {
            if let Some(p) = output.nodes.get(id) {
                let r = Rect::from_center_size(*p, *size);
                extent = Some(extent.map_or(r, |e| e.union(r)));
            }
        }
        let offset = extent.map_or(Vec2::ZERO, |e| -e.center().to_vec2());

        let positions: BTreeMap<String, Point> = output
            .nodes
            .iter()
            .map(|(id, p)| (id.clone(), *p + offset))
            .collect();

        let mut routes = BTreeMap::new();
        for (key, bends) in &output.edges {
            let (Some(from), Some(to)) = (output.nodes.get(&key.from), output.nodes.get(&key.to))
            else {
                return Err(DiagramError::layout(format!(
                    "edge '{key}' routed between unplaced vertices"
                )));
            };
            let mut points = Vec::with_capacity(bends.len() + 2);
            points.push(*from);
            points.extend_from_slice(bends);
            points.push(*to);
            routes.insert(key.clone(), Polyline::new(points).translated(offset));
        }

        let bounds = extent.map_or(Rect::ZERO, |e| e + offset);
        tracing::debug!(
            width = bounds.width(),
            height = bounds.height(),
            "graph layout computed"
        );
        Ok(GraphLayout {
            positions,
            routes,
            bounds,
        })
    }

    /// Move every vertex and re-route every edge to a fresh layout over `duration` seconds.
    ///
    /// Either every transition is produced or, when the engine fails, none is. A non-positive
    /// `duration` applies the new geometry before returning; the returned join is then already
    /// complete.
    #[tracing::instrument(skip(self))]
    pub fn layout(&self, duration: f64) -> DiagramResult<All> {
        let layout = self.compute_layout()?;

        let mut all = All::default();
        for (id, vertex) in &self.vertices {
            if let Some(p) = layout.positions.get(id) {
                all.push(Tween::new(vertex.node().position_signal(), *p, duration));
            }
        }
        for (key, edge) in &self.edges {
            if let Some(route) = layout.routes.get(key) {
                all.push(Tween::new(edge.points(), route.clone(), duration));
            }
        }

        if duration <= 0.0 {
            all.finish();
        }
        Ok(all)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/topology.rs"]
mod tests;
