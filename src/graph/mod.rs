pub(crate) mod edge;
pub(crate) mod topology;
pub(crate) mod vertex;

use crate::{graph::edge::Edge, graph::vertex::Vertex, scene::node::NodeRef};

/// Anything that can be handed to a graph registration call.
///
/// Registration checks the variant at runtime, so plain scene nodes can flow through the same
/// entry points as vertices and edges and be rejected there.
#[derive(Clone, Debug)]
pub enum Entity {
    /// A graph vertex.
    Vertex(Vertex),
    /// A graph edge.
    Edge(Edge),
    /// Any other scene node.
    Node(NodeRef),
}

impl Entity {
    /// Short name of the entity kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Vertex(_) => "vertex",
            Self::Edge(_) => "edge",
            Self::Node(n) => n.kind_name(),
        }
    }
}

impl From<Vertex> for Entity {
    fn from(v: Vertex) -> Self {
        Self::Vertex(v)
    }
}

impl From<&Vertex> for Entity {
    fn from(v: &Vertex) -> Self {
        Self::Vertex(v.clone())
    }
}

impl From<Edge> for Entity {
    fn from(e: Edge) -> Self {
        Self::Edge(e)
    }
}

impl From<&Edge> for Entity {
    fn from(e: &Edge) -> Self {
        Self::Edge(e.clone())
    }
}

impl From<NodeRef> for Entity {
    fn from(n: NodeRef) -> Self {
        Self::Node(n)
    }
}
