/// Convenience result type used across the diagram crate.
pub type DiagramResult<T> = Result<T, DiagramError>;

/// Top-level error taxonomy used by topology, layout and configuration APIs.
#[derive(thiserror::Error, Debug)]
pub enum DiagramError {
    /// An entity of the wrong kind was handed to a registration call.
    #[error("invalid entity: {0}")]
    InvalidEntity(String),

    /// An edge endpoint does not resolve to a registered vertex.
    #[error("unresolved endpoint: edge '{edge}' references unregistered vertex '{endpoint}'")]
    UnresolvedEndpoint {
        /// `from-to` key of the rejected edge.
        edge: String,
        /// The endpoint that could not be resolved.
        endpoint: String,
    },

    /// The layered-layout engine rejected the topology.
    #[error("layout error: {0}")]
    Layout(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DiagramError {
    /// Build a [`DiagramError::InvalidEntity`] value.
    pub fn invalid_entity(msg: impl Into<String>) -> Self {
        Self::InvalidEntity(msg.into())
    }

    /// Build a [`DiagramError::UnresolvedEndpoint`] value.
    pub fn unresolved_endpoint(edge: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::UnresolvedEndpoint {
            edge: edge.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Build a [`DiagramError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`DiagramError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DiagramError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
