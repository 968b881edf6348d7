//! Bridge error type
//!
//! Every fault crossing the RPC boundary ends up here. The dispatcher is
//! the only place these are rendered to wire text; the frontend sees the
//! `Display` output in the envelope's `error` field and nothing else.

use thiserror::Error;

/// Faults raised while serving a panel request.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Request named a method nobody registered.
    #[error("Method \"{0}\" not found")]
    MethodNotFound(String),

    /// Params failed to deserialize into the handler's input shape.
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Lookup by id and type tag came back empty.
    #[error("Element with ID {id} and type {element_type} not found")]
    ElementNotFound { id: String, element_type: String },

    /// `locateElement` was asked for a type tag outside the openable set.
    #[error("Unsupported element type: {0}")]
    UnsupportedElementType(String),

    /// Qualified name did not resolve to a live element.
    #[error("Element {0} could not be resolved")]
    ElementNotResolved(String),

    /// The IDE declined to open an editor for a resolved element.
    #[error("Editor could not be opened for {0}")]
    EditorRejected(String),

    /// A result record failed to serialize. Should not happen for the
    /// record shapes this crate produces.
    #[error("Internal serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}
