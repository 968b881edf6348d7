//! RPC protocol models and constants

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// Constants
// =============================================================================

/// Protocol tag stamped on every response envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Discriminator of inbound panel events.
pub const FRONTEND_CHANNEL: &str = "frontend:message";
/// Channel responses are posted back on.
pub const BACKEND_CHANNEL: &str = "backend:response";

/// The six method names forming the public surface.
pub const METHOD_GET_ALL_ELEMENTS: &str = "getAllElements";
pub const METHOD_GET_DOMAIN_MODELS: &str = "getDomainModels";
pub const METHOD_GET_MICROFLOWS: &str = "getMicroflows";
pub const METHOD_GET_PAGES: &str = "getPages";
pub const METHOD_GET_ELEMENT_DETAILS: &str = "getElementDetails";
pub const METHOD_LOCATE_ELEMENT: &str = "locateElement";

// =============================================================================
// Protocol models
// =============================================================================

/// Request envelope sent by the panel.
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    /// Protocol version (should be "2.0"); not enforced.
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke; a missing field dispatches as the empty
    /// name so the correlation id still makes it into the error envelope.
    #[serde(default)]
    pub method: String,

    /// Named arguments for the method.
    pub params: Option<Value>,

    /// Opaque correlation token, echoed back verbatim.
    pub id: Option<Value>,
}
