//! RPC envelope helpers
//!
//! Every response carries the protocol tag, the echoed correlation id, and
//! exactly one of `result` or `error`. The error side is a bare message
//! string; the panel has no structured codes to act on.

use serde_json::{json, Value};

use super::models::JSONRPC_VERSION;

/// Builds a success response.
///
/// * `id` – the request identifier that must be echoed back.
/// * `result` – the payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id,
        "result": result,
    })
}

/// Builds an error response.
///
/// * `id` – the request identifier (or `null` if unavailable).
/// * `message` – human-readable description of the fault.
pub fn rpc_error(id: Value, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": JSONRPC_VERSION,
        "id": id,
        "error": message.into(),
    })
}
