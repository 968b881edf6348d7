//! RPC Dispatcher
//!
//! A name -> handler table and the single choke point where faults become
//! wire text. Handlers are synchronous; the host serializes delivery, so
//! there is no queueing or cancellation here.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::BridgeError;
use crate::rpc::helpers::{rpc_error, rpc_success};
use crate::rpc::models::RpcRequest;

/// A registered method implementation. Receives the request's `params`
/// (JSON null when absent) and returns the result payload or a fault.
pub type Handler = Box<dyn Fn(Value) -> Result<Value, BridgeError> + Send + Sync>;

/// Maps method names to handlers and wraps outcomes into envelopes.
#[derive(Default)]
pub struct RpcDispatcher {
    methods: HashMap<String, Handler>,
}

impl RpcDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handler` under `name`. Last registration wins.
    pub fn register(&mut self, name: impl Into<String>, handler: Handler) {
        self.methods.insert(name.into(), handler);
    }

    /// Serves one request. The correlation id is echoed in every envelope;
    /// an unknown method never reaches a handler, and a handler fault is
    /// stringified into the `error` field rather than propagated.
    pub fn handle(&self, request: &RpcRequest) -> Value {
        let id = request.id.clone().unwrap_or(Value::Null);
        debug!(method = %request.method, "dispatch");

        let Some(handler) = self.methods.get(&request.method) else {
            warn!(method = %request.method, "unknown method");
            return rpc_error(id, BridgeError::MethodNotFound(request.method.clone()).to_string());
        };

        let params = request.params.clone().unwrap_or(Value::Null);
        match handler(params) {
            Ok(result) => rpc_success(id, result),
            Err(fault) => {
                warn!(method = %request.method, %fault, "handler fault");
                rpc_error(id, fault.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(method: &str, params: Option<Value>, id: Option<Value>) -> RpcRequest {
        RpcRequest {
            jsonrpc: Some("2.0".into()),
            method: method.into(),
            params,
            id,
        }
    }

    #[test]
    fn unknown_method_preserves_any_id() {
        let dispatcher = RpcDispatcher::new();

        for id in [json!(1), json!("abc"), json!({"nested": true})] {
            let response = dispatcher.handle(&request("nope", None, Some(id.clone())));
            assert_eq!(response["id"], id);
            assert_eq!(response["error"], "Method \"nope\" not found");
            assert!(response.get("result").is_none());
        }

        // Absent id is echoed as null.
        let response = dispatcher.handle(&request("nope", None, None));
        assert_eq!(response["id"], Value::Null);
    }

    #[test]
    fn registered_method_result_is_echoed_verbatim() {
        let mut dispatcher = RpcDispatcher::new();
        dispatcher.register(
            "echoParams",
            Box::new(|params| Ok(json!({ "got": params }))),
        );

        let response =
            dispatcher.handle(&request("echoParams", Some(json!({"x": 1})), Some(json!(9))));
        assert_eq!(response["result"], json!({ "got": { "x": 1 } }));
        assert_eq!(response["id"], 9);
    }

    #[test]
    fn handler_faults_become_string_errors() {
        let mut dispatcher = RpcDispatcher::new();
        dispatcher.register(
            "alwaysFails",
            Box::new(|_| Err(BridgeError::UnsupportedElementType("Widget".into()))),
        );

        let response = dispatcher.handle(&request("alwaysFails", None, Some(json!(3))));
        assert_eq!(response["error"], "Unsupported element type: Widget");
        assert_eq!(response["id"], 3);
    }

    #[test]
    fn last_registration_wins() {
        let mut dispatcher = RpcDispatcher::new();
        dispatcher.register("dup", Box::new(|_| Ok(json!("first"))));
        dispatcher.register("dup", Box::new(|_| Ok(json!("second"))));

        let response = dispatcher.handle(&request("dup", None, Some(json!(1))));
        assert_eq!(response["result"], "second");
    }
}
