//! Message Adapter
//!
//! The single entry point the host event system invokes per inbound panel
//! message: deserialize the payload, dispatch, serialize, post the response
//! back on the backend channel. One event in, at most one message out.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::host::MessageSink;
use crate::rpc::dispatcher::RpcDispatcher;
use crate::rpc::helpers::rpc_error;
use crate::rpc::models::{RpcRequest, BACKEND_CHANNEL, FRONTEND_CHANNEL};

/// An event as delivered by the host. The host serializes with PascalCase
/// field names; the dev harness uses lowercase. Both are accepted.
#[derive(Debug, Deserialize)]
pub struct HostEvent {
    /// Event discriminator; only `frontend:message` is handled.
    #[serde(alias = "Message")]
    pub message: String,

    /// Opaque payload, expected to deserialize to an [`RpcRequest`].
    #[serde(default, alias = "Data")]
    pub data: Value,
}

/// Glue between the host event system and the dispatcher.
pub struct PanelBridge {
    dispatcher: RpcDispatcher,
    sink: Arc<dyn MessageSink>,
}

impl PanelBridge {
    pub fn new(dispatcher: RpcDispatcher, sink: Arc<dyn MessageSink>) -> Self {
        Self { dispatcher, sink }
    }

    /// Handles one inbound event. Returns `true` when the event was ours
    /// and a response was posted; foreign discriminators are ignored.
    pub fn on_message(&self, event: &HostEvent) -> bool {
        if event.message != FRONTEND_CHANNEL {
            debug!(discriminator = %event.message, "ignoring foreign event");
            return false;
        }

        let response = match serde_json::from_value::<RpcRequest>(event.data.clone()) {
            Ok(request) => self.dispatcher.handle(&request),
            Err(err) => {
                warn!(%err, "malformed request payload");
                rpc_error(Value::Null, format!("Invalid request payload: {}", err))
            }
        };

        match serde_json::to_string(&response) {
            Ok(text) => self.sink.post_message(BACKEND_CHANNEL, &text),
            // Value-to-string serialization only fails on non-string map
            // keys, which envelopes never contain.
            Err(err) => warn!(%err, "response serialization failed"),
        }
        true
    }
}

/// [`MessageSink`] that records posted messages per channel. The dev
/// harness drains it over HTTP; tests inspect it directly.
#[derive(Default)]
pub struct ChannelLog {
    channels: DashMap<String, Vec<String>>,
}

impl ChannelLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything posted on `channel`, oldest first.
    pub fn drain(&self, channel: &str) -> Vec<String> {
        self.channels
            .remove(channel)
            .map(|(_, messages)| messages)
            .unwrap_or_default()
    }
}

impl MessageSink for ChannelLog {
    fn post_message(&self, channel: &str, message: &str) {
        self.channels
            .entry(channel.to_string())
            .or_default()
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::sample::{sample_editor, sample_project};
    use crate::project::{EditorActions, ElementRetriever};
    use crate::rpc::RpcHandler;
    use serde_json::json;

    fn bridge() -> (PanelBridge, Arc<ChannelLog>) {
        let project = sample_project();
        let editor = sample_editor(project.clone());
        let dispatcher = RpcHandler::new(
            ElementRetriever::new(project),
            EditorActions::new(editor),
        )
        .into_dispatcher();
        let log = Arc::new(ChannelLog::new());
        (PanelBridge::new(dispatcher, log.clone()), log)
    }

    fn event(data: Value) -> HostEvent {
        HostEvent {
            message: FRONTEND_CHANNEL.to_string(),
            data,
        }
    }

    #[test]
    fn foreign_discriminators_post_nothing() {
        let (bridge, log) = bridge();
        let handled = bridge.on_message(&HostEvent {
            message: "frontend:resize".to_string(),
            data: json!({ "method": "getPages", "id": 1 }),
        });
        assert!(!handled);
        assert!(log.drain(BACKEND_CHANNEL).is_empty());
    }

    #[test]
    fn handled_events_post_exactly_one_response() {
        let (bridge, log) = bridge();
        assert!(bridge.on_message(&event(json!({ "method": "getPages", "id": 5 }))));

        let posted = log.drain(BACKEND_CHANNEL);
        assert_eq!(posted.len(), 1);
        let response: Value = serde_json::from_str(&posted[0]).unwrap();
        assert_eq!(response["id"], 5);
        assert_eq!(response["result"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn malformed_payloads_become_null_id_errors() {
        let (bridge, log) = bridge();
        assert!(bridge.on_message(&event(json!("not an object"))));

        let posted = log.drain(BACKEND_CHANNEL);
        let response: Value = serde_json::from_str(&posted[0]).unwrap();
        assert_eq!(response["id"], Value::Null);
        assert!(response["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request payload"));
    }

    #[test]
    fn host_shaped_events_deserialize_with_pascal_case() {
        let event: HostEvent = serde_json::from_value(json!({
            "Message": "frontend:message",
            "Data": { "method": "getMicroflows", "id": 2 }
        }))
        .unwrap();
        assert_eq!(event.message, FRONTEND_CHANNEL);
        assert_eq!(event.data["method"], "getMicroflows");
    }
}
