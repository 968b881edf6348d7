//! Dev harness routing
//!
//! Emulates the IDE's message loop over HTTP so the panel can be developed
//! against the sample project without Studio running. `POST /message`
//! plays the host event delivery; `GET /channel/:name` plays the panel's
//! side of the post-message channel by draining what the bridge posted.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Request, State},
    middleware::Next,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::bridge::{ChannelLog, HostEvent, PanelBridge};
use crate::project::sample::{sample_editor, sample_project};
use crate::project::{EditorActions, ElementRetriever};
use crate::rpc::RpcHandler;

/// Everything the harness endpoints need.
pub struct DevState {
    pub bridge: PanelBridge,
    pub channels: Arc<ChannelLog>,
}

/// Shared harness state, safe to clone across axum handlers.
pub type SharedState = Arc<DevState>;

/// Wires the sample project, editor double, dispatcher and channel log
/// into a ready-to-serve harness state.
pub fn dev_state() -> SharedState {
    let project = sample_project();
    let editor = sample_editor(project.clone());
    let dispatcher = RpcHandler::new(
        ElementRetriever::new(project),
        EditorActions::new(editor),
    )
    .into_dispatcher();

    let channels = Arc::new(ChannelLog::new());
    let bridge = PanelBridge::new(dispatcher, channels.clone());

    Arc::new(DevState { bridge, channels })
}

/// Creates and configures the harness router with all routes and middleware.
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        info!(method = %req.method(), uri = %req.uri(), "request");
        next.run(req).await
    });

    // Middleware: CORS (permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/message", post(handle_message))
        .route("/channel/:name", get(drain_channel))
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Endpoint: POST /message
/// Delivers one host-shaped event to the bridge.
async fn handle_message(
    State(state): State<SharedState>,
    Json(event): Json<HostEvent>,
) -> impl IntoResponse {
    let handled = state.bridge.on_message(&event);
    Json(json!({
        "status": if handled { "posted" } else { "ignored" },
    }))
}

/// Endpoint: GET /channel/:name
/// Returns and clears everything posted on the channel, oldest first.
async fn drain_channel(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let messages = state.channels.drain(&name);
    Json(json!({
        "channel": name,
        "messages": messages,
    }))
}
