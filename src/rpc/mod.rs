//! RPC layer
//!
//! The panel speaks a small JSON-RPC dialect: six read/navigate methods,
//! one request and one response envelope per message.
//! - Protocol models (RpcRequest, method and channel constants)
//! - Envelope helpers (success/error responses)
//! - The dispatcher (name -> handler table)
//! - The handlers wiring retrieval and editor actions to method names

pub mod dispatcher;
pub mod handlers;
pub mod helpers;
pub mod models;

pub use dispatcher::RpcDispatcher;
pub use handlers::RpcHandler;
pub use models::RpcRequest;
