//! Studio Panel Bridge
//!
//! Bridge plugin between a frontend panel embedded in the Studio IDE and
//! the host's in-memory project model. Inbound panel messages carry small
//! JSON-RPC requests; each is translated into reads over the module tree
//! (modules, domain models, entities, microflows, pages) or an editor
//! navigation, and answered with a JSON envelope on the backend channel.
//!
//! The host hands the plugin its seams at load time: a project root, the
//! editor surface, and a post-message primitive (see [`host`]). A dev
//! harness (`router` + the `studio-bridge-dev` binary) emulates those
//! seams over HTTP with an in-memory sample project.

// Domain modules
pub mod bridge;
pub mod error;
pub mod host;
pub mod project;
pub mod rpc;

// Infrastructure
pub mod router;

pub use bridge::{HostEvent, PanelBridge};
pub use error::BridgeError;
