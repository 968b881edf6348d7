//! Project Model Access
//!
//! Everything the bridge reads from (or asks of) the host project model:
//! - Summary/detail mapping of model units to plain records
//! - Listing and lookup scans over the module tree
//! - Editor navigation by qualified name
//! - An in-memory sample project standing in for the IDE during development

pub mod actions;
pub mod mapper;
pub mod retriever;
pub mod sample;

pub use actions::EditorActions;
pub use mapper::{ElementDetails, ElementSummary};
pub use retriever::ElementRetriever;
