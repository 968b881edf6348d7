//! Editor Actions
//!
//! Navigation requests from the panel: resolve a qualified name against the
//! host's addressing API and ask the IDE to open an editor tab for it.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::BridgeError;
use crate::host::{EditorService, EditorTarget};

/// Editor-facing side of the bridge.
pub struct EditorActions {
    editor: Arc<dyn EditorService>,
}

impl EditorActions {
    pub fn new(editor: Arc<dyn EditorService>) -> Self {
        Self { editor }
    }

    /// Opens an editor for the element addressed by `qualified_name`.
    ///
    /// Only microflows and pages are openable; any other type tag is a
    /// fault before the host is consulted. Unresolved addresses and an
    /// IDE refusal to open are faults as well, never silent no-ops.
    pub fn locate(&self, qualified_name: &str, element_type: &str) -> Result<Value, BridgeError> {
        debug!(qualified_name, element_type, "locate element");

        let target = EditorTarget::from_type_tag(element_type)
            .ok_or_else(|| BridgeError::UnsupportedElementType(element_type.to_string()))?;

        let unit = self
            .editor
            .resolve(qualified_name, target)
            .ok_or_else(|| BridgeError::ElementNotResolved(qualified_name.to_string()))?;

        if !self.editor.try_open_editor(&unit) {
            return Err(BridgeError::EditorRejected(qualified_name.to_string()));
        }

        Ok(json!({
            "success": true,
            "message": format!("Open element called for {}", qualified_name),
        }))
    }
}
