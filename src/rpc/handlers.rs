//! RPC Handlers
//!
//! The application-facing side of the bridge: six named operations over
//! the retriever and editor actions, plus the wiring that registers them
//! with a dispatcher. Params structs are deserialized at this boundary;
//! anything malformed surfaces as an `Invalid params` fault.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::BridgeError;
use crate::host::{MICROFLOW_TYPE, MODULE_TYPE, PAGE_TYPE};
use crate::project::{EditorActions, ElementRetriever};
use crate::rpc::dispatcher::RpcDispatcher;
use crate::rpc::models::{
    METHOD_GET_ALL_ELEMENTS, METHOD_GET_DOMAIN_MODELS, METHOD_GET_ELEMENT_DETAILS,
    METHOD_GET_MICROFLOWS, METHOD_GET_PAGES, METHOD_LOCATE_ELEMENT,
};

/// Input for `getElementDetails`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetElementDetailsParams {
    element_id: String,
    element_type: String,
}

/// Input for `locateElement`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocateElementParams {
    qualified_name: String,
    element_type: String,
}

/// The six operations the panel can invoke.
pub struct RpcHandler {
    retriever: ElementRetriever,
    actions: EditorActions,
}

impl RpcHandler {
    pub fn new(retriever: ElementRetriever, actions: EditorActions) -> Self {
        Self { retriever, actions }
    }

    /// Module summaries for the whole project.
    pub fn get_all_elements(&self) -> Result<Value, BridgeError> {
        Ok(serde_json::to_value(self.retriever.elements_of(MODULE_TYPE))?)
    }

    /// Domain models with their entities, in host order.
    pub fn get_domain_models(&self) -> Result<Value, BridgeError> {
        Ok(serde_json::to_value(self.retriever.domain_model_elements())?)
    }

    pub fn get_microflows(&self) -> Result<Value, BridgeError> {
        Ok(serde_json::to_value(self.retriever.elements_of(MICROFLOW_TYPE))?)
    }

    pub fn get_pages(&self) -> Result<Value, BridgeError> {
        Ok(serde_json::to_value(self.retriever.elements_of(PAGE_TYPE))?)
    }

    /// Detail record for one element; a miss is a fault, never a partial
    /// result.
    pub fn get_element_details(&self, params: Value) -> Result<Value, BridgeError> {
        let input: GetElementDetailsParams = parse_params(params)?;
        let unit = self
            .retriever
            .find_by_id(&input.element_id, &input.element_type)
            .ok_or(BridgeError::ElementNotFound {
                id: input.element_id,
                element_type: input.element_type,
            })?;
        Ok(serde_json::to_value(crate::project::mapper::element_details(&unit))?)
    }

    /// Opens an editor for a qualified name.
    pub fn locate_element(&self, params: Value) -> Result<Value, BridgeError> {
        let input: LocateElementParams = parse_params(params)?;
        self.actions.locate(&input.qualified_name, &input.element_type)
    }

    /// Registers all six methods on a fresh dispatcher.
    pub fn into_dispatcher(self) -> RpcDispatcher {
        let handler = Arc::new(self);
        let mut dispatcher = RpcDispatcher::new();

        let h = handler.clone();
        dispatcher.register(
            METHOD_GET_ALL_ELEMENTS,
            Box::new(move |_| h.get_all_elements()),
        );
        let h = handler.clone();
        dispatcher.register(
            METHOD_GET_DOMAIN_MODELS,
            Box::new(move |_| h.get_domain_models()),
        );
        let h = handler.clone();
        dispatcher.register(METHOD_GET_MICROFLOWS, Box::new(move |_| h.get_microflows()));
        let h = handler.clone();
        dispatcher.register(METHOD_GET_PAGES, Box::new(move |_| h.get_pages()));
        let h = handler.clone();
        dispatcher.register(
            METHOD_GET_ELEMENT_DETAILS,
            Box::new(move |params| h.get_element_details(params)),
        );
        let h = handler;
        dispatcher.register(
            METHOD_LOCATE_ELEMENT,
            Box::new(move |params| h.locate_element(params)),
        );

        dispatcher
    }
}

fn parse_params<T: for<'de> Deserialize<'de>>(params: Value) -> Result<T, BridgeError> {
    serde_json::from_value(params).map_err(|err| BridgeError::InvalidParams(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::sample::{sample_editor, sample_project};
    use serde_json::json;

    fn handler() -> RpcHandler {
        let project = sample_project();
        let editor = sample_editor(project.clone());
        RpcHandler::new(
            ElementRetriever::new(project),
            EditorActions::new(editor),
        )
    }

    #[test]
    fn get_all_elements_lists_modules() {
        let result = handler().get_all_elements().unwrap();
        let rows = result.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["type"], "Module");
        assert!(rows[0].get("qualifiedName").is_none());
    }

    #[test]
    fn get_element_details_misses_are_faults() {
        let err = handler()
            .get_element_details(json!({ "elementId": "missing", "elementType": "Microflow" }))
            .expect_err("missing element");
        assert!(matches!(err, BridgeError::ElementNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Element with ID missing and type Microflow not found"
        );
    }

    #[test]
    fn get_element_details_returns_the_full_record() {
        let handler = handler();
        let listing = handler.get_domain_models().unwrap();
        let order = listing
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["name"] == "Shop.Order")
            .unwrap()
            .clone();

        let details = handler
            .get_element_details(json!({
                "elementId": order["id"],
                "elementType": "Entity"
            }))
            .unwrap();
        assert_eq!(details["name"], "Order");
        assert_eq!(details["qualifiedName"], "Shop.Order");
        let properties = details["properties"].as_array().unwrap();
        assert_eq!(properties[0]["name"], "Name");
        assert_eq!(properties[3]["value"], "[2 elements]");
        assert_eq!(details["children"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn locate_element_checks_the_type_tag_first() {
        let err = handler()
            .locate_element(json!({
                "qualifiedName": "Shop.Order",
                "elementType": "DomainModels$Entity"
            }))
            .expect_err("entity is not openable");
        assert_eq!(err.to_string(), "Unsupported element type: DomainModels$Entity");
    }

    #[test]
    fn malformed_params_surface_as_invalid_params() {
        let err = handler()
            .get_element_details(json!({ "elementId": 42 }))
            .expect_err("wrong param types");
        assert!(matches!(err, BridgeError::InvalidParams(_)));
    }

    #[test]
    fn dispatcher_serves_all_six_methods() {
        let dispatcher = handler().into_dispatcher();
        for method in [
            METHOD_GET_ALL_ELEMENTS,
            METHOD_GET_DOMAIN_MODELS,
            METHOD_GET_MICROFLOWS,
            METHOD_GET_PAGES,
        ] {
            let response = dispatcher.handle(&crate::rpc::models::RpcRequest {
                jsonrpc: None,
                method: method.into(),
                params: None,
                id: Some(json!(method)),
            });
            assert!(response.get("result").is_some(), "{method} should succeed");
            assert_eq!(response["id"], json!(method));
        }
    }
}
