//! Element Mapper
//!
//! Flattens host model objects into the plain records the panel renders.
//! Records are built per request and never cached; field order and list
//! order follow whatever the host declared.

use serde::Serialize;

use crate::host::{short_type_tag, PropertyValue, UnitHandle};

/// One row in a listing response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ElementSummary {
    /// Host-assigned opaque identifier.
    pub id: String,

    /// Display name; dotted (`Module.Unit`) for module-scoped units.
    pub name: String,

    /// Short type tag (`Module`, `Microflow`, ...).
    #[serde(rename = "type")]
    pub element_type: String,

    /// Host-resolvable address, present for units that carry one.
    #[serde(rename = "qualifiedName", skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
}

/// Full record for a single element, shown in the panel's detail view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ElementDetails {
    pub name: String,

    #[serde(rename = "type")]
    pub element_type: String,

    #[serde(rename = "qualifiedName")]
    pub qualified_name: Option<String>,

    pub properties: Vec<PropertyDetail>,

    pub children: Vec<ChildDetail>,
}

/// One declared property, value already rendered to display text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyDetail {
    pub name: String,

    #[serde(rename = "type")]
    pub property_type: String,

    pub value: String,
}

/// One contained child element.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChildDetail {
    pub name: String,

    #[serde(rename = "type")]
    pub element_type: String,
}

/// Summary for a top-level module. Modules are named bare and carry no
/// qualified name.
pub fn module_summary(module: &UnitHandle) -> ElementSummary {
    ElementSummary {
        id: module.id(),
        name: module.name(),
        element_type: short_type_tag(crate::host::MODULE_TYPE).to_string(),
        qualified_name: None,
    }
}

/// Summary for a unit inside a module, named `Module.Unit`.
pub fn unit_summary(module_name: &str, unit: &UnitHandle, unit_type: &str) -> ElementSummary {
    ElementSummary {
        id: unit.id(),
        name: format!("{}.{}", module_name, unit.name()),
        element_type: short_type_tag(unit_type).to_string(),
        qualified_name: unit.qualified_name(),
    }
}

/// Summary for a nested element (domain model, entity) without an address.
pub fn nested_summary(module_name: &str, unit: &UnitHandle, short_type: &str) -> ElementSummary {
    ElementSummary {
        id: unit.id(),
        name: format!("{}.{}", module_name, unit.name()),
        element_type: short_type.to_string(),
        qualified_name: None,
    }
}

/// Reflects over a unit's declared properties and contained elements.
pub fn element_details(unit: &UnitHandle) -> ElementDetails {
    let properties = unit
        .properties()
        .into_iter()
        .map(|prop| PropertyDetail {
            name: prop.name,
            property_type: prop.type_name,
            value: render_property_value(&prop.value),
        })
        .collect();

    let children = unit
        .children()
        .into_iter()
        .map(|child| {
            let name = child.name();
            ChildDetail {
                name: if name.is_empty() { "Unnamed".to_string() } else { name },
                element_type: child.type_name(),
            }
        })
        .collect();

    ElementDetails {
        name: unit.name(),
        element_type: unit.type_name(),
        qualified_name: unit.qualified_name(),
        properties,
        children,
    }
}

fn render_property_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Absent => "N/A".to_string(),
        PropertyValue::Scalar(text) => text.clone(),
        PropertyValue::Element(Some(name)) => name.clone(),
        PropertyValue::Element(None) => "N/A".to_string(),
        PropertyValue::ElementList(0) => "[]".to_string(),
        PropertyValue::ElementList(count) => format!("[{} elements]", count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::sample::SampleUnit;
    use crate::host::{PropertySnapshot, ENTITY_TYPE, MICROFLOW_TYPE};
    use std::sync::Arc;

    #[test]
    fn property_values_render_like_the_panel_expects() {
        assert_eq!(render_property_value(&PropertyValue::Absent), "N/A");
        assert_eq!(
            render_property_value(&PropertyValue::Scalar("true".into())),
            "true"
        );
        assert_eq!(
            render_property_value(&PropertyValue::Element(Some("Customer".into()))),
            "Customer"
        );
        assert_eq!(render_property_value(&PropertyValue::Element(None)), "N/A");
        assert_eq!(render_property_value(&PropertyValue::ElementList(0)), "[]");
        assert_eq!(
            render_property_value(&PropertyValue::ElementList(3)),
            "[3 elements]"
        );
    }

    #[test]
    fn unit_summary_dots_the_module_name() {
        let unit: UnitHandle = Arc::new(
            SampleUnit::new(MICROFLOW_TYPE, "ACT_CreateOrder")
                .with_qualified_name("Shop.ACT_CreateOrder"),
        );
        let summary = unit_summary("Shop", &unit, MICROFLOW_TYPE);
        assert_eq!(summary.name, "Shop.ACT_CreateOrder");
        assert_eq!(summary.element_type, "Microflow");
        assert_eq!(summary.qualified_name.as_deref(), Some("Shop.ACT_CreateOrder"));
    }

    #[test]
    fn details_name_nameless_children_unnamed() {
        let unit: UnitHandle = Arc::new(
            SampleUnit::new(ENTITY_TYPE, "Order")
                .with_property(PropertySnapshot {
                    name: "Persistable".into(),
                    type_name: "Boolean".into(),
                    value: PropertyValue::Scalar("true".into()),
                })
                .with_child(SampleUnit::new("DomainModels$Attribute", "")),
        );
        let details = element_details(&unit);
        assert_eq!(details.properties.len(), 1);
        assert_eq!(details.children[0].name, "Unnamed");
        assert_eq!(details.children[0].element_type, "DomainModels$Attribute");
    }
}
