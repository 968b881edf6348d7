//! In-memory sample project
//!
//! Stands in for the IDE host when the panel is developed outside Studio:
//! a small project tree implementing [`ProjectRoot`], plus an editor double
//! that resolves qualified names over it and records every open request.
//! The integration tests run against the same fixtures.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::host::{
    EditorService, EditorTarget, ModelUnit, ProjectRoot, PropertySnapshot, PropertyValue,
    UnitHandle, DOMAIN_MODEL_TYPE, ENTITY_TYPE, MICROFLOW_TYPE, MODULE_TYPE, PAGE_TYPE,
};

/// One node of the sample project tree.
pub struct SampleUnit {
    id: String,
    type_tag: String,
    name: String,
    qualified_name: Option<String>,
    units: Vec<Arc<SampleUnit>>,
    elements: Vec<Arc<SampleUnit>>,
    properties: Vec<PropertySnapshot>,
}

impl SampleUnit {
    pub fn new(type_tag: &str, name: &str) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            type_tag: type_tag.to_string(),
            name: name.to_string(),
            qualified_name: None,
            units: Vec::new(),
            elements: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_qualified_name(mut self, qualified_name: &str) -> Self {
        self.qualified_name = Some(qualified_name.to_string());
        self
    }

    /// Adds a nested unit (module -> domain model / microflow / page).
    pub fn with_unit(mut self, unit: SampleUnit) -> Self {
        self.units.push(Arc::new(unit));
        self
    }

    /// Adds a contained element (domain model -> entity, entity -> attribute).
    pub fn with_child(mut self, element: SampleUnit) -> Self {
        self.elements.push(Arc::new(element));
        self
    }

    pub fn with_property(mut self, property: PropertySnapshot) -> Self {
        self.properties.push(property);
        self
    }
}

impl ModelUnit for SampleUnit {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn qualified_name(&self) -> Option<String> {
        self.qualified_name.clone()
    }

    fn type_name(&self) -> String {
        self.type_tag.clone()
    }

    fn units_of_type(&self, unit_type: &str) -> Vec<UnitHandle> {
        self.units
            .iter()
            .filter(|unit| unit.type_tag == unit_type)
            .map(|unit| unit.clone() as UnitHandle)
            .collect()
    }

    fn elements_of_type(&self, element_type: &str) -> Vec<UnitHandle> {
        self.elements
            .iter()
            .filter(|element| element.type_tag == element_type)
            .map(|element| element.clone() as UnitHandle)
            .collect()
    }

    fn properties(&self) -> Vec<PropertySnapshot> {
        self.properties.clone()
    }

    fn children(&self) -> Vec<UnitHandle> {
        self.elements
            .iter()
            .map(|element| element.clone() as UnitHandle)
            .collect()
    }
}

/// Root of the sample project: a flat list of modules.
pub struct SampleProject {
    modules: Vec<Arc<SampleUnit>>,
}

impl ProjectRoot for SampleProject {
    fn units_of_type(&self, unit_type: &str) -> Vec<UnitHandle> {
        if unit_type == MODULE_TYPE {
            return self
                .modules
                .iter()
                .map(|module| module.clone() as UnitHandle)
                .collect();
        }
        // Non-module units are addressed project-wide by collecting across
        // modules, matching how the host flattens its unit index.
        self.modules
            .iter()
            .flat_map(|module| module.units_of_type(unit_type))
            .collect()
    }
}

/// Builds the fixture project: two modules with domain models, microflows
/// and pages, in a fixed declaration order the tests rely on.
pub fn sample_project() -> Arc<SampleProject> {
    let shop = SampleUnit::new(MODULE_TYPE, "Shop")
        .with_unit(
            SampleUnit::new(DOMAIN_MODEL_TYPE, "DomainModel").with_child(
                SampleUnit::new(ENTITY_TYPE, "Order")
                    .with_qualified_name("Shop.Order")
                    .with_property(PropertySnapshot {
                        name: "Name".into(),
                        type_name: "String".into(),
                        value: PropertyValue::Scalar("Order".into()),
                    })
                    .with_property(PropertySnapshot {
                        name: "Persistable".into(),
                        type_name: "Boolean".into(),
                        value: PropertyValue::Scalar("true".into()),
                    })
                    .with_property(PropertySnapshot {
                        name: "Generalization".into(),
                        type_name: "Element".into(),
                        value: PropertyValue::Element(None),
                    })
                    .with_property(PropertySnapshot {
                        name: "Attributes".into(),
                        type_name: "Element".into(),
                        value: PropertyValue::ElementList(2),
                    })
                    .with_child(SampleUnit::new("DomainModels$Attribute", "Number"))
                    .with_child(SampleUnit::new("DomainModels$Attribute", "Total")),
            )
            .with_child(SampleUnit::new(ENTITY_TYPE, "OrderLine").with_qualified_name("Shop.OrderLine")),
        )
        .with_unit(
            SampleUnit::new(MICROFLOW_TYPE, "ACT_CreateOrder")
                .with_qualified_name("Shop.ACT_CreateOrder"),
        )
        .with_unit(
            SampleUnit::new(MICROFLOW_TYPE, "SUB_PriceOrder")
                .with_qualified_name("Shop.SUB_PriceOrder"),
        )
        .with_unit(
            SampleUnit::new(PAGE_TYPE, "Order_Overview").with_qualified_name("Shop.Order_Overview"),
        )
        .with_unit(
            SampleUnit::new(PAGE_TYPE, "Order_NewEdit").with_qualified_name("Shop.Order_NewEdit"),
        );

    let crm = SampleUnit::new(MODULE_TYPE, "Crm")
        .with_unit(
            SampleUnit::new(DOMAIN_MODEL_TYPE, "DomainModel")
                .with_child(SampleUnit::new(ENTITY_TYPE, "Contact").with_qualified_name("Crm.Contact")),
        )
        .with_unit(
            SampleUnit::new(MICROFLOW_TYPE, "ACT_SyncContacts")
                .with_qualified_name("Crm.ACT_SyncContacts"),
        )
        .with_unit(
            SampleUnit::new(PAGE_TYPE, "Contact_Overview")
                .with_qualified_name("Crm.Contact_Overview"),
        );

    Arc::new(SampleProject {
        modules: vec![Arc::new(shop), Arc::new(crm)],
    })
}

/// Editor double: resolves qualified names against the project index and
/// records what it was asked to open.
pub struct SampleEditor {
    index: HashMap<(String, EditorTargetKey), UnitHandle>,
    opened: Mutex<Vec<String>>,
    accept_opens: AtomicBool,
}

type EditorTargetKey = u8;

fn target_key(target: EditorTarget) -> EditorTargetKey {
    match target {
        EditorTarget::Microflow => 0,
        EditorTarget::Page => 1,
    }
}

impl SampleEditor {
    /// Qualified names the editor was asked to open, in request order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("opened log poisoned").clone()
    }

    /// Makes every subsequent open request fail, as the IDE may.
    pub fn refuse_opens(&self) {
        self.accept_opens.store(false, Ordering::SeqCst);
    }
}

impl EditorService for SampleEditor {
    fn resolve(&self, qualified_name: &str, target: EditorTarget) -> Option<UnitHandle> {
        self.index
            .get(&(qualified_name.to_string(), target_key(target)))
            .cloned()
    }

    fn try_open_editor(&self, unit: &UnitHandle) -> bool {
        if !self.accept_opens.load(Ordering::SeqCst) {
            return false;
        }
        let label = unit.qualified_name().unwrap_or_else(|| unit.name());
        self.opened.lock().expect("opened log poisoned").push(label);
        true
    }
}

/// Indexes the project's microflows and pages by qualified name.
pub fn sample_editor(project: Arc<SampleProject>) -> Arc<SampleEditor> {
    let mut index = HashMap::new();
    for (unit_type, target) in [
        (MICROFLOW_TYPE, EditorTarget::Microflow),
        (PAGE_TYPE, EditorTarget::Page),
    ] {
        for unit in project.units_of_type(unit_type) {
            if let Some(qualified_name) = unit.qualified_name() {
                index.insert((qualified_name, target_key(target)), unit);
            }
        }
    }
    Arc::new(SampleEditor {
        index,
        opened: Mutex::new(Vec::new()),
        accept_opens: AtomicBool::new(true),
    })
}
