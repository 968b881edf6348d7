//! Element Retriever
//!
//! Listing and lookup scans over the host's module tree. The collections
//! involved are small; every operation is a fresh linear walk in whatever
//! order the host reports, with no sorting and no deduplication.

use std::sync::Arc;

use crate::host::{
    full_type_tag, ProjectRoot, UnitHandle, DOMAIN_MODEL_TYPE, ENTITY_TYPE, MODULE_TYPE,
};
use crate::project::mapper::{self, ElementSummary};

/// Read access to the project model, rooted at the host-supplied handle.
pub struct ElementRetriever {
    root: Arc<dyn ProjectRoot>,
}

impl ElementRetriever {
    pub fn new(root: Arc<dyn ProjectRoot>) -> Self {
        Self { root }
    }

    /// All top-level modules, in declaration order.
    pub fn modules(&self) -> Vec<UnitHandle> {
        self.root.units_of_type(MODULE_TYPE)
    }

    /// Summaries of all units of `unit_type` across the project. Modules
    /// list flat; any other kind scans per module and names the units
    /// `Module.Unit`.
    pub fn elements_of(&self, unit_type: &str) -> Vec<ElementSummary> {
        let modules = self.modules();

        if unit_type == MODULE_TYPE {
            return modules.iter().map(mapper::module_summary).collect();
        }

        let mut elements = Vec::new();
        for module in &modules {
            let module_name = module.name();
            for unit in module.units_of_type(unit_type) {
                elements.push(mapper::unit_summary(&module_name, &unit, unit_type));
            }
        }
        elements
    }

    /// Every domain model followed by its entities, module by module.
    pub fn domain_model_elements(&self) -> Vec<ElementSummary> {
        let mut elements = Vec::new();
        for module in self.modules() {
            let module_name = module.name();
            for domain_model in module.units_of_type(DOMAIN_MODEL_TYPE) {
                elements.push(mapper::nested_summary(&module_name, &domain_model, "DomainModel"));
                for entity in domain_model.elements_of_type(ENTITY_TYPE) {
                    elements.push(mapper::nested_summary(&module_name, &entity, "Entity"));
                }
            }
        }
        elements
    }

    /// Locates a single unit by id and short type tag. Entities live two
    /// levels down and need the nested walk; everything else is a flat scan.
    /// Absence is `None`; the caller decides whether that is a fault.
    pub fn find_by_id(&self, element_id: &str, element_type: &str) -> Option<UnitHandle> {
        let unit_type = full_type_tag(element_type)?;

        if element_type == "Entity" {
            for module in self.modules() {
                for domain_model in module.units_of_type(DOMAIN_MODEL_TYPE) {
                    for entity in domain_model.elements_of_type(ENTITY_TYPE) {
                        if entity.id() == element_id {
                            return Some(entity);
                        }
                    }
                }
            }
            return None;
        }

        self.root
            .units_of_type(unit_type)
            .into_iter()
            .find(|unit| unit.id() == element_id)
    }
}
