//! Host API seams
//!
//! The IDE owns the project model; the bridge only ever sees it through
//! these traits. The dependency graph is static and tiny, so plain trait
//! objects handed in through constructors replace any container wiring.

use std::sync::Arc;

// =============================================================================
// Type tags
// =============================================================================

/// Host addressing grammar is `Namespace$Kind`.
pub const MODULE_TYPE: &str = "Projects$Module";
pub const DOMAIN_MODEL_TYPE: &str = "DomainModels$DomainModel";
pub const ENTITY_TYPE: &str = "DomainModels$Entity";
pub const MICROFLOW_TYPE: &str = "Microflows$Microflow";
pub const PAGE_TYPE: &str = "Pages$Page";

/// Extracts the short kind from a full type tag (`Pages$Page` -> `Page`).
pub fn short_type_tag(unit_type: &str) -> &str {
    unit_type.rsplit('$').next().unwrap_or(unit_type)
}

/// Maps a short kind back to the full tag the host understands.
pub fn full_type_tag(element_type: &str) -> Option<&'static str> {
    match element_type {
        "Module" => Some(MODULE_TYPE),
        "DomainModel" => Some(DOMAIN_MODEL_TYPE),
        "Microflow" => Some(MICROFLOW_TYPE),
        "Page" => Some(PAGE_TYPE),
        "Entity" => Some(ENTITY_TYPE),
        _ => None,
    }
}

// =============================================================================
// Project model
// =============================================================================

/// Shared handle to a host model unit or element.
pub type UnitHandle = Arc<dyn ModelUnit>;

/// The project root the host hands the plugin at load time.
pub trait ProjectRoot: Send + Sync {
    /// All units of the given full type tag, in declaration order.
    fn units_of_type(&self, unit_type: &str) -> Vec<UnitHandle>;
}

/// A single addressable unit or contained element of the project model.
pub trait ModelUnit: Send + Sync {
    /// Host-assigned opaque identifier.
    fn id(&self) -> String;

    /// Bare display name (no module prefix).
    fn name(&self) -> String;

    /// Host-resolvable address, when the unit kind carries one.
    fn qualified_name(&self) -> Option<String>;

    /// The unit's own type, as reported by the host.
    fn type_name(&self) -> String;

    /// Nested units of a type (module -> domain models, microflows, pages).
    fn units_of_type(&self, unit_type: &str) -> Vec<UnitHandle>;

    /// Contained elements of a type (domain model -> entities).
    fn elements_of_type(&self, element_type: &str) -> Vec<UnitHandle>;

    /// Declared properties, in declaration order.
    fn properties(&self) -> Vec<PropertySnapshot>;

    /// Directly contained child elements, in declaration order.
    fn children(&self) -> Vec<UnitHandle>;
}

/// One declared property of a model unit, captured at request time.
#[derive(Debug, Clone)]
pub struct PropertySnapshot {
    pub name: String,
    /// Host property type name (`String`, `Element`, ...).
    pub type_name: String,
    pub value: PropertyValue,
}

/// The value side of a property, flattened to what the panel can show.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// Host reported no value.
    Absent,
    /// Primitive value already rendered by the host.
    Scalar(String),
    /// Single element reference; carries the referenced element's name.
    Element(Option<String>),
    /// Element list; only the count survives the mapping.
    ElementList(usize),
}

// =============================================================================
// Editor + messaging
// =============================================================================

/// The two unit kinds the IDE will open an editor tab for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTarget {
    Microflow,
    Page,
}

impl EditorTarget {
    /// Full type tag -> target. Anything outside the openable set is `None`.
    pub fn from_type_tag(element_type: &str) -> Option<Self> {
        match element_type {
            MICROFLOW_TYPE => Some(Self::Microflow),
            PAGE_TYPE => Some(Self::Page),
            _ => None,
        }
    }
}

/// The host's qualified-name addressing and editor surface.
pub trait EditorService: Send + Sync {
    /// Parses the qualified name for the target kind and resolves it to a
    /// live element, or `None` when the address does not resolve.
    fn resolve(&self, qualified_name: &str, target: EditorTarget) -> Option<UnitHandle>;

    /// Asks the IDE to focus/open an editor; `false` means it declined.
    fn try_open_editor(&self, unit: &UnitHandle) -> bool;
}

/// The host's post-message primitive for reaching the panel.
pub trait MessageSink: Send + Sync {
    fn post_message(&self, channel: &str, message: &str);
}
