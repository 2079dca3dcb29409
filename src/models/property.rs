//! Property scaffolding shapes.

use serde::{Deserialize, Serialize};

/// Validation rules attached to a property. Scaffolds start with an
/// empty block; authors fill it in client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeValidation {
    /// Whether a value is required.
    pub mandatory: bool,

    /// Optional regular expression the value must match.
    pub pattern: Option<String>,
}

/// Default property descriptor produced for a data type, ready for the
/// authoring client to attach to a content type. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyScaffold {
    /// Value editor handling the property.
    pub editor_alias: String,

    /// Empty/default validation block.
    pub validation: PropertyTypeValidation,

    /// View identifier the client renders the value editor with.
    pub view: String,

    /// Editor configuration: default pre-values with the data type's
    /// stored overrides applied, in editor shape.
    pub config: serde_json::Value,
}
