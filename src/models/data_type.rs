//! Data type definition record.

use serde::{Deserialize, Serialize};

/// A configured instance of a value editor (e.g. "Textstring",
/// "Date Picker") usable by one or more properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTypeDefinition {
    pub id: i32,

    /// Alias of the value editor this data type configures.
    pub editor_alias: String,

    /// Definition-specific pre-value overrides, in stored (database)
    /// shape. Converted to editor shape when scaffolding.
    pub stored_pre_values: serde_json::Value,
}
