//! Property editor registry.
//!
//! Value editors are registered by the surrounding platform; the catalog
//! only consults them when scaffolding a property from a data type. Each
//! editor exposes its client view, its default pre-values, and the
//! conversion from stored (database-shape) pre-values to editor shape.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

/// A registered value editor.
pub trait PropertyEditor: Send + Sync {
    /// Alias the editor is registered under.
    fn alias(&self) -> &str;

    /// View identifier the client renders the value editor with.
    fn value_editor_view(&self) -> &str;

    /// Editor-defined default pre-values, in stored shape.
    fn default_pre_values(&self) -> Value;

    /// Convert stored pre-values to the editor's configuration shape,
    /// applying `stored` overrides on top of `defaults`.
    fn convert_stored_to_editor_config(&self, defaults: &Value, stored: &Value) -> Value;
}

/// Lookup of registered editors by alias.
pub trait PropertyEditorRegistry: Send + Sync {
    fn get_by_alias(&self, alias: &str) -> Option<Arc<dyn PropertyEditor>>;
}

/// DashMap-backed editor registry.
#[derive(Default)]
pub struct EditorRegistry {
    editors: DashMap<String, Arc<dyn PropertyEditor>>,
}

impl EditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an editor under its alias, replacing any previous entry.
    pub fn register(&self, editor: Arc<dyn PropertyEditor>) {
        self.editors.insert(editor.alias().to_string(), editor);
    }

    /// Number of registered editors.
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    /// Whether no editors are registered.
    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}

impl PropertyEditorRegistry for EditorRegistry {
    fn get_by_alias(&self, alias: &str) -> Option<Arc<dyn PropertyEditor>> {
        self.editors.get(alias).map(|e| e.clone())
    }
}

/// Editor whose configuration conversion shallow-merges stored values
/// over the defaults. Fits editors whose database and editor shapes
/// coincide.
pub struct JsonMergeEditor {
    pub alias: String,
    pub view: String,
    pub defaults: Value,
}

impl PropertyEditor for JsonMergeEditor {
    fn alias(&self) -> &str {
        &self.alias
    }

    fn value_editor_view(&self) -> &str {
        &self.view
    }

    fn default_pre_values(&self) -> Value {
        self.defaults.clone()
    }

    fn convert_stored_to_editor_config(&self, defaults: &Value, stored: &Value) -> Value {
        merge_pre_values(defaults, stored)
    }
}

/// Shallow overlay of stored pre-values onto editor defaults.
///
/// Object-on-object merges key by key with stored values winning; a null
/// stored value leaves the defaults untouched; anything else replaces
/// the defaults wholesale.
pub fn merge_pre_values(defaults: &Value, stored: &Value) -> Value {
    match (defaults, stored) {
        (Value::Object(d), Value::Object(s)) => {
            let mut merged = d.clone();
            for (key, value) in s {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        (d, Value::Null) => d.clone(),
        (_, s) => s.clone(),
    }
}
