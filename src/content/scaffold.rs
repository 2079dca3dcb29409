//! Property scaffolding.
//!
//! Produces the default property descriptor for a data type, ready for
//! the authoring client to attach to a content type. Pure read and
//! transform; nothing is persisted.

use std::sync::Arc;

use crate::editors::PropertyEditorRegistry;
use crate::error::{AppError, AppResult};
use crate::models::{PropertyScaffold, PropertyTypeValidation};
use crate::store::DataTypeStore;

/// Builds default property descriptors from data type definitions.
#[derive(Clone)]
pub struct PropertyScaffoldBuilder {
    data_types: Arc<dyn DataTypeStore>,
    editors: Arc<dyn PropertyEditorRegistry>,
}

impl PropertyScaffoldBuilder {
    pub fn new(
        data_types: Arc<dyn DataTypeStore>,
        editors: Arc<dyn PropertyEditorRegistry>,
    ) -> Self {
        Self { data_types, editors }
    }

    /// Build the default property descriptor for a data type.
    ///
    /// Fails with `NotFound` when the data type does not exist or its
    /// editor alias is not registered. The configuration is the editor's
    /// default pre-values with the data type's stored overrides applied
    /// through the editor's own stored→editor conversion.
    pub async fn scaffold(&self, data_type_id: i32) -> AppResult<PropertyScaffold> {
        let data_type = self
            .data_types
            .get_by_id(data_type_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let editor = self
            .editors
            .get_by_alias(&data_type.editor_alias)
            .ok_or(AppError::NotFound)?;

        let defaults = editor.default_pre_values();
        let config =
            editor.convert_stored_to_editor_config(&defaults, &data_type.stored_pre_values);

        Ok(PropertyScaffold {
            editor_alias: data_type.editor_alias,
            validation: PropertyTypeValidation::default(),
            view: editor.value_editor_view().to_string(),
            config,
        })
    }
}
