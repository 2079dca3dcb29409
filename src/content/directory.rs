//! Content type directory.
//!
//! CRUD surface over content type definitions. The directory is the sole
//! writer: every mutation goes through [`ContentTypeDirectory::upsert`],
//! which replaces the full mapped field set of one persisted entity per
//! call.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{ContentTypeDefinition, ContentTypeSubmission};
use crate::store::ContentTypeStore;

/// Directory of content type definitions.
#[derive(Clone)]
pub struct ContentTypeDirectory {
    store: Arc<dyn ContentTypeStore>,
}

impl ContentTypeDirectory {
    pub fn new(store: Arc<dyn ContentTypeStore>) -> Self {
        Self { store }
    }

    /// Fetch a persisted definition by id.
    pub async fn get_by_id(&self, id: i32) -> AppResult<ContentTypeDefinition> {
        self.store.get_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// Transient authoring template prefilled with defaults. Performs no
    /// store access.
    pub fn empty_template(&self) -> ContentTypeDefinition {
        ContentTypeDefinition::empty_template()
    }

    /// Enumerate every persisted definition, in store order. Display
    /// fields are returned raw; translation is the caller's concern.
    pub async fn list_all(&self) -> AppResult<Vec<ContentTypeDefinition>> {
        Ok(self.store.list_all().await?)
    }

    /// Distinct property aliases across all persisted definitions, in
    /// enumeration order.
    pub async fn all_property_aliases(&self) -> AppResult<Vec<String>> {
        let mut seen = HashSet::new();
        let mut aliases = Vec::new();

        for definition in self.store.list_all().await? {
            for property in &definition.properties {
                if seen.insert(property.alias.clone()) {
                    aliases.push(property.alias.clone());
                }
            }
        }

        Ok(aliases)
    }

    /// Create or update a definition from an authoring submission.
    ///
    /// A positive id hint updates the existing definition: it is fetched
    /// (`NotFound` when absent), all submitted fields are overlaid onto
    /// it, and the result is persisted. Anything else creates a new
    /// definition, deriving the alias from the name when the submission
    /// omits it and discarding any stray id hint. Either way the
    /// persisted, now-canonical definition is mapped back onto the
    /// submission shape so the caller sees server-assigned fields.
    ///
    /// Alias collisions on creation are currently accepted as-is.
    // TODO: warn on content type alias and property alias conflicts.
    pub async fn upsert(
        &self,
        submission: ContentTypeSubmission,
    ) -> AppResult<ContentTypeSubmission> {
        match submission.id {
            Some(id) if id > 0 => {
                let mut existing =
                    self.store.get_by_id(id).await?.ok_or(AppError::NotFound)?;
                existing.apply_submission(&submission);

                let saved = self.store.save(existing).await?;
                info!(type_id = id, alias = %saved.alias, "content type updated");
                Ok(saved.to_submission_view())
            }
            _ => {
                let definition = ContentTypeDefinition::from_submission(&submission);

                let saved = self.store.save(definition).await?;
                info!(
                    type_id = saved.id.persisted().unwrap_or_default(),
                    alias = %saved.alias,
                    "content type created"
                );
                Ok(saved.to_submission_view())
            }
        }
    }
}
