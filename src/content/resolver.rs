//! Allowed children resolution.
//!
//! Computes which content types may legally be created under a placement
//! context. Read-only: the resolver never mutates the catalog or the
//! content tree.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{AllowedChildSpecification, ContentTypeDefinition, PlacementContext};
use crate::services::LabelTranslator;
use crate::store::{ContentStore, ContentTypeStore};

/// Resolver over the type catalog and the content tree.
#[derive(Clone)]
pub struct AllowedChildrenResolver {
    types: Arc<dyn ContentTypeStore>,
    content: Arc<dyn ContentStore>,
}

impl AllowedChildrenResolver {
    pub fn new(types: Arc<dyn ContentTypeStore>, content: Arc<dyn ContentStore>) -> Self {
        Self { types, content }
    }

    /// Resolve the content types creatable under `context`.
    ///
    /// Nothing may be created in the recycle bin. Under the root, types
    /// flagged `allowed_as_root` win; when no type carries the flag the
    /// rule degrades to "allow everything" so an empty configuration
    /// does not lock authors out (a documented business rule, not an
    /// accident). Under an ordinary item, exactly the ids its type
    /// configures are allowed, in configured order; an empty list means
    /// nothing is allowed. No additional sort is imposed.
    pub async fn resolve(
        &self,
        context: PlacementContext,
        translator: &LabelTranslator,
    ) -> AppResult<Vec<AllowedChildSpecification>> {
        let types = match context {
            PlacementContext::RecycleBin => return Ok(Vec::new()),
            PlacementContext::Root => {
                let all = self.types.list_all().await?;
                if all.iter().any(|t| t.allowed_as_root) {
                    all.into_iter().filter(|t| t.allowed_as_root).collect()
                } else {
                    all
                }
            }
            PlacementContext::Item(id) => {
                let item = self.content.get_by_id(id).await?.ok_or(AppError::NotFound)?;
                let item_type = self
                    .types
                    .get_by_id(item.content_type_id)
                    .await?
                    .ok_or(AppError::NotFound)?;

                let ids: Vec<i32> = item_type
                    .allowed_children
                    .iter()
                    .map(|child| child.type_id)
                    .collect();
                if ids.is_empty() {
                    return Ok(Vec::new());
                }

                self.types.list_by_ids(&ids).await?
            }
        };

        Ok(types
            .iter()
            .map(|t| to_specification(t, translator))
            .collect())
    }
}

/// Project a definition to its display triple, translating labels.
fn to_specification(
    definition: &ContentTypeDefinition,
    translator: &LabelTranslator,
) -> AllowedChildSpecification {
    AllowedChildSpecification {
        // Store-returned definitions are always persisted.
        type_id: definition.id.persisted().unwrap_or_default(),
        name: translator.translate(&definition.name),
        description: translator.translate_opt(definition.description.as_deref()),
    }
}
