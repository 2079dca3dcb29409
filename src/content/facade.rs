//! Content type facade.
//!
//! Composes the directory, resolver and scaffold builder into the
//! operation set a transport layer exposes. One [`LabelTranslator`] (and
//! so one dictionary) is created per facade; facades are request-scoped
//! and never shared across concurrent callers.

use std::sync::Arc;

use crate::content::{AllowedChildrenResolver, ContentTypeDirectory, PropertyScaffoldBuilder};
use crate::editors::PropertyEditorRegistry;
use crate::error::AppResult;
use crate::models::{
    AllowedChildSpecification, ContentTypeDefinition, ContentTypeOverview, ContentTypeSubmission,
    PlacementContext, PropertyScaffold,
};
use crate::services::{DictionaryFactory, LabelTranslator};
use crate::store::{ContentStore, ContentTypeStore, DataTypeStore};

/// Request-scoped entry point over the content type catalog.
pub struct ContentTypeFacade {
    directory: ContentTypeDirectory,
    resolver: AllowedChildrenResolver,
    scaffolds: PropertyScaffoldBuilder,
    translator: LabelTranslator,
}

impl ContentTypeFacade {
    /// Wire a facade from its collaborators.
    pub fn new(
        types: Arc<dyn ContentTypeStore>,
        content: Arc<dyn ContentStore>,
        data_types: Arc<dyn DataTypeStore>,
        editors: Arc<dyn PropertyEditorRegistry>,
        dictionaries: Arc<dyn DictionaryFactory>,
    ) -> Self {
        Self {
            directory: ContentTypeDirectory::new(types.clone()),
            resolver: AllowedChildrenResolver::new(types, content),
            scaffolds: PropertyScaffoldBuilder::new(data_types, editors),
            translator: LabelTranslator::new(dictionaries),
        }
    }

    /// Fetch a definition as a submission-shaped view for editing.
    ///
    /// Labels stay raw so symbolic `#` references survive the editing
    /// round trip.
    pub async fn get_by_id(&self, id: i32) -> AppResult<ContentTypeSubmission> {
        Ok(self.directory.get_by_id(id).await?.to_submission_view())
    }

    /// Empty authoring template. No store access, no side effects.
    pub fn get_empty(&self) -> ContentTypeSubmission {
        self.directory.empty_template().to_submission_view()
    }

    /// List every content type as an overview with translated labels.
    pub async fn list_all(&self) -> AppResult<Vec<ContentTypeOverview>> {
        let types = self.directory.list_all().await?;
        Ok(types.iter().map(|t| self.to_overview(t)).collect())
    }

    /// Content types creatable under the given placement context, with
    /// translated labels.
    pub async fn allowed_children(
        &self,
        context: PlacementContext,
    ) -> AppResult<Vec<AllowedChildSpecification>> {
        self.resolver.resolve(context, &self.translator).await
    }

    /// Create or update a content type from an authoring submission.
    pub async fn save(
        &self,
        submission: ContentTypeSubmission,
    ) -> AppResult<ContentTypeSubmission> {
        self.directory.upsert(submission).await
    }

    /// Default property descriptor for a data type.
    pub async fn property_scaffold(&self, data_type_id: i32) -> AppResult<PropertyScaffold> {
        self.scaffolds.scaffold(data_type_id).await
    }

    /// Distinct property aliases across the whole catalog.
    pub async fn all_property_aliases(&self) -> AppResult<Vec<String>> {
        self.directory.all_property_aliases().await
    }

    fn to_overview(&self, definition: &ContentTypeDefinition) -> ContentTypeOverview {
        ContentTypeOverview {
            // Store-returned definitions are always persisted.
            id: definition.id.persisted().unwrap_or_default(),
            alias: definition.alias.clone(),
            name: self.translator.translate(&definition.name),
            description: self
                .translator
                .translate_opt(definition.description.as_deref()),
        }
    }
}
