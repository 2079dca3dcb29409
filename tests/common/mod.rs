#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test fixture for catalog integration tests.
//!
//! Wires the real services against the in-memory stores so tests
//! exercise actual behavior end to end.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use typecatalog::content::ContentTypeFacade;
use typecatalog::editors::{EditorRegistry, JsonMergeEditor};
use typecatalog::models::{
    AllowedChildType, ContentItem, ContentTypeSubmission, DataTypeDefinition,
};
use typecatalog::services::StaticDictionaryFactory;
use typecatalog::store::{MemoryContentStore, MemoryContentTypeStore, MemoryDataTypeStore};

/// In-memory catalog with every collaborator wired up.
pub struct TestCatalog {
    pub types: Arc<MemoryContentTypeStore>,
    pub content: Arc<MemoryContentStore>,
    pub data_types: Arc<MemoryDataTypeStore>,
    pub editors: Arc<EditorRegistry>,
    pub dictionary: HashMap<String, String>,
}

impl TestCatalog {
    pub fn new() -> Self {
        let editors = EditorRegistry::new();
        editors.register(Arc::new(JsonMergeEditor {
            alias: "textarea".to_string(),
            view: "views/textarea.html".to_string(),
            defaults: json!({"rows": 10, "resizable": true}),
        }));

        Self {
            types: Arc::new(MemoryContentTypeStore::new()),
            content: Arc::new(MemoryContentStore::new()),
            data_types: Arc::new(MemoryDataTypeStore::new()),
            editors: Arc::new(editors),
            dictionary: HashMap::new(),
        }
    }

    /// Add a localization dictionary entry. Takes effect for facades
    /// created afterwards.
    pub fn with_dictionary_entry(mut self, key: &str, value: &str) -> Self {
        self.dictionary.insert(key.to_string(), value.to_string());
        self
    }

    /// Build a request-scoped facade over the fixture's stores.
    pub fn facade(&self) -> ContentTypeFacade {
        ContentTypeFacade::new(
            self.types.clone(),
            self.content.clone(),
            self.data_types.clone(),
            self.editors.clone(),
            Arc::new(StaticDictionaryFactory::new(self.dictionary.clone())),
        )
    }

    /// Persist a content type through the real upsert path; returns its
    /// assigned id.
    pub async fn seed_type(&self, submission: ContentTypeSubmission) -> i32 {
        let saved = self.facade().save(submission).await.unwrap();
        saved.id.unwrap()
    }

    /// Seed a content item directly into the content store.
    pub fn seed_item(&self, id: i32, content_type_id: i32, parent_id: i32) {
        self.content.insert(ContentItem {
            id,
            content_type_id,
            parent_id,
        });
    }

    /// Seed a data type definition.
    pub fn seed_data_type(&self, id: i32, editor_alias: &str, stored: serde_json::Value) {
        self.data_types.insert(DataTypeDefinition {
            id,
            editor_alias: editor_alias.to_string(),
            stored_pre_values: stored,
        });
    }
}

/// Minimal submission for a new content type.
pub fn submission(name: &str) -> ContentTypeSubmission {
    ContentTypeSubmission {
        id: None,
        alias: String::new(),
        name: name.to_string(),
        description: None,
        allowed_as_root: false,
        allowed_children: Vec::new(),
        properties: Vec::new(),
    }
}

/// Submission flagged as allowed under the root.
pub fn root_submission(name: &str) -> ContentTypeSubmission {
    ContentTypeSubmission {
        allowed_as_root: true,
        ..submission(name)
    }
}

/// Submission whose items allow the given child type ids.
pub fn submission_with_children(name: &str, child_ids: &[i32]) -> ContentTypeSubmission {
    ContentTypeSubmission {
        allowed_children: child_ids
            .iter()
            .map(|&type_id| AllowedChildType {
                type_id,
                name: format!("type {type_id}"),
            })
            .collect(),
        ..submission(name)
    }
}
