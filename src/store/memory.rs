//! In-memory store implementations.
//!
//! Back the collaborator traits with `DashMap`s for development setups
//! and integration tests. Enumeration order is ascending id, which for
//! store-assigned ids equals insertion order.

use std::sync::atomic::{AtomicI32, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use super::{ContentStore, ContentTypeStore, DataTypeStore};
use crate::models::{ContentItem, ContentTypeDefinition, DataTypeDefinition, TypeId};

/// DashMap-backed content type store.
pub struct MemoryContentTypeStore {
    types: DashMap<i32, ContentTypeDefinition>,
    next_id: AtomicI32,
}

impl Default for MemoryContentTypeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryContentTypeStore {
    pub fn new() -> Self {
        Self {
            types: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of persisted definitions.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the store holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[async_trait]
impl ContentTypeStore for MemoryContentTypeStore {
    async fn get_by_id(&self, id: i32) -> Result<Option<ContentTypeDefinition>> {
        Ok(self.types.get(&id).map(|t| t.clone()))
    }

    async fn list_all(&self) -> Result<Vec<ContentTypeDefinition>> {
        let mut all: Vec<ContentTypeDefinition> =
            self.types.iter().map(|t| t.value().clone()).collect();
        all.sort_by_key(|t| t.id.persisted().unwrap_or_default());
        Ok(all)
    }

    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<ContentTypeDefinition>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.types.get(id).map(|t| t.clone()))
            .collect())
    }

    async fn save(&self, mut definition: ContentTypeDefinition) -> Result<ContentTypeDefinition> {
        let id = match definition.id.persisted() {
            Some(id) => {
                // Keep assignment ahead of explicitly seeded ids.
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                definition.id = TypeId::Persisted(id);
                id
            }
        };

        self.types.insert(id, definition.clone());
        Ok(definition)
    }
}

/// DashMap-backed content item store.
#[derive(Default)]
pub struct MemoryContentStore {
    items: DashMap<i32, ContentItem>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an item, replacing any previous entry with the same id.
    pub fn insert(&self, item: ContentItem) {
        self.items.insert(item.id, item);
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn get_by_id(&self, id: i32) -> Result<Option<ContentItem>> {
        Ok(self.items.get(&id).map(|i| i.clone()))
    }
}

/// DashMap-backed data type store.
#[derive(Default)]
pub struct MemoryDataTypeStore {
    data_types: DashMap<i32, DataTypeDefinition>,
}

impl MemoryDataTypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a data type, replacing any previous entry with the same id.
    pub fn insert(&self, data_type: DataTypeDefinition) {
        self.data_types.insert(data_type.id, data_type);
    }
}

#[async_trait]
impl DataTypeStore for MemoryDataTypeStore {
    async fn get_by_id(&self, id: i32) -> Result<Option<DataTypeDefinition>> {
        Ok(self.data_types.get(&id).map(|d| d.clone()))
    }
}
