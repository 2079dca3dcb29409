//! Collaborator storage abstractions.
//!
//! All persistence access goes through these traits so the engine stays
//! independent of the backing store. Absence is `Ok(None)`; the services
//! decide when a missing row becomes a `NotFound` error. The in-memory
//! implementations in [`memory`] back development and integration tests.

mod memory;

use anyhow::Result;
use async_trait::async_trait;

pub use memory::{MemoryContentStore, MemoryContentTypeStore, MemoryDataTypeStore};

use crate::models::{ContentItem, ContentTypeDefinition, DataTypeDefinition};

/// Persistence for content type definitions.
#[async_trait]
pub trait ContentTypeStore: Send + Sync {
    /// Fetch a definition by id.
    async fn get_by_id(&self, id: i32) -> Result<Option<ContentTypeDefinition>>;

    /// Enumerate every persisted definition, in store order.
    async fn list_all(&self) -> Result<Vec<ContentTypeDefinition>>;

    /// Fetch the definitions for the given ids, preserving input order.
    /// Ids with no matching definition are skipped.
    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<ContentTypeDefinition>>;

    /// Persist a definition, replacing the whole entity when one with
    /// the same id exists. Unsaved definitions are assigned a fresh id;
    /// the returned definition carries it.
    async fn save(&self, definition: ContentTypeDefinition) -> Result<ContentTypeDefinition>;
}

/// Read access to content items.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch a content item by id.
    async fn get_by_id(&self, id: i32) -> Result<Option<ContentItem>>;
}

/// Read access to configured data type definitions.
#[async_trait]
pub trait DataTypeStore: Send + Sync {
    /// Fetch a data type definition by id.
    async fn get_by_id(&self, id: i32) -> Result<Option<DataTypeDefinition>>;
}
