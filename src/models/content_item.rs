//! Content item record.

use serde::{Deserialize, Serialize};

/// An instantiated content node in the tree.
///
/// Owned and mutated entirely by the external content store; this crate
/// only reads it to resolve placement rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i32,

    /// The content type this item was created from.
    pub content_type_id: i32,

    /// Parent node id (a reserved id for top-level items).
    pub parent_id: i32,
}
