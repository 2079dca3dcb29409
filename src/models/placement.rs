//! Placement contexts and the allowed-children view.

use serde::{Deserialize, Serialize};

/// Reserved node id for the catalog's virtual root.
pub const ROOT_NODE_ID: i32 = -1;

/// Reserved node id for the content recycle bin.
pub const RECYCLE_BIN_NODE_ID: i32 = -20;

/// Where a new content item would be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementContext {
    /// Directly under the catalog's virtual root.
    Root,

    /// The recycle bin; nothing may be created here.
    RecycleBin,

    /// Under an existing content item.
    Item(i32),
}

impl PlacementContext {
    /// Map a transport-level node id onto a placement context using the
    /// reserved ids (−1 root, −20 recycle bin).
    pub fn from_node_id(id: i32) -> Self {
        match id {
            ROOT_NODE_ID => Self::Root,
            RECYCLE_BIN_NODE_ID => Self::RecycleBin,
            other => Self::Item(other),
        }
    }
}

/// One content type legally creatable under a placement context, with
/// display fields already translated. Recomputed per request, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedChildSpecification {
    pub type_id: i32,
    pub name: String,
    pub description: Option<String>,
}
