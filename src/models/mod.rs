//! Catalog data models.

pub mod content_item;
pub mod content_type;
pub mod data_type;
pub mod placement;
pub mod property;

pub use content_item::ContentItem;
pub use content_type::{
    AllowedChildType, ContentTypeDefinition, ContentTypeOverview, ContentTypeSubmission,
    PropertyTypeDescriptor, TypeId, safe_alias,
};
pub use data_type::DataTypeDefinition;
pub use placement::{
    AllowedChildSpecification, PlacementContext, RECYCLE_BIN_NODE_ID, ROOT_NODE_ID,
};
pub use property::{PropertyScaffold, PropertyTypeValidation};
