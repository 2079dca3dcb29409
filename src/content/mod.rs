//! Content type catalog services.
//!
//! This module provides:
//! - ContentTypeDirectory: CRUD surface over content type definitions
//! - AllowedChildrenResolver: placement-rule evaluation
//! - PropertyScaffoldBuilder: default property descriptors from data types
//! - ContentTypeFacade: the composed operation set a transport exposes

mod directory;
mod facade;
mod resolver;
mod scaffold;

pub use directory::ContentTypeDirectory;
pub use facade::ContentTypeFacade;
pub use resolver::AllowedChildrenResolver;
pub use scaffold::PropertyScaffoldBuilder;
