//! Content-type catalog and placement-rule engine.
//!
//! Authoring API for a hierarchical content-type catalog: list, fetch,
//! create and update type definitions, resolve which types may be placed
//! under a given content item, and scaffold properties from configured
//! data types. Persistence, the editor registry and the localization
//! dictionary are collaborators behind traits; transport is left to the
//! surrounding server.

pub mod content;
pub mod editors;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use content::ContentTypeFacade;
pub use error::{AppError, AppResult};
