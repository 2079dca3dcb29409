//! Content type definitions and the shapes they are authored through.
//!
//! A [`ContentTypeDefinition`] is the persisted schema for a class of
//! content items: its property set and its placement rules. Authoring
//! clients work with [`ContentTypeSubmission`], a definition plus an
//! optional numeric id hint; the two shapes are mapped explicitly in
//! both directions rather than through a generic object mapper.

use serde::{Deserialize, Serialize};

/// Persistence state of a content type definition.
///
/// Replaces the "negative id means unsaved" convention with an explicit
/// tag. The store assigns `Persisted` on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeId {
    Unsaved,
    Persisted(i32),
}

impl TypeId {
    /// Numeric id when persisted, `None` for transient definitions.
    pub fn persisted(&self) -> Option<i32> {
        match self {
            Self::Persisted(id) => Some(*id),
            Self::Unsaved => None,
        }
    }

    /// Whether this definition has been saved to the store.
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted(_))
    }
}

/// Reference to a content type allowed as a child of another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedChildType {
    pub type_id: i32,
    /// Display name captured when the reference was configured.
    pub name: String,
}

/// A property on a content type, bound to a configured data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeDescriptor {
    /// Unique token identifying the property within its type.
    pub alias: String,

    /// Data type definition this property is configured from.
    pub data_type_id: i32,

    /// Value editor handling this property's values.
    pub editor_alias: String,
}

/// Content type definition record.
///
/// The directory is the sole writer; definitions mutate only through
/// upsert, which replaces the full mapped field set each time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeDefinition {
    pub id: TypeId,

    /// Unique URL-safe token. Non-empty once persisted; derived from the
    /// name at creation when the submission omits it.
    pub alias: String,

    /// Display name. May be a `#`-prefixed dictionary reference.
    pub name: String,

    /// Display description. May be a `#`-prefixed dictionary reference.
    pub description: Option<String>,

    /// Whether items of this type may be created under the virtual root.
    pub allowed_as_root: bool,

    /// Types creatable under items of this type, in configured order.
    pub allowed_children: Vec<AllowedChildType>,

    /// Property set describing the shape of items of this type.
    pub properties: Vec<PropertyTypeDescriptor>,
}

/// Client-facing authoring shape for a content type.
///
/// Carries the same attribute fields as the definition plus an optional
/// id hint: a positive hint targets an existing definition for update,
/// anything else means "create new".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeSubmission {
    pub id: Option<i32>,
    pub alias: String,
    pub name: String,
    pub description: Option<String>,
    pub allowed_as_root: bool,
    pub allowed_children: Vec<AllowedChildType>,
    pub properties: Vec<PropertyTypeDescriptor>,
}

/// List-view projection of a content type: identity plus translated
/// display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeOverview {
    pub id: i32,
    pub alias: String,
    pub name: String,
    pub description: Option<String>,
}

impl ContentTypeDefinition {
    /// Transient template prefilled with defaults, suitable as a
    /// client-side authoring seed. Performs no store access.
    pub fn empty_template() -> Self {
        Self {
            id: TypeId::Unsaved,
            alias: String::new(),
            name: String::new(),
            description: None,
            allowed_as_root: false,
            allowed_children: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Build a new, unsaved definition from an authoring submission.
    ///
    /// An empty alias is derived from the name via [`safe_alias`]; any
    /// id hint on the submission is discarded.
    pub fn from_submission(submission: &ContentTypeSubmission) -> Self {
        let alias = if submission.alias.is_empty() {
            safe_alias(&submission.name)
        } else {
            submission.alias.clone()
        };

        Self {
            id: TypeId::Unsaved,
            alias,
            name: submission.name.clone(),
            description: submission.description.clone(),
            allowed_as_root: submission.allowed_as_root,
            allowed_children: submission.allowed_children.clone(),
            properties: submission.properties.clone(),
        }
    }

    /// Overlay all submitted fields onto this definition. Submitted
    /// values win; only the persisted id survives.
    pub fn apply_submission(&mut self, submission: &ContentTypeSubmission) {
        self.alias = submission.alias.clone();
        self.name = submission.name.clone();
        self.description = submission.description.clone();
        self.allowed_as_root = submission.allowed_as_root;
        self.allowed_children = submission.allowed_children.clone();
        self.properties = submission.properties.clone();
    }

    /// Map a definition back onto the submission shape, so callers see
    /// server-assigned and normalized fields (id, final alias).
    pub fn to_submission_view(&self) -> ContentTypeSubmission {
        ContentTypeSubmission {
            id: self.id.persisted(),
            alias: self.alias.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            allowed_as_root: self.allowed_as_root,
            allowed_children: self.allowed_children.clone(),
            properties: self.properties.clone(),
        }
    }
}

/// Normalize a display name into a URL-safe alias token.
///
/// Lower-cases and strips every non-alphanumeric character, so
/// "My Content Type" becomes "mycontenttype".
pub fn safe_alias(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
