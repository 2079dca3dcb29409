//! Label translation for display strings.
//!
//! Content type names and descriptions may be literal text or a
//! `#`-prefixed reference into a culture-specific dictionary. The
//! translator resolves references and passes literals through, falling
//! back to the bare key when the dictionary has no usable entry.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Culture-specific key → string dictionary.
pub trait LocalizationDictionary: Send + Sync {
    /// Look up a dictionary entry.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Creates one dictionary per active locale/session.
pub trait DictionaryFactory: Send + Sync {
    fn create_dictionary(&self) -> Arc<dyn LocalizationDictionary>;
}

/// Resolves display strings that may be literals or dictionary
/// references.
///
/// The dictionary is created lazily on first use and cached for the
/// lifetime of the translator, which is scoped to one request. The
/// factory is an injected dependency, never ambient state.
pub struct LabelTranslator {
    factory: Arc<dyn DictionaryFactory>,
    dictionary: OnceLock<Arc<dyn LocalizationDictionary>>,
}

impl LabelTranslator {
    pub fn new(factory: Arc<dyn DictionaryFactory>) -> Self {
        Self {
            factory,
            dictionary: OnceLock::new(),
        }
    }

    fn dictionary(&self) -> &Arc<dyn LocalizationDictionary> {
        self.dictionary
            .get_or_init(|| self.factory.create_dictionary())
    }

    /// Translate a display string.
    ///
    /// Text without the leading `#` marker is returned unchanged. Marked
    /// text is looked up by the remainder; a missing or blank entry
    /// falls back to the bare key.
    pub fn translate(&self, text: &str) -> String {
        let Some(key) = text.strip_prefix('#') else {
            return text.to_string();
        };

        match self.dictionary().lookup(key) {
            Some(value) if !value.trim().is_empty() => value,
            _ => key.to_string(),
        }
    }

    /// Translate an optional display string; `None` passes through.
    pub fn translate_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.translate(t))
    }
}

impl std::fmt::Debug for LabelTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelTranslator")
            .field("dictionary_cached", &self.dictionary.get().is_some())
            .finish()
    }
}

/// Fixed in-memory dictionary.
#[derive(Default)]
pub struct StaticDictionary {
    entries: HashMap<String, String>,
}

impl StaticDictionary {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl LocalizationDictionary for StaticDictionary {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Factory handing out one shared [`StaticDictionary`].
pub struct StaticDictionaryFactory {
    dictionary: Arc<StaticDictionary>,
}

impl StaticDictionaryFactory {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self {
            dictionary: Arc::new(StaticDictionary::new(entries)),
        }
    }

    /// Factory over an empty dictionary; every reference falls back to
    /// its bare key.
    pub fn empty() -> Self {
        Self::new(HashMap::new())
    }
}

impl DictionaryFactory for StaticDictionaryFactory {
    fn create_dictionary(&self) -> Arc<dyn LocalizationDictionary> {
        self.dictionary.clone()
    }
}
