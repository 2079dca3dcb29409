//! Cross-cutting catalog services.

pub mod translate;

pub use translate::{
    DictionaryFactory, LabelTranslator, LocalizationDictionary, StaticDictionary,
    StaticDictionaryFactory,
};
