//! tarjima — localized field resolution for multilingual content backends
//!
//! Facade over the workspace crates:
//!
//! - [`tarjima_core`]: the language catalog, per-entity-type translation
//!   maps, the fallback-chain resolver, and post-resolution text helpers.
//! - [`tarjima_rest`] (feature `rest`, on by default): request-language
//!   extraction and whole-representation localization, plus the singleton
//!   write guard for one-row page records.
//!
//! # Example
//! ```
//! use tarjima::{LanguageCatalog, TranslationMap};
//!
//! struct Faq {
//! 	question: String,
//! 	question_ru: Option<String>,
//! }
//!
//! let map = TranslationMap::builder(LanguageCatalog::default())
//! 	.field("question", |f: &Faq| Some(f.question.as_str()))
//! 	.shadow("question", "ru", |f: &Faq| f.question_ru.as_deref())
//! 	.build()
//! 	.unwrap();
//!
//! let faq = Faq {
//! 	question: "Yetkazib berish qancha?".to_string(),
//! 	question_ru: None,
//! };
//!
//! // Missing translation falls back silently to the base field
//! assert_eq!(
//! 	map.resolve(&faq, "question", Some("ru")).unwrap(),
//! 	Some("Yetkazib berish qancha?")
//! );
//! ```

pub use tarjima_core::{
	Accessor, LanguageCatalog, RegistryError, ResolveError, Translatable, TranslationMap,
	TranslationMapBuilder, resolve_field, truncate_chars,
};

#[cfg(feature = "rest")]
pub use tarjima_rest as rest;
