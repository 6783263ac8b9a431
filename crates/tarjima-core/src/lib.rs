//! Localized field resolution for multilingual content entities
//!
//! Content records carry a base field per logical field (the primary-language
//! value) and optional per-language shadow fields (`name` next to `name_ru`,
//! `name_en`). This crate resolves one logical field of one entity for one
//! requested language through a deterministic fallback chain:
//!
//! 1. the requested language's shadow field, when registered and non-blank;
//! 2. the base field, when non-blank;
//! 3. whatever the base field holds, blank or null included.
//!
//! Shadow fields are declared up front in a [`TranslationMap`] per entity
//! type, so resolution is a pair of map lookups with no runtime reflection.
//!
//! # Example
//! ```
//! use tarjima_core::{LanguageCatalog, TranslationMap};
//!
//! struct Collection {
//! 	name: String,
//! 	name_ru: Option<String>,
//! }
//!
//! let map = TranslationMap::builder(LanguageCatalog::default())
//! 	.field("name", |c: &Collection| Some(c.name.as_str()))
//! 	.shadow("name", "ru", |c: &Collection| c.name_ru.as_deref())
//! 	.build()
//! 	.unwrap();
//!
//! let entity = Collection {
//! 	name: "Gilam".to_string(),
//! 	name_ru: Some("Ковер".to_string()),
//! };
//!
//! assert_eq!(map.resolve(&entity, "name", Some("ru")).unwrap(), Some("Ковер"));
//! assert_eq!(map.resolve(&entity, "name", Some("en")).unwrap(), Some("Gilam"));
//! assert_eq!(map.resolve(&entity, "name", None).unwrap(), Some("Gilam"));
//! ```

mod language;
mod registry;
mod resolver;
mod text;

pub use language::LanguageCatalog;
pub use registry::{Accessor, RegistryError, Translatable, TranslationMap, TranslationMapBuilder};
pub use resolver::{ResolveError, resolve_field};
pub use text::truncate_chars;
