//! Per-entity-type registration of translatable fields
//!
//! Instead of probing entities for shadow attributes at render time, each
//! entity type declares its translatable fields once in a [`TranslationMap`]:
//! a logical field name mapped to a base accessor plus optional per-language
//! shadow accessors. Shadows are optional per field and per language; a
//! record type that predates multilingual support simply registers no
//! shadows and behaves as primary-only.

use std::collections::HashMap;

use crate::LanguageCatalog;

/// Borrowing accessor for one field of an entity.
///
/// `None` models a null column, `Some("")` a present-but-blank one.
pub type Accessor<T> = fn(&T) -> Option<&str>;

pub(crate) struct FieldAccessors<T> {
	pub(crate) base: Accessor<T>,
	pub(crate) shadows: HashMap<String, Accessor<T>>,
}

/// Errors raised while building a [`TranslationMap`].
///
/// These are configuration mistakes and surface at startup, when the map
/// is first built, never during request handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The same logical field was registered twice.
	#[error("translatable field '{0}' is already registered")]
	DuplicateField(String),

	/// A shadow was registered for a field that has no base registration.
	#[error("shadow registered for unknown field '{0}'")]
	UnknownField(String),

	/// A shadow was registered under a code the catalog does not serve.
	#[error("language '{language}' is not in the catalog (field '{field}')")]
	UnsupportedLanguage { field: String, language: String },
}

/// The translatable-field table for one entity type.
///
/// Built once at startup (see [`Translatable`]) and consulted on every
/// resolution; holds no per-request state.
pub struct TranslationMap<T> {
	catalog: LanguageCatalog,
	fields: HashMap<String, FieldAccessors<T>>,
}

impl<T> TranslationMap<T> {
	/// Start building a map over the given catalog.
	pub fn builder(catalog: LanguageCatalog) -> TranslationMapBuilder<T> {
		TranslationMapBuilder {
			catalog,
			fields: HashMap::new(),
			error: None,
		}
	}

	/// The catalog this map normalizes requested languages against.
	pub fn catalog(&self) -> &LanguageCatalog {
		&self.catalog
	}

	/// Names of every registered logical field, in no particular order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Whether `name` is a registered logical field.
	pub fn has_field(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	pub(crate) fn accessors(&self, name: &str) -> Option<&FieldAccessors<T>> {
		self.fields.get(name)
	}
}

/// Builder for [`TranslationMap`].
///
/// Registration mistakes are remembered and reported from [`build`]
/// (first error wins), keeping the registration itself chainable.
///
/// [`build`]: TranslationMapBuilder::build
pub struct TranslationMapBuilder<T> {
	catalog: LanguageCatalog,
	fields: HashMap<String, FieldAccessors<T>>,
	error: Option<RegistryError>,
}

impl<T> TranslationMapBuilder<T> {
	/// Register a logical field with its base (primary-language) accessor.
	pub fn field(mut self, name: &str, base: Accessor<T>) -> Self {
		if self.error.is_some() {
			return self;
		}
		if self.fields.contains_key(name) {
			self.error = Some(RegistryError::DuplicateField(name.to_string()));
			return self;
		}
		self.fields.insert(
			name.to_string(),
			FieldAccessors {
				base,
				shadows: HashMap::new(),
			},
		);
		self
	}

	/// Register a per-language shadow accessor for an already-registered
	/// field.
	///
	/// A shadow for the primary language is allowed; when present it is
	/// consulted before the base field even for primary-language requests.
	pub fn shadow(mut self, field: &str, language: &str, accessor: Accessor<T>) -> Self {
		if self.error.is_some() {
			return self;
		}
		if !self.catalog.is_supported(language) {
			self.error = Some(RegistryError::UnsupportedLanguage {
				field: field.to_string(),
				language: language.to_string(),
			});
			return self;
		}
		let Some(accessors) = self.fields.get_mut(field) else {
			self.error = Some(RegistryError::UnknownField(field.to_string()));
			return self;
		};
		accessors
			.shadows
			.insert(language.to_ascii_lowercase(), accessor);
		self
	}

	/// Finish the registration.
	pub fn build(self) -> Result<TranslationMap<T>, RegistryError> {
		if let Some(error) = self.error {
			return Err(error);
		}
		Ok(TranslationMap {
			catalog: self.catalog,
			fields: self.fields,
		})
	}
}

/// Entity types with a static translatable-field table.
///
/// The analogue of registering translation options per model: one map per
/// entity type, built once behind a lazy static.
///
/// # Example
/// ```
/// use once_cell::sync::Lazy;
/// use tarjima_core::{LanguageCatalog, Translatable, TranslationMap, resolve_field};
///
/// struct Style {
/// 	name: String,
/// 	name_ru: Option<String>,
/// }
///
/// impl Translatable for Style {
/// 	fn translation_map() -> &'static TranslationMap<Self> {
/// 		static MAP: Lazy<TranslationMap<Style>> = Lazy::new(|| {
/// 			TranslationMap::builder(LanguageCatalog::default())
/// 				.field("name", |s: &Style| Some(s.name.as_str()))
/// 				.shadow("name", "ru", |s: &Style| s.name_ru.as_deref())
/// 				.build()
/// 				.expect("style translation map")
/// 		});
/// 		&MAP
/// 	}
/// }
///
/// let style = Style { name: "Klassik".to_string(), name_ru: None };
/// assert_eq!(resolve_field(&style, "name", Some("ru")).unwrap(), Some("Klassik"));
/// ```
pub trait Translatable: Sized + 'static {
	/// The translatable-field table for this entity type.
	fn translation_map() -> &'static TranslationMap<Self>;
}
