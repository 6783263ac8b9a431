//! The fallback chain that turns (entity, field, language) into one value

use crate::registry::{Translatable, TranslationMap};

/// Resolution failures.
///
/// A missing translation is not a failure — it falls back silently. The
/// only error is asking for a field the entity type never registered,
/// which is a misconfigured serializer and must surface loudly rather
/// than render nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
	/// The logical field is not registered for this entity type.
	#[error("unknown translatable field '{0}'")]
	UnknownField(String),
}

impl<T> TranslationMap<T> {
	/// Resolve one logical field of one entity for one requested language.
	///
	/// The requested code is first normalized through the catalog (absent
	/// or unsupported codes become the primary language). Resolution then
	/// walks the fallback chain:
	///
	/// 1. the normalized language's shadow accessor, if registered and its
	///    value is non-blank after trimming;
	/// 2. the base accessor, if its value is non-blank after trimming;
	/// 3. the base accessor's raw value, blank or null included.
	///
	/// Values are returned untrimmed. The entity is never mutated and no
	/// state is kept between calls, so resolving the same triple twice
	/// always yields the same result.
	pub fn resolve<'a>(
		&self,
		entity: &'a T,
		field: &str,
		requested: Option<&str>,
	) -> Result<Option<&'a str>, ResolveError> {
		let accessors = self
			.accessors(field)
			.ok_or_else(|| ResolveError::UnknownField(field.to_string()))?;
		let language = self.catalog().normalize(requested);

		if let Some(shadow) = accessors.shadows.get(language) {
			if let Some(value) = shadow(entity) {
				if !value.trim().is_empty() {
					return Ok(Some(value));
				}
			}
		}

		match (accessors.base)(entity) {
			Some(value) if !value.trim().is_empty() => Ok(Some(value)),
			// Surface whatever the base field holds; never an error.
			other => Ok(other),
		}
	}
}

/// Resolve a field through the entity type's static [`TranslationMap`].
///
/// Shorthand for `T::translation_map().resolve(..)`; see
/// [`TranslationMap::resolve`] for the fallback chain.
pub fn resolve_field<'a, T: Translatable>(
	entity: &'a T,
	field: &str,
	requested: Option<&str>,
) -> Result<Option<&'a str>, ResolveError> {
	T::translation_map().resolve(entity, field, requested)
}
