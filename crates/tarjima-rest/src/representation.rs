//! Localization of serialized representations
//!
//! A serializer first renders an entity to a JSON object, then hands the
//! object here to have its translatable fields rewritten for the request's
//! language. Every rewritten field is the output of exactly one resolver
//! call, so a response never mixes resolved and raw base-field values.

use serde_json::{Map, Value};
use tarjima_core::{ResolveError, Translatable};

/// Errors while localizing a representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalizeError {
	/// A serializer asked for a field the entity type never registered.
	#[error(transparent)]
	Resolve(#[from] ResolveError),

	/// The representation handed in was not a JSON object.
	#[error("representation is not a JSON object")]
	NotAnObject,
}

/// Rewrite every registered translatable field of `repr` with the
/// resolver's output for the requested language.
///
/// Fields the entity type never registered are left untouched; resolved
/// nulls are written as JSON null, so the consumer sees an empty value
/// rather than an attribute name or marker.
pub fn localize_map<T: Translatable>(
	entity: &T,
	repr: &mut Map<String, Value>,
	requested: Option<&str>,
) -> Result<(), LocalizeError> {
	let map = T::translation_map();
	for field in map.field_names() {
		let resolved = map.resolve(entity, field, requested)?;
		repr.insert(field.to_string(), to_json(resolved));
	}
	Ok(())
}

/// Rewrite an explicit list of translatable fields, the way a serializer
/// declares the fields it renders.
///
/// Unlike [`localize_map`], naming a field the entity type never
/// registered is a loud configuration error.
pub fn localize_fields<T: Translatable>(
	entity: &T,
	repr: &mut Map<String, Value>,
	fields: &[&str],
	requested: Option<&str>,
) -> Result<(), LocalizeError> {
	let map = T::translation_map();
	for field in fields {
		let resolved = map.resolve(entity, field, requested)?;
		repr.insert(field.to_string(), to_json(resolved));
	}
	Ok(())
}

/// [`localize_map`] over a `serde_json::Value` that must be an object.
pub fn localize_value<T: Translatable>(
	entity: &T,
	repr: &mut Value,
	requested: Option<&str>,
) -> Result<(), LocalizeError> {
	match repr {
		Value::Object(map) => localize_map(entity, map, requested),
		_ => Err(LocalizeError::NotAnObject),
	}
}

fn to_json(resolved: Option<&str>) -> Value {
	match resolved {
		Some(text) => Value::String(text.to_string()),
		None => Value::Null,
	}
}
