//! Whole-representation localization tests
//!
//! Exercises the path a viewset takes per entity: serialize to JSON,
//! pick the language from the request, rewrite every translatable field.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Value, json};
use tarjima_core::{LanguageCatalog, ResolveError, Translatable, TranslationMap};
use tarjima_rest::{
	LocalizeError, language_from_request, localize_fields, localize_map, localize_value,
};

#[derive(Serialize)]
struct Collection {
	id: u64,
	name: String,
	#[serde(skip)]
	name_ru: Option<String>,
	#[serde(skip)]
	name_en: Option<String>,
	description: Option<String>,
	#[serde(skip)]
	description_ru: Option<String>,
	is_new: bool,
}

impl Translatable for Collection {
	fn translation_map() -> &'static TranslationMap<Self> {
		static MAP: Lazy<TranslationMap<Collection>> = Lazy::new(|| {
			TranslationMap::builder(LanguageCatalog::default())
				.field("name", |c: &Collection| Some(c.name.as_str()))
				.shadow("name", "ru", |c: &Collection| c.name_ru.as_deref())
				.shadow("name", "en", |c: &Collection| c.name_en.as_deref())
				.field("description", |c: &Collection| c.description.as_deref())
				.shadow("description", "ru", |c: &Collection| {
					c.description_ru.as_deref()
				})
				.build()
				.expect("collection translation map")
		});
		&MAP
	}
}

fn sample_collection() -> Collection {
	Collection {
		id: 3,
		name: "Gilam".to_string(),
		name_ru: Some("Ковер".to_string()),
		name_en: Some("".to_string()),
		description: None,
		description_ru: Some("Описание коллекции".to_string()),
		is_new: true,
	}
}

#[test]
fn test_localize_value_rewrites_every_translatable_field() {
	let collection = sample_collection();
	let mut repr = serde_json::to_value(&collection).unwrap();

	localize_value(&collection, &mut repr, Some("ru")).unwrap();

	assert_eq!(
		repr,
		json!({
			"id": 3,
			"name": "Ковер",
			"description": "Описание коллекции",
			"is_new": true,
		})
	);
}

#[test]
fn test_blank_shadow_falls_back_within_the_same_response() {
	let collection = sample_collection();
	let mut repr = serde_json::to_value(&collection).unwrap();

	// name_en is blank and description has no en shadow: both fall back
	localize_value(&collection, &mut repr, Some("en")).unwrap();

	assert_eq!(repr["name"], json!("Gilam"));
	assert_eq!(repr["description"], json!(null));
}

#[test]
fn test_untranslated_fields_are_left_untouched() {
	let collection = sample_collection();
	let mut repr = serde_json::to_value(&collection).unwrap();

	localize_value(&collection, &mut repr, Some("ru")).unwrap();

	assert_eq!(repr["id"], json!(3));
	assert_eq!(repr["is_new"], json!(true));
}

#[test]
fn test_never_populated_field_renders_as_null() {
	let collection = Collection {
		id: 9,
		name: "Gilam".to_string(),
		name_ru: None,
		name_en: None,
		description: None,
		description_ru: None,
		is_new: false,
	};
	let mut repr = serde_json::to_value(&collection).unwrap();

	localize_value(&collection, &mut repr, Some("en")).unwrap();

	// The worst case the consumer sees is null, never a marker
	assert_eq!(repr["description"], json!(null));
}

#[test]
fn test_localize_fields_covers_a_declared_field_list() {
	let collection = sample_collection();
	let mut repr = serde_json::Map::new();

	localize_fields(&collection, &mut repr, &["name"], Some("ru")).unwrap();

	assert_eq!(repr.get("name"), Some(&json!("Ковер")));
	assert!(!repr.contains_key("description"));
}

#[test]
fn test_localize_fields_fails_loudly_for_unregistered_field() {
	let collection = sample_collection();
	let mut repr = serde_json::Map::new();

	let result = localize_fields(&collection, &mut repr, &["slug"], Some("ru"));

	assert_eq!(
		result.err(),
		Some(LocalizeError::Resolve(ResolveError::UnknownField(
			"slug".to_string()
		)))
	);
}

#[test]
fn test_localize_value_rejects_non_objects() {
	let collection = sample_collection();
	let mut repr = Value::Array(vec![]);

	let result = localize_value(&collection, &mut repr, Some("ru"));

	assert_eq!(result.err(), Some(LocalizeError::NotAnObject));
}

#[test]
fn test_request_language_drives_localization_end_to_end() {
	let collection = sample_collection();
	let request = http::Request::builder()
		.uri("/api/collections/3/?lang=RU")
		.body(())
		.unwrap();
	let mut repr = serde_json::to_value(&collection).unwrap();

	let language = language_from_request(&request, LanguageCatalog::default_set());
	localize_value(&collection, &mut repr, Some(language)).unwrap();

	assert_eq!(repr["name"], json!("Ковер"));
}

#[test]
fn test_unsupported_request_language_renders_primary() {
	let collection = sample_collection();
	let mut repr = serde_json::to_value(&collection).unwrap();

	localize_value(&collection, &mut repr, Some("fr")).unwrap();

	assert_eq!(repr["name"], json!("Gilam"));
}

#[test]
fn test_localize_map_is_deterministic() {
	let collection = sample_collection();
	let mut first = serde_json::to_value(&collection).unwrap();
	let mut second = serde_json::to_value(&collection).unwrap();

	localize_value(&collection, &mut first, Some("en")).unwrap();
	localize_value(&collection, &mut second, Some("en")).unwrap();

	assert_eq!(first, second);
}

#[test]
fn test_localize_map_works_on_bare_maps() {
	let collection = sample_collection();
	let mut repr = serde_json::Map::new();

	localize_map(&collection, &mut repr, Some("ru")).unwrap();

	assert_eq!(repr.get("name"), Some(&json!("Ковер")));
	assert_eq!(repr.get("description"), Some(&json!("Описание коллекции")));
}
