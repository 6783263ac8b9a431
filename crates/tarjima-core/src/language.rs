//! Supported-language catalog and request-code normalization

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_CATALOG: Lazy<LanguageCatalog> =
	Lazy::new(|| LanguageCatalog::new("uz", ["ru", "en"]));

/// The set of language codes a deployment serves.
///
/// One code is the primary (fallback) language — the language every entity
/// is guaranteed to carry a value for. Codes are stored lowercased and
/// matched ASCII-case-insensitively, so `?lang=RU` selects `ru`.
///
/// # Example
/// ```
/// use tarjima_core::LanguageCatalog;
///
/// let catalog = LanguageCatalog::new("uz", ["ru", "en"]);
/// assert_eq!(catalog.normalize(Some("RU")), "ru");
/// assert_eq!(catalog.normalize(Some("fr")), "uz");
/// assert_eq!(catalog.normalize(None), "uz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCatalog {
	primary: String,
	codes: Vec<String>,
}

impl LanguageCatalog {
	/// Create a catalog from a primary code plus alternate codes.
	///
	/// The primary code is always the first supported code; duplicate
	/// alternates are dropped.
	pub fn new<I, S>(primary: &str, alternates: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let primary = primary.to_ascii_lowercase();
		let mut codes = vec![primary.clone()];
		for code in alternates {
			let code = code.as_ref().to_ascii_lowercase();
			if !codes.contains(&code) {
				codes.push(code);
			}
		}
		Self { primary, codes }
	}

	/// The deployment default: Uzbek primary with Russian and English
	/// alternates.
	pub fn default_set() -> &'static LanguageCatalog {
		&DEFAULT_CATALOG
	}

	/// The primary (fallback) language code.
	pub fn primary(&self) -> &str {
		&self.primary
	}

	/// All supported codes, primary first.
	pub fn codes(&self) -> &[String] {
		&self.codes
	}

	/// Whether `code` names a supported language.
	pub fn is_supported(&self, code: &str) -> bool {
		self.codes.iter().any(|c| c.eq_ignore_ascii_case(code))
	}

	/// Coerce a requested code to a supported one.
	///
	/// Absent, empty, or unsupported codes resolve to the primary code;
	/// an unrecognized selector is never an error.
	pub fn normalize(&self, requested: Option<&str>) -> &str {
		let Some(code) = requested else {
			return &self.primary;
		};
		self.codes
			.iter()
			.find(|c| c.eq_ignore_ascii_case(code))
			.map(String::as_str)
			.unwrap_or(&self.primary)
	}
}

impl Default for LanguageCatalog {
	fn default() -> Self {
		DEFAULT_CATALOG.clone()
	}
}
