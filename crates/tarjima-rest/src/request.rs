//! Request-level language selection
//!
//! The language selector is a `lang` query parameter holding a short code
//! (`/api/carpets/?lang=ru`). An absent, empty, or unrecognized selector
//! means "use the primary language" — never an error, and never more than
//! a debug log, since falling back is the steady-state case.

use tarjima_core::LanguageCatalog;

const LANG_PARAM: &str = "lang";

/// Pick the response language from a raw query string.
///
/// The first `lang` pair wins. An undecodable query string behaves as
/// "no selector".
///
/// # Example
/// ```
/// use tarjima_core::LanguageCatalog;
/// use tarjima_rest::language_from_query;
///
/// let catalog = LanguageCatalog::default_set();
/// assert_eq!(language_from_query(Some("page=2&lang=ru"), catalog), "ru");
/// assert_eq!(language_from_query(Some("lang=fr"), catalog), "uz");
/// assert_eq!(language_from_query(None, catalog), "uz");
/// ```
pub fn language_from_query<'a>(query: Option<&str>, catalog: &'a LanguageCatalog) -> &'a str {
	let Some(query) = query else {
		return catalog.primary();
	};
	let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
		Ok(pairs) => pairs,
		Err(error) => {
			tracing::debug!(%error, "undecodable query string, using primary language");
			return catalog.primary();
		}
	};
	let requested = pairs
		.iter()
		.find(|(key, _)| key == LANG_PARAM)
		.map(|(_, value)| value.as_str());
	if let Some(code) = requested {
		if !catalog.is_supported(code) {
			tracing::debug!(code, "unsupported language code, using primary language");
		}
	}
	catalog.normalize(requested)
}

/// Pick the response language from an HTTP request's URI.
pub fn language_from_request<'a, B>(
	request: &http::Request<B>,
	catalog: &'a LanguageCatalog,
) -> &'a str {
	language_from_query(request.uri().query(), catalog)
}
