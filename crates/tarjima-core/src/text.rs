//! Post-resolution text helpers

use std::borrow::Cow;

/// Truncate `text` to at most `max` characters, ellipsis included.
///
/// Used for short captions and admin previews of resolved values. Text
/// that fits is returned borrowed; otherwise the result keeps `max - 1`
/// characters and ends with `…`, so it never exceeds the budget a storage
/// or display limit allows. Counts `char`s rather than bytes, so multibyte
/// text is never split inside a UTF-8 boundary. A zero budget yields the
/// empty string. Truncation is a separate step applied after resolution,
/// never part of the fallback chain.
///
/// # Example
/// ```
/// use tarjima_core::truncate_chars;
///
/// assert_eq!(truncate_chars("Gilam", 10), "Gilam");
/// assert_eq!(truncate_chars("Qashqadaryo gilamlari", 12), "Qashqadaryo…");
/// ```
pub fn truncate_chars(text: &str, max: usize) -> Cow<'_, str> {
	if max == 0 {
		return Cow::Borrowed("");
	}
	if text.char_indices().nth(max).is_none() {
		return Cow::Borrowed(text);
	}
	let boundary = text
		.char_indices()
		.nth(max - 1)
		.map(|(index, _)| index)
		.unwrap_or(0);
	let mut short = text[..boundary].trim_end().to_string();
	short.push('…');
	Cow::Owned(short)
}
