//! Serialization-side consumers of localized field resolution
//!
//! The pieces that sit between an inbound request and an outbound
//! representation: picking the response language from the `lang` query
//! parameter, rewriting serialized JSON objects so every translatable
//! field carries exactly one resolved value, and the write-boundary guard
//! for one-row page records.

mod representation;
mod request;
mod singleton;

pub use representation::{LocalizeError, localize_fields, localize_map, localize_value};
pub use request::{language_from_query, language_from_request};
pub use singleton::{SingletonError, SingletonGuard};
