//! JSON rendering of fixtures.
//!
//! Page lists are emitted in ascending order. The root record of every
//! instance carries `capacity`.

use serde::Serialize;

/// Render `value` as compact JSON.
///
/// Usually called with a `&[Fixture]` batch or a single instance.
///
/// [`Fixture`]: crate::batch::Fixture
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Render `value` as indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Render `value` as a [`serde_json::Value`] for structural inspection.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(value)
}
