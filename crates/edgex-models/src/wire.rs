//! Helpers shared by the wire models.
//!
//! Canonical records keep plain fields where an empty string (or zero)
//! means "unset". Each record has a borrowed wire model built from it with
//! these helpers, so unset values are omitted from the encoded output
//! instead of being written as `""`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Map an empty string to `None`.
#[inline]
pub fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// `skip_serializing_if` predicate for numeric fields.
#[inline]
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Read a field, treating an explicit `null` as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Write the JSON encoding of `value` into a formatter.
///
/// Never reports failure: if encoding fails, the error message is written
/// in place of the document.
pub fn write_json<T: Serialize + ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match serde_json::to_string(value) {
        Ok(json) => f.write_str(&json),
        Err(e) => {
            tracing::warn!("Failed to encode {} as JSON: {}", std::any::type_name::<T>(), e);
            write!(f, "{}", e)
        }
    }
}
