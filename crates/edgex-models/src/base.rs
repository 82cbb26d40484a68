//! Audit fields shared by persisted records.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::wire::{is_zero, null_as_default};

/// Timestamps common to every stored record, in milliseconds since the
/// Unix epoch. Zero means "not set" and is omitted from the wire form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseObject {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub modified: i64,
    /// Timestamp assigned by the originating device or service
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub origin: i64,
}

impl BaseObject {
    /// Stamp `created` and `modified` with the current time.
    pub fn now() -> Self {
        let ts = chrono::Utc::now().timestamp_millis();
        Self {
            created: ts,
            modified: ts,
            origin: 0,
        }
    }

    pub fn with_origin(mut self, origin: i64) -> Self {
        self.origin = origin;
        self
    }

    /// Order two records by last modification, then by creation.
    pub fn compare_to(&self, other: &BaseObject) -> Ordering {
        self.modified
            .cmp(&other.modified)
            .then_with(|| self.created.cmp(&other.created))
    }
}
