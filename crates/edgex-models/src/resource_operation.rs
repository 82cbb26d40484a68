//! ResourceOperation - maps a logical resource to a device operation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::Result;
use crate::wire::{non_empty, null_as_default, write_json};

/// One mapping rule from a device profile.
///
/// `mappings` is kept ordered so encoded output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceOperation {
    /// Ordering key within the profile
    #[serde(default, deserialize_with = "null_as_default")]
    pub index: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameter: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource: String,
    /// Alternate resource names
    #[serde(default, deserialize_with = "null_as_default")]
    pub secondary: Vec<String>,
    /// Value translation table
    #[serde(default, deserialize_with = "null_as_default")]
    pub mappings: BTreeMap<String, String>,
}

builder_methods!(ResourceOperation {
    with_index => index: String,
    with_object => object: String,
    with_parameter => parameter: String,
    with_resource => resource: String,
});

impl ResourceOperation {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Default::default()
        }
    }

    pub fn with_secondary<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secondary.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.mappings.insert(from.into(), to.into());
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as YAML with the same omission rules as JSON.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Decode one operation as written in a device profile.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[derive(Serialize)]
struct ResourceOperationWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    object: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mappings: Option<&'a BTreeMap<String, String>>,
}

impl<'a> From<&'a ResourceOperation> for ResourceOperationWire<'a> {
    fn from(ro: &'a ResourceOperation) -> Self {
        Self {
            index: non_empty(&ro.index),
            operation: non_empty(&ro.operation),
            object: non_empty(&ro.object),
            parameter: non_empty(&ro.parameter),
            resource: non_empty(&ro.resource),
            secondary: (!ro.secondary.is_empty()).then_some(ro.secondary.as_slice()),
            mappings: (!ro.mappings.is_empty()).then_some(&ro.mappings),
        }
    }
}

impl Serialize for ResourceOperation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ResourceOperationWire::from(self).serialize(serializer)
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}
