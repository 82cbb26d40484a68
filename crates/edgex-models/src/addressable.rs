//! Addressable - how to reach a network endpoint.
//!
//! An addressable carries the protocol, host, port and path of an endpoint
//! plus the metadata needed for message-bus protocols (publisher, topic,
//! credentials). Two URLs are derived from those fields:
//!
//! - [`Addressable::base_url`] / [`Addressable::callback_url`] for callers
//!   that want to invoke the endpoint (protocol lower-cased).
//! - `baseURL` / `url` in the JSON form, computed on every encode and never
//!   read back on decode (protocol case preserved).

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::base::BaseObject;
use crate::error::Result;
use crate::wire::{is_zero, non_empty, null_as_default, write_json};

/// Connection and addressing metadata for an endpoint.
///
/// Empty string fields mean "not set" and are left out of the encoded form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Addressable {
    #[serde(flatten)]
    pub base: BaseObject,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Protocol for the address (HTTP, TCP, MQTT, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub protocol: String,
    /// Verb used when invoking the address (POST, GET, ...)
    #[serde(rename = "method", default, deserialize_with = "null_as_default")]
    pub http_method: String,
    /// Host name or IP
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub port: i64,
    /// Path for callbacks
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    /// Publisher name for message-bus protocols
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    /// Topic for message-bus protocols
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,
}

builder_methods!(Addressable {
    with_base => base: BaseObject,
    with_id => id: String,
    with_protocol => protocol: String,
    with_http_method => http_method: String,
    with_address => address: String,
    with_port => port: i64,
    with_path => path: String,
    with_publisher => publisher: String,
    with_user => user: String,
    with_password => password: String,
    with_topic => topic: String,
});

impl Addressable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// `protocol://address:port` with the protocol lower-cased.
    ///
    /// Always produced, even when components are missing (`"://:0"`).
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}",
            self.protocol.to_lowercase(),
            self.address,
            self.port
        )
    }

    /// Base URL followed by the path, or an empty string unless protocol,
    /// address and path are set and the port is positive.
    pub fn callback_url(&self) -> String {
        if self.protocol.is_empty()
            || self.address.is_empty()
            || self.path.is_empty()
            || self.port <= 0
        {
            return String::new();
        }
        format!("{}{}", self.base_url(), self.path)
    }

    /// Encode to the sparse JSON form, surfacing any encoding error.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON. `baseURL` and `url` are ignored if present.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `protocol://address:port` with the protocol as stored, present only
    /// when both protocol and address are set.
    fn wire_base_url(&self) -> Option<String> {
        if self.protocol.is_empty() || self.address.is_empty() {
            return None;
        }
        Some(format!("{}://{}:{}", self.protocol, self.address, self.port))
    }

    /// Full URL on top of the wire base URL. A topic is injected ahead of
    /// the path only when no publisher is set.
    fn wire_url(&self, base_url: &str) -> String {
        if self.publisher.is_empty() && !self.topic.is_empty() {
            format!("{}{}/{}", base_url, self.topic, self.path)
        } else {
            format!("{}{}", base_url, self.path)
        }
    }
}

/// Borrowed wire form of an [`Addressable`].
#[derive(Serialize)]
struct AddressableWire<'a> {
    #[serde(flatten)]
    base: &'a BaseObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    protocol: Option<&'a str>,
    #[serde(rename = "method", skip_serializing_if = "Option::is_none")]
    http_method: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
    #[serde(skip_serializing_if = "is_zero")]
    port: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<&'a str>,
    #[serde(rename = "baseURL", skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl<'a> From<&'a Addressable> for AddressableWire<'a> {
    fn from(a: &'a Addressable) -> Self {
        let base_url = a.wire_base_url();
        let url = base_url.as_deref().map(|base| a.wire_url(base));
        if let Some(url) = &url {
            tracing::trace!(name = %a.name, url = %url, "Derived addressable URL");
        }

        Self {
            base: &a.base,
            id: non_empty(&a.id),
            name: non_empty(&a.name),
            protocol: non_empty(&a.protocol),
            http_method: non_empty(&a.http_method),
            address: non_empty(&a.address),
            port: a.port,
            path: non_empty(&a.path),
            publisher: non_empty(&a.publisher),
            user: non_empty(&a.user),
            password: non_empty(&a.password),
            topic: non_empty(&a.topic),
            base_url,
            url,
        }
    }
}

impl Serialize for Addressable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        AddressableWire::from(self).serialize(serializer)
    }
}

impl fmt::Display for Addressable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}
