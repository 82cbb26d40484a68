//! Shared constants - protocol names, HTTP verbs, and logging defaults.
//!
//! Values here are conventions used when building addressables; the record
//! types themselves accept any string.

/// Protocol names as they appear in the `protocol` field.
pub mod protocols {
    pub const HTTP: &str = "HTTP";
    pub const HTTPS: &str = "HTTPS";
    pub const TCP: &str = "TCP";
    pub const MQTT: &str = "MQTT";
    pub const ZMQ: &str = "ZMQ";
}

/// Verbs for the `method` field.
pub mod methods {
    pub const GET: &str = "GET";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
    pub const PATCH: &str = "PATCH";
    pub const DELETE: &str = "DELETE";
}

/// Logging defaults
pub mod logging {
    /// Filter used when `RUST_LOG` is not set.
    pub const DEFAULT_FILTER: &str = "edgex_models=info";
}

/// Environment variable names
pub mod env_vars {
    /// Set to `true` to emit log lines as JSON.
    pub const LOG_JSON: &str = "EDGEX_MODELS_LOG_JSON";

    /// Whether JSON log output was requested, defaulting to `false`.
    pub fn json_logging() -> bool {
        std::env::var(LOG_JSON)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false)
    }
}
