//! Device-integration data models.
//!
//! This crate defines the records exchanged with device services together
//! with their wire contracts:
//!
//! - **Addressable**: how to reach an endpoint, with `baseURL`/`url`
//!   derived at encode time
//! - **ResourceOperation**: one resource-to-operation mapping rule from a
//!   device profile
//!
//! Both records encode sparsely: an empty string field is left out of the
//! output rather than written as `""`. Each record's `Display` impl yields
//! its JSON form and never fails.

#[macro_use]
mod macros;

pub mod addressable;
pub mod base;
pub mod config;
pub mod error;
pub mod logging;
pub mod resource_operation;
pub mod wire;

pub use addressable::Addressable;
pub use base::BaseObject;
pub use error::{Error, Result};
pub use resource_operation::ResourceOperation;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
