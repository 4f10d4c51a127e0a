//! Fluent request builder modules
//!
//! The complete chained API for configuring and executing HTTP
//! requests: verbs, headers and queries, bodies, TLS material, and
//! blocking execution.

pub mod body;
pub mod core;
pub mod execute;
pub mod headers;
pub mod methods;
pub mod tls;

pub use self::core::{ContentType, RequestBuilder};
