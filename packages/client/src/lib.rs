//! # Zing transport layer
//!
//! Connection-level configuration for the `zing` fluent HTTP builder.
//! This crate does not speak HTTP itself: connection pooling, TLS
//! handshakes, redirect handling and protocol framing are all delegated
//! to the blocking `reqwest` client. What lives here is the settings
//! surface that gets realized into that client — timeouts, proxy, trust
//! roots and client identities — plus the crate-wide error type.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod tls;
pub mod transport;

pub use error::Error;
pub use tls::{CertStore, TlsSettings};
pub use transport::{
    Transport, DEFAULT_DIAL_TIMEOUT, DEFAULT_EXPECT_CONTINUE_TIMEOUT, DEFAULT_IDLE_CONN_TIMEOUT,
    DEFAULT_KEEP_ALIVE_TIMEOUT, DEFAULT_TIMEOUT, DEFAULT_TLS_HANDSHAKE_TIMEOUT,
};

// Types surfaced from the delegated transport so downstream code never
// has to name `reqwest` directly.
pub use http::Method;
pub use reqwest::blocking::{Client as HttpClient, Response};
pub use reqwest::{Certificate, Identity, Proxy, StatusCode};
