//! # Zing
//!
//! Fluent blocking HTTP request builder. Configure method, URL, query
//! parameters, headers, body, timeouts and TLS trust material through
//! chained calls, then execute synchronously or hand the result to a
//! callback. Connection management, pooling and the TLS handshake are
//! delegated to the underlying transport; this crate is the
//! configuration surface.
//!
//! ```no_run
//! use zing::Http;
//!
//! Http::get("https://example.com/hello")
//!     .header("x-request-id", "42")
//!     .send_with(|result| match result {
//!         Ok(response) => println!("status: {}", response.status()),
//!         Err(err) => eprintln!("request failed: {err}"),
//!     });
//! ```
//!
//! Errors raised while configuring a chain are *sticky*: the first one
//! is kept, later calls keep chaining without panicking, and execution
//! returns the stored error without touching the network.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod builder;

pub use builder::{ContentType, RequestBuilder};

// Re-export transport-level types from the client package
pub use zing_client::{
    CertStore, Certificate, Error, Identity, Method, Proxy, Response, StatusCode, TlsSettings,
    Transport,
};

/// Entry point providing verb shorthands over [`RequestBuilder::new`].
pub struct Http;

impl Http {
    /// Starts a GET request with a fresh builder.
    #[must_use]
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new().get(url)
    }

    /// Starts a POST request with a fresh builder.
    #[must_use]
    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new().post(url)
    }

    /// Starts a PUT request with a fresh builder.
    #[must_use]
    pub fn put(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new().put(url)
    }

    /// Starts a HEAD request with a fresh builder.
    #[must_use]
    pub fn head(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new().head(url)
    }

    /// Starts a DELETE request with a fresh builder.
    #[must_use]
    pub fn delete(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new().delete(url)
    }

    /// Starts a PATCH request with a fresh builder.
    #[must_use]
    pub fn patch(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new().patch(url)
    }

    /// Starts an OPTIONS request with a fresh builder.
    #[must_use]
    pub fn options(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new().options(url)
    }
}
