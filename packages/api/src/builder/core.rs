//! Core `RequestBuilder` structure and base functionality
//!
//! Contains the builder state, its defaults, the sticky-error
//! accumulator and URL resolution. Verb, header, body, TLS and
//! execution methods live in the sibling modules.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use hashbrown::HashMap;
use url::Url;

use zing_client::{
    Error, HttpClient, Method, Proxy, Transport, DEFAULT_DIAL_TIMEOUT, DEFAULT_KEEP_ALIVE_TIMEOUT,
    DEFAULT_TIMEOUT,
};

/// Content type shorthand for the common request formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// application/json
    ApplicationJson,
    /// application/json;charset=UTF-8
    ApplicationJsonUtf8,
    /// application/x-www-form-urlencoded
    ApplicationFormUrlEncoded,
    /// application/octet-stream
    ApplicationOctetStream,
    /// application/xml
    ApplicationXml,
    /// text/plain
    TextPlain,
    /// text/html
    TextHtml,
}

impl ContentType {
    /// String representation sent on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::ApplicationJson => "application/json",
            ContentType::ApplicationJsonUtf8 => "application/json;charset=UTF-8",
            ContentType::ApplicationFormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::ApplicationOctetStream => "application/octet-stream",
            ContentType::ApplicationXml => "application/xml",
            ContentType::TextPlain => "text/plain",
            ContentType::TextHtml => "text/html",
        }
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        value.as_str().to_string()
    }
}

/// Fluent builder accumulating request configuration across chained
/// calls.
///
/// A builder is a single mutable entity: configuration methods take and
/// return it by value, errors raised along the way are recorded into a
/// sticky first-error slot instead of failing the chain, and execution
/// surfaces that error before touching the network. One builder drives
/// one logical request sequence; it is not meant to be shared across
/// threads.
///
/// Re-targeting the builder with a verb method (`get`, `post`, ...)
/// resets method, URL, headers, content type, body and error state but
/// keeps the timeout, TLS and transport configuration (and any
/// accumulated query parameters), so a builder can be reused against
/// several endpoints with one setup.
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) queries: HashMap<String, String>,
    pub(crate) method: Method,
    pub(crate) header: HashMap<String, String>,
    pub(crate) content_type: Option<String>,
    pub(crate) body: Bytes,
    pub(crate) timeout: Duration,
    pub(crate) dial_timeout: Duration,
    pub(crate) keep_alive_timeout: Duration,
    pub(crate) transport: Transport,
    pub(crate) err: Option<Error>,
    pub(crate) debug_enabled: bool,
    // Realized transport client, kept so repeated sends on one builder
    // reuse the connection pool. Cleared whenever a timeout or
    // transport setting changes.
    pub(crate) client: Option<HttpClient>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    /// Creates a builder with default timeouts and transport settings.
    ///
    /// Note that the default transport does **not** verify server
    /// certificates, mirroring the system this crate replaces; call
    /// [`insecure_skip_verify(false)`](Self::insecure_skip_verify) to
    /// turn verification on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            url: String::new(),
            queries: HashMap::new(),
            method: Method::GET,
            header: HashMap::new(),
            content_type: None,
            body: Bytes::new(),
            timeout: DEFAULT_TIMEOUT,
            dial_timeout: DEFAULT_DIAL_TIMEOUT,
            keep_alive_timeout: DEFAULT_KEEP_ALIVE_TIMEOUT,
            transport: Transport::new(),
            err: None,
            debug_enabled: false,
            client: None,
        }
    }

    /// Re-targets the builder at a new method and URL, resetting the
    /// per-request state while keeping timeouts, transport
    /// configuration and accumulated query parameters.
    pub(crate) fn renew(mut self, method: Method, url: String) -> Self {
        self.url = url;
        self.method = method;
        self.header = HashMap::new();
        self.content_type = None;
        self.body = Bytes::new();
        self.err = None;
        self
    }

    /// Records a configuration error; the first one wins.
    pub(crate) fn keep_first_err(&mut self, err: Error) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }

    /// Drops the realized client so the next send rebuilds it from the
    /// current settings.
    pub(crate) fn invalidate_client(&mut self) {
        self.client = None;
    }

    /// Resolves the base URL and merges the accumulated query pairs
    /// into it. The merge is additive: pairs already present in the
    /// base URL are kept even when a same-named key is appended.
    pub(crate) fn full_url(&self) -> Result<Url, Error> {
        let mut url = Url::parse(&self.url)?;
        if !self.queries.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.queries {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// The sticky configuration error, if one has been recorded.
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Read access to the transport settings.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Enables `log::debug!` tracing of execution for this builder.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Human-readable dump of the resolved URL, method, headers,
    /// content type and body. Diagnostics only; a malformed base URL
    /// renders as its error text and is recorded as the sticky error.
    pub fn debug_string(&mut self) -> String {
        let url = match self.full_url() {
            Ok(url) => url.to_string(),
            Err(err) => {
                let rendered = err.to_string();
                self.keep_first_err(err);
                rendered
            }
        };
        format!(
            "[url]: {url}\n[method]: {}\n[header]: {:?}\n[content type]:{}\n[body]:{}\n",
            self.method,
            self.header,
            self.content_type.as_deref().unwrap_or(""),
            String::from_utf8_lossy(&self.body),
        )
    }

    /// Sets the overall request timeout (default 60s).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.invalidate_client();
        self
    }

    /// Sets the connection establishment timeout (default 30s).
    #[must_use]
    pub fn dial_timeout(mut self, timeout: Duration) -> Self {
        self.dial_timeout = timeout;
        self.invalidate_client();
        self
    }

    /// Sets the TCP keep-alive interval (default 30s).
    #[must_use]
    pub fn keep_alive_timeout(mut self, timeout: Duration) -> Self {
        self.keep_alive_timeout = timeout;
        self.invalidate_client();
        self
    }

    /// Sets how long idle pooled connections are kept (default 90s).
    #[must_use]
    pub fn idle_conn_timeout(mut self, timeout: Duration) -> Self {
        self.transport.set_idle_conn_timeout(timeout);
        self.invalidate_client();
        self
    }

    /// Sets the TLS handshake timeout (default 10s).
    #[must_use]
    pub fn tls_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.transport.set_tls_handshake_timeout(timeout);
        self.invalidate_client();
        self
    }

    /// Sets the `Expect: 100-continue` wait (default 1s).
    #[must_use]
    pub fn expect_continue_timeout(mut self, timeout: Duration) -> Self {
        self.transport.set_expect_continue_timeout(timeout);
        self.invalidate_client();
        self
    }

    /// Routes requests through the given proxy instead of honoring the
    /// proxy environment variables.
    #[must_use]
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.transport.set_proxy(proxy);
        self.invalidate_client();
        self
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("queries", &self.queries)
            .field("header", &self.header)
            .field("content_type", &self.content_type)
            .field("body_len", &self.body.len())
            .field("timeout", &self.timeout)
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}
