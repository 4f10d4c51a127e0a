//! HTTP verb starters
//!
//! Each verb re-targets the builder: method and URL are set, the
//! per-request state (headers, content type, body, sticky error) is
//! cleared, and the timeout/TLS/transport configuration carries over.

use zing_client::Method;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Starts a GET request against `url`.
    ///
    /// # Examples
    /// ```no_run
    /// use zing::RequestBuilder;
    ///
    /// let response = RequestBuilder::new()
    ///     .get("https://api.example.com/users")
    ///     .send();
    /// ```
    #[must_use]
    pub fn get(self, url: impl Into<String>) -> Self {
        self.renew(Method::GET, url.into())
    }

    /// Starts a POST request against `url`.
    #[must_use]
    pub fn post(self, url: impl Into<String>) -> Self {
        self.renew(Method::POST, url.into())
    }

    /// Starts a PUT request against `url`.
    #[must_use]
    pub fn put(self, url: impl Into<String>) -> Self {
        self.renew(Method::PUT, url.into())
    }

    /// Starts a HEAD request against `url`.
    #[must_use]
    pub fn head(self, url: impl Into<String>) -> Self {
        self.renew(Method::HEAD, url.into())
    }

    /// Starts a DELETE request against `url`.
    #[must_use]
    pub fn delete(self, url: impl Into<String>) -> Self {
        self.renew(Method::DELETE, url.into())
    }

    /// Starts a PATCH request against `url`.
    #[must_use]
    pub fn patch(self, url: impl Into<String>) -> Self {
        self.renew(Method::PATCH, url.into())
    }

    /// Starts an OPTIONS request against `url`.
    #[must_use]
    pub fn options(self, url: impl Into<String>) -> Self {
        self.renew(Method::OPTIONS, url.into())
    }
}
