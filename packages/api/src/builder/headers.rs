//! Header, content-type and query-string configuration

use crate::builder::core::RequestBuilder;
use zing_client::Error;

impl RequestBuilder {
    /// Sets a header; last write for a key wins.
    ///
    /// An empty key or value records the sticky error
    /// `invalid header, key or value is empty` and leaves the headers
    /// unchanged.
    ///
    /// # Examples
    /// ```no_run
    /// use zing::RequestBuilder;
    ///
    /// let response = RequestBuilder::new()
    ///     .get("https://api.example.com/data")
    ///     .header("x-api-version", "v1")
    ///     .send();
    /// ```
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if key.is_empty() || value.is_empty() {
            self.keep_first_err(Error::InvalidHeader);
        } else {
            self.header.insert(key, value);
        }
        self
    }

    /// Sets the `Content-Type` header, independent of the body.
    ///
    /// Accepts any string; [`ContentType`](crate::ContentType) converts
    /// into one for the common formats.
    #[must_use]
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Adds a query parameter, overwriting an earlier value for the
    /// same key. Pairs already present in the base URL are untouched;
    /// at execution time the accumulated pairs are appended alongside
    /// them.
    #[must_use]
    pub fn append_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.queries.insert(key.into(), value.into());
        self
    }

    /// Adds every pair from an iterator of query parameters; later
    /// entries win on duplicate keys and an empty iterator is a no-op.
    ///
    /// # Examples
    /// ```no_run
    /// use zing::RequestBuilder;
    ///
    /// let response = RequestBuilder::new()
    ///     .get("https://api.example.com/search")
    ///     .append_queries([("q", "fluent"), ("page", "2")])
    ///     .send();
    /// ```
    #[must_use]
    pub fn append_queries<I, K, V>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in queries {
            self.queries.insert(key.into(), value.into());
        }
        self
    }
}
