//! Request body configuration
//!
//! Three entry points mirror the three kinds of body content: a
//! structured value serialized to JSON, verbatim text, and verbatim
//! raw bytes. The `Content-Type` header is never set implicitly; use
//! [`content_type`](crate::RequestBuilder::content_type) alongside.

use bytes::Bytes;
use serde::Serialize;

use crate::builder::core::RequestBuilder;
use zing_client::Error;

impl RequestBuilder {
    /// Sets the body to the JSON serialization of a structured value.
    ///
    /// A serialization failure is recorded as the sticky error and the
    /// body is cleared.
    ///
    /// # Examples
    /// ```no_run
    /// use serde::Serialize;
    /// use zing::{ContentType, RequestBuilder};
    ///
    /// #[derive(Serialize)]
    /// struct User {
    ///     name: String,
    /// }
    ///
    /// let user = User { name: "Joe".to_string() };
    /// let response = RequestBuilder::new()
    ///     .post("https://api.example.com/users")
    ///     .content_type(ContentType::ApplicationJson)
    ///     .body(&user)
    ///     .send();
    /// ```
    #[must_use]
    pub fn body<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_vec(body) {
            Ok(bytes) => self.body = Bytes::from(bytes),
            Err(err) => {
                self.body = Bytes::new();
                self.keep_first_err(Error::from(err));
            }
        }
        self
    }

    /// Sets the body to the exact bytes of a string.
    #[must_use]
    pub fn text_body(mut self, text: impl Into<String>) -> Self {
        self.body = Bytes::from(text.into().into_bytes());
        self
    }

    /// Sets the body to raw bytes, used verbatim.
    #[must_use]
    pub fn raw_body(mut self, bytes: impl Into<Bytes>) -> Self {
        self.body = bytes.into();
        self
    }
}
