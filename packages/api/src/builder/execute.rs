//! Request execution
//!
//! Blocking execution of the accumulated configuration: a sticky error
//! short-circuits before any I/O, otherwise the URL is resolved, the
//! transport client is realized (or reused) and the request is sent.

use zing_client::{Error, Response};

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Executes the request and blocks until a response or transport
    /// error.
    ///
    /// If a sticky configuration error is present it is returned
    /// immediately without any network I/O. Transport errors
    /// (connection refused, timeout, TLS failure) come back verbatim;
    /// they are not retried or classified further.
    ///
    /// Repeated sends on the same builder reuse the realized client
    /// and with it the underlying connection pool.
    pub fn send(&mut self) -> Result<Response, Error> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        let url = match self.full_url() {
            Ok(url) => url,
            Err(err) => {
                self.keep_first_err(err.clone());
                return Err(err);
            }
        };

        // The blocking client is an Arc over its pool; cloning it is
        // cheap and keeps the pooled connections alive on the builder.
        let client = match &self.client {
            Some(client) => client.clone(),
            None => {
                let client = self.transport.build_client(
                    self.timeout,
                    self.dial_timeout,
                    self.keep_alive_timeout,
                )?;
                self.client = Some(client.clone());
                client
            }
        };

        if self.debug_enabled {
            log::debug!("sending {} {url} ({} body bytes)", self.method, self.body.len());
        }

        let mut request = client
            .request(self.method.clone(), url)
            .body(self.body.to_vec());
        if let Some(content_type) = &self.content_type {
            request = request.header("Content-Type", content_type.as_str());
        }
        for (key, value) in &self.header {
            request = request.header(key.as_str(), value.as_str());
        }

        let request = request
            .build()
            .map_err(|err| Error::BuildRequest(err.to_string()))?;
        client.execute(request).map_err(Error::from)
    }

    /// Executes the request synchronously, then hands the result to
    /// `callback`. A blocking convenience over [`send`](Self::send);
    /// there is no queuing or background execution.
    ///
    /// # Examples
    /// ```no_run
    /// use zing::RequestBuilder;
    ///
    /// RequestBuilder::new()
    ///     .get("https://api.example.com/health")
    ///     .send_with(|result| match result {
    ///         Ok(response) => println!("status: {}", response.status()),
    ///         Err(err) => eprintln!("request failed: {err}"),
    ///     });
    /// ```
    pub fn send_with<F>(&mut self, callback: F)
    where
        F: FnOnce(Result<Response, Error>),
    {
        callback(self.send());
    }
}
