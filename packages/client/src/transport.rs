//! Transport settings and client realization.
//!
//! [`Transport`] is the connection-level half of a request builder:
//! pool and handshake timing, proxy, and TLS material. It carries the
//! settings as plain data and realizes them into a blocking client on
//! demand; the resulting client owns the connection pool.

use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};
use reqwest::Proxy;

use crate::tls::TlsSettings;
use crate::Error;

/// Default overall request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
/// Default connection establishment timeout.
pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(30);
/// Default TCP keep-alive interval.
pub const DEFAULT_KEEP_ALIVE_TIMEOUT: Duration = Duration::from_secs(30);
/// Default idle pooled connection timeout.
pub const DEFAULT_IDLE_CONN_TIMEOUT: Duration = Duration::from_secs(90);
/// Default TLS handshake timeout.
pub const DEFAULT_TLS_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);
/// Default `Expect: 100-continue` wait.
pub const DEFAULT_EXPECT_CONTINUE_TIMEOUT: Duration = Duration::from_secs(1);

/// Connection-level configuration realized into a blocking client.
#[derive(Debug, Clone)]
pub struct Transport {
    idle_conn_timeout: Duration,
    tls_handshake_timeout: Duration,
    expect_continue_timeout: Duration,
    proxy: Option<Proxy>,
    tls: Option<TlsSettings>,
}

impl Default for Transport {
    fn default() -> Self {
        // Server certificate verification is disabled by default. This
        // replicates the behavior of the system this crate wraps; call
        // `set_insecure_skip_verify(false)` to verify chains.
        let mut tls = TlsSettings::new();
        tls.set_insecure_skip_verify(true);
        Self {
            idle_conn_timeout: DEFAULT_IDLE_CONN_TIMEOUT,
            tls_handshake_timeout: DEFAULT_TLS_HANDSHAKE_TIMEOUT,
            expect_continue_timeout: DEFAULT_EXPECT_CONTINUE_TIMEOUT,
            proxy: None,
            tls: Some(tls),
        }
    }
}

impl Transport {
    /// Creates a transport with default timeouts and TLS settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how long an idle pooled connection is kept alive.
    pub fn set_idle_conn_timeout(&mut self, timeout: Duration) {
        self.idle_conn_timeout = timeout;
    }

    /// The idle pooled connection timeout.
    pub fn idle_conn_timeout(&self) -> Duration {
        self.idle_conn_timeout
    }

    /// Sets the TLS handshake timeout.
    ///
    /// Retained as a transport setting; the blocking client bounds the
    /// handshake through the overall and connect timeouts.
    pub fn set_tls_handshake_timeout(&mut self, timeout: Duration) {
        self.tls_handshake_timeout = timeout;
    }

    /// The TLS handshake timeout.
    pub fn tls_handshake_timeout(&self) -> Duration {
        self.tls_handshake_timeout
    }

    /// Sets how long to wait for a `100 Continue` response.
    ///
    /// Retained as a transport setting; the blocking client does not
    /// send `Expect: 100-continue` on its own.
    pub fn set_expect_continue_timeout(&mut self, timeout: Duration) {
        self.expect_continue_timeout = timeout;
    }

    /// The `Expect: 100-continue` wait.
    pub fn expect_continue_timeout(&self) -> Duration {
        self.expect_continue_timeout
    }

    /// Routes all traffic through the given proxy. Without this, the
    /// client honors the usual proxy environment variables.
    pub fn set_proxy(&mut self, proxy: Proxy) {
        self.proxy = Some(proxy);
    }

    /// Replaces the TLS settings wholesale.
    pub fn set_tls(&mut self, tls: TlsSettings) {
        self.tls = Some(tls);
    }

    /// The TLS settings, allocating a fresh (verifying) value on first
    /// access if none are present.
    pub fn tls_mut(&mut self) -> &mut TlsSettings {
        self.tls.get_or_insert_with(TlsSettings::new)
    }

    /// The TLS settings, if any are present.
    pub fn tls(&self) -> Option<&TlsSettings> {
        self.tls.as_ref()
    }

    /// Realizes these settings, plus the per-request timeouts, into a
    /// blocking client. The client owns the connection pool; callers
    /// that want pool reuse should hold on to it across requests.
    pub fn build_client(
        &self,
        timeout: Duration,
        dial_timeout: Duration,
        keep_alive_timeout: Duration,
    ) -> Result<Client, Error> {
        let mut builder = ClientBuilder::new()
            .use_rustls_tls()
            .timeout(timeout)
            .connect_timeout(dial_timeout)
            .tcp_keepalive(keep_alive_timeout)
            .pool_idle_timeout(self.idle_conn_timeout);

        if let Some(tls) = &self.tls {
            builder = builder.danger_accept_invalid_certs(tls.insecure_skip_verify());
            if let Some(store) = tls.root_store() {
                for cert in store.certs() {
                    builder = builder.add_root_certificate(cert.clone());
                }
            }
            for identity in tls.identities() {
                builder = builder.identity(identity.clone());
            }
        }

        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(proxy.clone());
        }

        log::debug!(
            "realizing transport: timeout={timeout:?} dial={dial_timeout:?} keep_alive={keep_alive_timeout:?} idle={:?}",
            self.idle_conn_timeout
        );
        builder.build().map_err(Error::from)
    }
}
