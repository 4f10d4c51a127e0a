//! TLS trust and identity configuration
//!
//! These methods manage the transport's trust store and client
//! identities. The settings objects are allocated lazily on first use;
//! file-read and parse failures land in the sticky error slot and
//! leave the trust state untouched.

use std::fs;
use std::path::Path;

use zing_client::tls::identity_from_pem;
use zing_client::{CertStore, Certificate, Error, Identity, TlsSettings};

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Replaces the entire TLS configuration wholesale.
    #[must_use]
    pub fn tls_config(mut self, config: TlsSettings) -> Self {
        self.transport.set_tls(config);
        self.invalidate_client();
        self
    }

    /// Toggles server certificate verification.
    ///
    /// The builder starts with verification **disabled**; pass `false`
    /// here to verify server chains.
    #[must_use]
    pub fn insecure_skip_verify(mut self, skip: bool) -> Self {
        self.transport.tls_mut().set_insecure_skip_verify(skip);
        self.invalidate_client();
        self
    }

    /// Adds the trusted root certificates found in a PEM file.
    ///
    /// A read failure is recorded as the sticky error without touching
    /// the trust store.
    #[must_use]
    pub fn add_ca_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(content) => self.add_ca_content(&content),
            Err(err) => {
                self.keep_first_err(Error::read_file(&path.to_string_lossy(), &err));
                self
            }
        }
    }

    /// Adds the trusted root certificates found in a PEM buffer.
    ///
    /// Unparseable fragments are skipped silently; the store stays
    /// usable for later additions.
    #[must_use]
    pub fn add_ca_content(mut self, content: &[u8]) -> Self {
        self.transport.tls_mut().root_store_mut().add_pem(content);
        self.invalidate_client();
        self
    }

    /// Adds a single already-parsed root certificate.
    #[must_use]
    pub fn add_ca_cert(mut self, cert: Certificate) -> Self {
        self.transport.tls_mut().root_store_mut().add_cert(cert);
        self.invalidate_client();
        self
    }

    /// Replaces the trust store wholesale.
    #[must_use]
    pub fn cert_pool(mut self, pool: CertStore) -> Self {
        self.transport.tls_mut().set_root_store(pool);
        self.invalidate_client();
        self
    }

    /// Attaches a client certificate/key pair read from PEM files, for
    /// mutual TLS. Read failures are sticky and nothing is attached.
    #[must_use]
    pub fn add_cert_file(mut self, cert: impl AsRef<Path>, key: impl AsRef<Path>) -> Self {
        let cert_path = cert.as_ref();
        let cert_content = match fs::read(cert_path) {
            Ok(content) => content,
            Err(err) => {
                self.keep_first_err(Error::read_file(&cert_path.to_string_lossy(), &err));
                return self;
            }
        };
        let key_path = key.as_ref();
        let key_content = match fs::read(key_path) {
            Ok(content) => content,
            Err(err) => {
                self.keep_first_err(Error::read_file(&key_path.to_string_lossy(), &err));
                return self;
            }
        };
        self.add_cert_content(&cert_content, &key_content)
    }

    /// Attaches a client certificate/key pair from PEM buffers. A
    /// parse failure is sticky and the identity is not attached.
    #[must_use]
    pub fn add_cert_content(mut self, cert: &[u8], key: &[u8]) -> Self {
        match identity_from_pem(cert, key) {
            Ok(identity) => self.add_cert(identity),
            Err(err) => {
                self.keep_first_err(err);
                self
            }
        }
    }

    /// Attaches an already-parsed client identity.
    #[must_use]
    pub fn add_cert(mut self, identity: Identity) -> Self {
        self.transport.tls_mut().add_identity(identity);
        self.invalidate_client();
        self
    }
}
