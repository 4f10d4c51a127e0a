//! TLS trust and identity material.
//!
//! `CertStore` collects trusted root certificates, `TlsSettings` bundles
//! the store with verification and client-identity options. Both are
//! plain data: they are realized into the delegated transport when a
//! client is built, and are allocated lazily by [`crate::Transport`] on
//! first use.

use reqwest::{Certificate, Identity};

use crate::Error;

const CERT_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const CERT_END: &str = "-----END CERTIFICATE-----";

/// A set of trusted root certificates used to validate server chains.
#[derive(Debug, Clone, Default)]
pub struct CertStore {
    certs: Vec<Certificate>,
}

impl CertStore {
    /// Creates an empty trust store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every parseable certificate found in a PEM buffer.
    ///
    /// Fragments that are not valid certificates are skipped silently
    /// and the store stays usable for later additions. Returns the
    /// number of certificates added.
    pub fn add_pem(&mut self, pem: &[u8]) -> usize {
        let Ok(text) = std::str::from_utf8(pem) else {
            return 0;
        };

        let mut added = 0;
        let mut pos = 0;
        while pos < text.len() {
            let Some(begin) = text[pos..].find(CERT_BEGIN) else {
                break;
            };
            let Some(end) = text[pos + begin..].find(CERT_END) else {
                break;
            };

            let block = &text[pos + begin..pos + begin + end + CERT_END.len()];
            if let Ok(cert) = Certificate::from_pem(block.as_bytes()) {
                self.certs.push(cert);
                added += 1;
            }
            pos += begin + end + CERT_END.len();
        }
        added
    }

    /// Adds a single already-parsed certificate.
    pub fn add_cert(&mut self, cert: Certificate) {
        self.certs.push(cert);
    }

    /// The certificates currently held by the store.
    pub fn certs(&self) -> &[Certificate] {
        &self.certs
    }

    /// Returns true if the store holds no certificates.
    pub fn is_empty(&self) -> bool {
        self.certs.is_empty()
    }

    /// Number of certificates in the store.
    pub fn len(&self) -> usize {
        self.certs.len()
    }
}

/// TLS configuration applied to the delegated transport.
#[derive(Debug, Clone, Default)]
pub struct TlsSettings {
    insecure_skip_verify: bool,
    root_store: Option<CertStore>,
    identities: Vec<Identity>,
}

impl TlsSettings {
    /// Creates settings with verification enabled and no extra trust
    /// or identity material.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles server certificate verification.
    pub fn set_insecure_skip_verify(&mut self, skip: bool) {
        self.insecure_skip_verify = skip;
    }

    /// Whether server certificate verification is disabled.
    pub fn insecure_skip_verify(&self) -> bool {
        self.insecure_skip_verify
    }

    /// The trust store, allocating an empty one on first access.
    pub fn root_store_mut(&mut self) -> &mut CertStore {
        self.root_store.get_or_insert_with(CertStore::new)
    }

    /// The trust store, if one has been allocated.
    pub fn root_store(&self) -> Option<&CertStore> {
        self.root_store.as_ref()
    }

    /// Replaces the trust store wholesale.
    pub fn set_root_store(&mut self, store: CertStore) {
        self.root_store = Some(store);
    }

    /// Attaches a client identity for mutual TLS.
    pub fn add_identity(&mut self, identity: Identity) {
        self.identities.push(identity);
    }

    /// Client identities attached so far.
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }
}

/// Parses a PEM certificate/key pair into a client identity.
///
/// The pair is handed to the transport as a single PEM bundle; parse
/// failures surface as [`Error::InvalidIdentity`].
pub fn identity_from_pem(cert: &[u8], key: &[u8]) -> Result<Identity, Error> {
    let mut bundle = Vec::with_capacity(cert.len() + key.len() + 1);
    bundle.extend_from_slice(cert);
    if !cert.ends_with(b"\n") {
        bundle.push(b'\n');
    }
    bundle.extend_from_slice(key);
    Identity::from_pem(&bundle).map_err(|e| Error::InvalidIdentity(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Self-signed test certificate, valid PEM structure.
    const TEST_CA: &str = "-----BEGIN CERTIFICATE-----
MIIBhTCCASugAwIBAgIQIRi6zePL6mKjOipn+dNuaTAKBggqhkjOPQQDAjASMRAw
DgYDVQQKEwdBY21lIENvMB4XDTE3MTAyMDE5NDMwNloXDTE4MTAyMDE5NDMwNlow
EjEQMA4GA1UEChMHQWNtZSBDbzBZMBMGByqGSM49AgEGCCqGSM49AwEHA0IABD0d
7VNhbWvZLWPuj/RtHFjvtJBEwOkhbN/BnnE8rnZR8+sbwnc/KhCk3FhnpHZnQz7B
5aETbbIgmuvewdjvSBSjYzBhMA4GA1UdDwEB/wQEAwICpDATBgNVHSUEDDAKBggr
BgEFBQcDATAPBgNVHRMBAf8EBTADAQH/MCkGA1UdEQQiMCCCDmxvY2FsaG9zdDo1
NDUzgg4xMjcuMC4wLjE6NTQ1MzAKBggqhkjOPQQDAgNIADBFAiEA2zpJEPQyz6/l
Wf86aX6PepsntZv2GYlA5UpabfT2EZICICpJ5h/iI+i341gBmLiAFQOyTDT+/wQc
6MF9+Yw1Yy0t
-----END CERTIFICATE-----";

    #[test]
    fn add_pem_parses_valid_certificate() {
        let mut store = CertStore::new();
        let added = store.add_pem(TEST_CA.as_bytes());
        assert_eq!(added, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_pem_skips_malformed_content() {
        let mut store = CertStore::new();
        assert_eq!(store.add_pem(b"this is not pem at all"), 0);
        assert_eq!(
            store.add_pem(
                b"-----BEGIN CERTIFICATE-----\ngarbage\n-----END CERTIFICATE-----\n"
            ),
            0
        );
        assert!(store.is_empty());

        // The store stays usable after bad input.
        assert_eq!(store.add_pem(TEST_CA.as_bytes()), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_pem_handles_mixed_buffers() {
        let mixed = format!(
            "junk before\n-----BEGIN CERTIFICATE-----\nnope\n-----END CERTIFICATE-----\n{TEST_CA}\ntrailing junk"
        );
        let mut store = CertStore::new();
        assert_eq!(store.add_pem(mixed.as_bytes()), 1);
    }

    #[test]
    fn add_pem_rejects_non_utf8() {
        let mut store = CertStore::new();
        assert_eq!(store.add_pem(&[0xff, 0xfe, 0x00]), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn root_store_is_lazily_allocated() {
        let mut settings = TlsSettings::new();
        assert!(settings.root_store().is_none());
        settings.root_store_mut().add_pem(TEST_CA.as_bytes());
        assert_eq!(settings.root_store().map(CertStore::len), Some(1));
    }

    #[test]
    fn identity_from_bad_pem_is_an_error() {
        let err = identity_from_pem(b"not a cert", b"not a key").unwrap_err();
        assert!(matches!(err, Error::InvalidIdentity(_)));
    }
}
