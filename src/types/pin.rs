use serde::{Deserialize, Serialize};

/// Expected-key assertions for one pinned hostname.
///
/// Empty `fingerprints` or `issuer_root_pubkeys` mean "not checked", never
/// "always fails". The algorithm fields are compared literally against the
/// presented certificate on every verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PinnedKeyInfo {
    /// Expected public key algorithm OID, lowercase hex of its DER content
    /// bytes (e.g. `"2a864886f70d010101"` for RSA).
    pub algorithm_id: String,
    /// Expected algorithm parameter (e.g. a curve OID), lowercase hex of its
    /// DER value bytes. `None` means the key algorithm carries no parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_param: Option<String>,
    /// Acceptable public key digests: base64-encoded SHA-256 of the raw
    /// subject public key bytes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fingerprints: Vec<String>,
    /// Trusted root public keys (PEM), used to validate the signature on the
    /// *issuer* certificate of the presented chain.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issuer_root_pubkeys: Vec<String>,
}

/// One pinned hostname and its key assertions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PinEntry {
    pub hostname: String,
    pub key_info: PinnedKeyInfo,
}

/// Certificate material handed in by the TLS layer: the leaf certificate in
/// PEM form and, optionally, its direct issuer certificate. Only one level of
/// issuer nesting is consulted; deeper chain walking is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateRef {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_cert: Option<Box<CertificateRef>>,
}

impl CertificateRef {
    pub fn new(pem: impl Into<String>) -> Self {
        Self {
            data: pem.into(),
            issuer_cert: None,
        }
    }

    pub fn with_issuer(mut self, issuer: CertificateRef) -> Self {
        self.issuer_cert = Some(Box::new(issuer));
        self
    }
}
