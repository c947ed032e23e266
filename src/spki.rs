//! Subject public key extraction and fingerprinting.
//!
//! Pulls the SubjectPublicKeyInfo out of a PEM certificate and digests the
//! raw key bytes. The fingerprint covers the key, not the certificate, so a
//! pin keeps matching across reissuance as long as the key is unchanged.

use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};
use x509_parser::der_parser::asn1_rs::{Any, Tag};
use x509_parser::pem::parse_x509_pem;

use crate::error::Error;

/// Upper bound on accepted PEM input. Certificates arrive from the network
/// before any trust decision, so parsing work is bounded.
const MAX_PEM_LEN: usize = 256 * 1024;

/// Subject public key properties extracted from a certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateKeyInfo {
    /// Algorithm OID, lowercase hex of its DER content bytes.
    pub algorithm_id: String,
    /// Algorithm parameter (e.g. curve OID), lowercase hex of its DER value
    /// bytes. `None` when the parameter is absent or ASN.1 NULL.
    pub algorithm_param: Option<String>,
    /// Raw subject public key bytes (the SPKI BIT STRING contents).
    pub raw_key: Vec<u8>,
}

fn algorithm_param(parameters: Option<&Any<'_>>) -> Option<String> {
    match parameters {
        Some(any) if any.tag() != Tag::Null => Some(hex::encode(any.data)),
        _ => None,
    }
}

/// Parse a PEM certificate and extract its subject public key information.
///
/// # Errors
///
/// Returns [`Error::CertificateParse`] on malformed PEM or X.509 structure.
/// Callers must propagate this rather than fold it into a verification
/// outcome.
pub fn extract_key_info(cert_pem: &str) -> Result<CertificateKeyInfo, Error> {
    if cert_pem.len() > MAX_PEM_LEN {
        return Err(Error::CertificateParse(format!(
            "certificate input exceeds {} bytes",
            MAX_PEM_LEN
        )));
    }

    let (_, pem) = parse_x509_pem(cert_pem.as_bytes())
        .map_err(|e| Error::CertificateParse(format!("invalid PEM: {}", e)))?;
    let cert = pem
        .parse_x509()
        .map_err(|e| Error::CertificateParse(format!("invalid X.509 certificate: {}", e)))?;

    let spki = cert.public_key();
    Ok(CertificateKeyInfo {
        algorithm_id: hex::encode(spki.algorithm.algorithm.as_bytes()),
        algorithm_param: algorithm_param(spki.algorithm.parameters.as_ref()),
        raw_key: spki.subject_public_key.data.to_vec(),
    })
}

/// SHA-256 over the raw public key bytes, base64-encoded. This is the value
/// compared against [`PinnedKeyInfo::fingerprints`].
///
/// [`PinnedKeyInfo::fingerprints`]: crate::types::pin::PinnedKeyInfo::fingerprints
pub fn fingerprint(raw_key: &[u8]) -> String {
    general_purpose::STANDARD.encode(Sha256::digest(raw_key))
}
