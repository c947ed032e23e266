//! Issuer certificate signature checks against pinned root public keys.

use tracing::warn;
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::*;

use crate::error::Error;

/// Check whether the issuer certificate's signature validates against any of
/// the candidate root public keys (PEM-encoded SPKI), using the signature
/// algorithm the certificate itself declares.
///
/// Returns `Ok(true)` if any candidate validates, `Ok(false)` if none does.
/// An unparsable candidate is skipped so that one misconfigured root cannot
/// disable protection by the others; if the candidate set is non-empty and
/// *no* candidate parses, that is [`Error::Configuration`].
///
/// Callers decide what an empty candidate set means; this function treats it
/// as "nothing matched" and returns `Ok(false)`.
///
/// # Errors
///
/// [`Error::CertificateParse`] if the issuer certificate cannot be parsed,
/// [`Error::Configuration`] if all candidate roots are unparsable.
pub fn verify_issuer_against_roots(
    issuer_cert_pem: &str,
    root_pubkeys_pem: &[String],
) -> Result<bool, Error> {
    let (_, pem) = parse_x509_pem(issuer_cert_pem.as_bytes())
        .map_err(|e| Error::CertificateParse(format!("invalid issuer PEM: {}", e)))?;
    let issuer = pem
        .parse_x509()
        .map_err(|e| Error::CertificateParse(format!("invalid issuer certificate: {}", e)))?;

    let mut any_parsed = false;
    for (index, root_pem) in root_pubkeys_pem.iter().enumerate() {
        let root = match parse_x509_pem(root_pem.as_bytes()) {
            Ok((_, p)) => p,
            Err(e) => {
                warn!(root = index, error = %e, "skipping unparsable pinned root key");
                continue;
            }
        };
        let spki = match SubjectPublicKeyInfo::from_der(&root.contents) {
            Ok((_, spki)) => spki,
            Err(e) => {
                warn!(root = index, error = %e, "skipping pinned root key with invalid SPKI");
                continue;
            }
        };
        any_parsed = true;

        if issuer.verify_signature(Some(&spki)).is_ok() {
            return Ok(true);
        }
    }

    if !any_parsed && !root_pubkeys_pem.is_empty() {
        return Err(Error::Configuration(
            "none of the pinned issuer root public keys could be parsed".to_string(),
        ));
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcgen::{CertificateParams, Issuer, KeyPair};

    struct Chain {
        issuer_cert_pem: String,
        root_pubkey_pem: String,
    }

    /// Root CA and an intermediate certificate it signed. The intermediate
    /// plays the role of the "issuer certificate" presented with a leaf.
    fn setup() -> Chain {
        let root_key = KeyPair::generate().unwrap();
        let mut root_params = CertificateParams::new(Vec::default()).unwrap();
        root_params.is_ca = rcgen::IsCa::Ca(rcgen::BasicConstraints::Unconstrained);
        let root_pubkey_pem = root_key.public_key_pem();
        let root = Issuer::new(root_params, root_key);

        let intermediate_key = KeyPair::generate().unwrap();
        let mut intermediate_params = CertificateParams::new(Vec::default()).unwrap();
        intermediate_params.is_ca = rcgen::IsCa::Ca(rcgen::BasicConstraints::Unconstrained);
        let issuer_cert_pem = intermediate_params
            .signed_by(&intermediate_key, &root)
            .unwrap()
            .pem();

        Chain {
            issuer_cert_pem,
            root_pubkey_pem,
        }
    }

    fn unrelated_pubkey_pem() -> String {
        KeyPair::generate().unwrap().public_key_pem()
    }

    #[test]
    fn test_signed_by_pinned_root() {
        let chain = setup();
        let roots = vec![chain.root_pubkey_pem.clone()];
        assert!(verify_issuer_against_roots(&chain.issuer_cert_pem, &roots).unwrap());
    }

    #[test]
    fn test_signed_by_unrelated_key() {
        let chain = setup();
        let roots = vec![unrelated_pubkey_pem()];
        assert!(!verify_issuer_against_roots(&chain.issuer_cert_pem, &roots).unwrap());
    }

    #[test]
    fn test_any_candidate_suffices() {
        let chain = setup();
        let roots = vec![unrelated_pubkey_pem(), chain.root_pubkey_pem.clone()];
        assert!(verify_issuer_against_roots(&chain.issuer_cert_pem, &roots).unwrap());
    }

    #[test]
    fn test_unparsable_candidate_skipped() {
        let chain = setup();
        let roots = vec!["garbage".to_string(), chain.root_pubkey_pem.clone()];
        assert!(verify_issuer_against_roots(&chain.issuer_cert_pem, &roots).unwrap());
    }

    #[test]
    fn test_all_candidates_unparsable_is_configuration_error() {
        let chain = setup();
        let roots = vec!["garbage".to_string(), "more garbage".to_string()];
        let err = verify_issuer_against_roots(&chain.issuer_cert_pem, &roots).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_empty_candidate_set_is_false_not_error() {
        let chain = setup();
        assert!(!verify_issuer_against_roots(&chain.issuer_cert_pem, &[]).unwrap());
    }

    #[test]
    fn test_unparsable_issuer_certificate() {
        let chain = setup();
        let roots = vec![chain.root_pubkey_pem];
        let err = verify_issuer_against_roots("not a certificate", &roots).unwrap_err();
        assert!(matches!(err, Error::CertificateParse(_)));
    }

    #[test]
    fn test_self_signed_root_validates_against_own_key() {
        let key = KeyPair::generate().unwrap();
        let mut params = CertificateParams::new(Vec::default()).unwrap();
        params.is_ca = rcgen::IsCa::Ca(rcgen::BasicConstraints::Unconstrained);
        let pubkey_pem = key.public_key_pem();
        let cert_pem = params.self_signed(&key).unwrap().pem();

        assert!(verify_issuer_against_roots(&cert_pem, &[pubkey_pem]).unwrap());
    }
}
