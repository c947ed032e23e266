//! Pin verification orchestration.
//!
//! Combines registry lookup, key extraction and the issuer signature check
//! into a structured tri-state result. Nothing here aggregates the checks
//! into a single pass/fail: policy (which field combinations are fatal)
//! belongs to the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Error;
use crate::issuer::verify_issuer_against_roots;
use crate::registry::PinRegistry;
use crate::spki::{extract_key_info, fingerprint};
use crate::types::pin::CertificateRef;

/// Outcome of [`verify_pinning`]: four independent tri-state checks.
///
/// `Some(true)` means the check passed, `Some(false)` it failed, `None` that
/// the registry entry did not assert that property — or that no entry matched
/// the hostname at all. An all-unset result is therefore ambiguous between
/// "hostname not pinned" and "pinned but nothing asserted"; callers that need
/// the distinction must consult [`hostname_should_be_pinned`] and must never
/// read an all-unset result as "verification failed".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_issuer_root_pubkeys: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_fingerprints: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_public_key_algorithm_id: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_public_key_algorithm_param: Option<bool>,
}

impl VerificationResult {
    /// True when no check was applicable. See the type-level note on how to
    /// interpret this.
    pub fn is_unchecked(&self) -> bool {
        self.verified_issuer_root_pubkeys.is_none()
            && self.verified_fingerprints.is_none()
            && self.verified_public_key_algorithm_id.is_none()
            && self.verified_public_key_algorithm_param.is_none()
    }
}

/// Whether the registry pins the given hostname at all, independent of what
/// the matching entry asserts.
pub fn hostname_should_be_pinned(registry: &PinRegistry, hostname: &str) -> bool {
    registry.contains_hostname(hostname)
}

/// Verify the presented certificate against the pin entry for `hostname`.
///
/// With no matching entry the result has all fields unset. The algorithm
/// ID/param comparisons always yield concrete booleans; the fingerprint and
/// issuer checks stay unset when the entry asserts nothing for them. When
/// issuer roots are pinned but no issuer certificate was supplied, the issuer
/// check is `Some(false)` — the pin demands a check that could not be
/// performed.
///
/// # Errors
///
/// [`Error::CertificateParse`] if the subject certificate (or a supplied
/// issuer certificate) cannot be parsed; [`Error::Configuration`] if every
/// pinned issuer root is unparsable. Parse failures abort verification
/// instead of becoming `false` results: "could not even parse the
/// certificate" must stay distinguishable from "certificate presented but
/// pin mismatch".
pub fn verify_pinning(
    registry: &PinRegistry,
    hostname: &str,
    certificate: &CertificateRef,
) -> Result<VerificationResult, Error> {
    let Some(entry) = registry.lookup(hostname) else {
        debug!(hostname, "no pin entry for hostname");
        return Ok(VerificationResult::default());
    };
    let pinned = &entry.key_info;

    let key_info = extract_key_info(&certificate.data)?;
    let key_fingerprint = fingerprint(&key_info.raw_key);

    let verified_fingerprints = if pinned.fingerprints.is_empty() {
        None
    } else {
        Some(pinned.fingerprints.iter().any(|f| *f == key_fingerprint))
    };

    let verified_issuer_root_pubkeys = if pinned.issuer_root_pubkeys.is_empty() {
        None
    } else {
        match &certificate.issuer_cert {
            Some(issuer) => Some(verify_issuer_against_roots(
                &issuer.data,
                &pinned.issuer_root_pubkeys,
            )?),
            None => {
                warn!(hostname, "issuer roots pinned but no issuer certificate supplied");
                Some(false)
            }
        }
    };

    let result = VerificationResult {
        verified_issuer_root_pubkeys,
        verified_fingerprints,
        verified_public_key_algorithm_id: Some(pinned.algorithm_id == key_info.algorithm_id),
        verified_public_key_algorithm_param: Some(pinned.algorithm_param == key_info.algorithm_param),
    };
    debug!(hostname, ?result, "pin verification complete");
    Ok(result)
}
