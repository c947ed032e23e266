//! # certpin
//!
//! TLS certificate pinning verification.
//!
//! Given a hostname and the certificate chain presented during a connection,
//! certpin decides whether the presented public key and its issuing authority
//! match a pre-configured trusted set for that hostname, defending a client
//! against certificate substitution (rogue CA, compromised CA, on-path MITM).
//!
//! ## Features
//!
//! - **Pin Registry**: an immutable, ordered set of per-hostname pin records
//!   with case-insensitive lookup and first-match-wins semantics
//! - **Key Fingerprints**: SHA-256 digests of the raw subject public key,
//!   stable across certificate reissuance
//! - **Issuer Root Checks**: validate the issuer certificate's signature
//!   against pinned root public keys
//! - **Tri-state Results**: every check reports passed, failed, or not
//!   applicable — a skipped check is never conflated with a failed one
//!
//! ## Quick Start
//!
//! ```rust
//! use certpin::pins::ALGORITHM_RSA;
//! use certpin::registry::PinRegistry;
//! use certpin::types::pin::{PinEntry, PinnedKeyInfo};
//! use certpin::verification::hostname_should_be_pinned;
//!
//! let registry = PinRegistry::new(vec![PinEntry {
//!     hostname: "wire.com".to_string(),
//!     key_info: PinnedKeyInfo {
//!         algorithm_id: ALGORITHM_RSA.to_string(),
//!         algorithm_param: None,
//!         fingerprints: vec!["bORoZ2vRsPJ4WBsUdL1h3Q7C50ZaBqPwngDmDVw+wHA=".to_string()],
//!         issuer_root_pubkeys: vec![],
//!     },
//! }]);
//!
//! assert!(hostname_should_be_pinned(&registry, " WIRE.COM "));
//! assert!(!hostname_should_be_pinned(&registry, "example.com"));
//! ```
//!
//! Verification itself goes through [`verification::verify_pinning`], which
//! takes the registry, the hostname and a [`types::pin::CertificateRef`]
//! holding the leaf certificate PEM and (optionally) its direct issuer.
//!
//! ## Concurrency
//!
//! All operations are synchronous and pure: the registry is immutable after
//! construction, so verification can run concurrently from any number of
//! threads — including inline in a TLS handshake callback — without locking.
//!
//! ## Error Handling
//!
//! Parse failures on the subject certificate abort verification with
//! [`error::Error::CertificateParse`]; they are never folded into a `false`
//! result. A pin entry whose issuer roots are all unparsable surfaces
//! [`error::Error::Configuration`]. A well-formed certificate that simply
//! does not match the pins is a verification outcome, not an error.

pub mod error;
pub mod issuer;
pub mod pins;
pub mod registry;
pub mod spki;
pub mod types;
pub mod verification;
