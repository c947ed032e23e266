use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed PEM or ASN.1 input. Always propagated to the caller; a
    /// certificate that cannot be parsed must never degrade into a
    /// "verification skipped" outcome.
    #[error("Certificate parse error: {0}")]
    CertificateParse(String),

    /// A pin entry references issuer root keys that all fail to parse.
    /// This is a build-time defect in the pin configuration, distinct from
    /// "no root matched".
    #[error("Pin configuration error: {0}")]
    Configuration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
