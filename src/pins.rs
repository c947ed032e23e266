//! Built-in production pin set.
//!
//! The hostnames, key fingerprints and issuer root shipped with the
//! application. The webapp host is derived from the build's webapp URL via
//! [`strip_url`]; everything else is fixed.

use crate::registry::PinRegistry;
use crate::types::pin::{PinEntry, PinnedKeyInfo};

/// Public key algorithm OID for RSA (1.2.840.113549.1.1.1), hex-encoded.
pub const ALGORITHM_RSA: &str = "2a864886f70d010101";

/// Fingerprint of the production service key.
pub const MAIN_FINGERPRINT: &str = "3pHQns2wdYtN4b2MWsMguGw70gISyhBZLZDpbj+EmdU=";

/// Fingerprint of the webapp host key.
pub const WEBAPP_FINGERPRINT: &str = "bORoZ2vRsPJ4WBsUdL1h3Q7C50ZaBqPwngDmDVw+wHA=";

/// DigiCert High Assurance EV Root CA public key, pinned as the expected
/// signer of the webapp host's issuer certificate.
pub const DIGICERT_EV_ROOT_PUBKEY: &str = "-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAxszlc+b71LvlLS0ypt/l
gT/JzSVJtnEqw9WUNGeiChywX2mmQLHEt7KP0JikqUFZOtPclNY823Q4pErMTSWC
90qlUxI47vNJbXGRfmO2q6Zfw6SE+E9iUb74xezbOJLjBuUIkQzEKEFV+8taiRV+
ceg1v01yCT2+OjhQW3cxG42zxyRFmqesbQAUWgS3uhPrUQqYQUEiTmVhh4FBUKZ5
XIneGUpX1S7mXRxTLH6YzRoGFqRoc9A0BBNcoXHTWnxV215k4TeHMFYE5RG0KYAS
8Xk5iKICEXwnZreIt3jyygqoOKsKZMK/Zl2VhMGhJR6HXRpQCyASzEG7bgtROLhL
ywIDAQAB
-----END PUBLIC KEY-----";

/// Reduce a build-time URL to the hostname form the registry expects:
/// the `https:` scheme and every slash removed.
pub fn strip_url(url: &str) -> String {
    url.replace("https:", "").replace('/', "")
}

fn main_key_entry(hostname: &str) -> PinEntry {
    PinEntry {
        hostname: hostname.to_string(),
        key_info: PinnedKeyInfo {
            algorithm_id: ALGORITHM_RSA.to_string(),
            algorithm_param: None,
            fingerprints: vec![MAIN_FINGERPRINT.to_string()],
            issuer_root_pubkeys: vec![],
        },
    }
}

/// The production registry. `webapp_url` is the build's webapp URL; its
/// stripped hostname gets the webapp pin with the issuer root check.
pub fn production_registry(webapp_url: &str) -> PinRegistry {
    let mut entries = vec![PinEntry {
        hostname: strip_url(webapp_url),
        key_info: PinnedKeyInfo {
            algorithm_id: ALGORITHM_RSA.to_string(),
            algorithm_param: None,
            fingerprints: vec![
                WEBAPP_FINGERPRINT.to_string(),
                MAIN_FINGERPRINT.to_string(),
            ],
            issuer_root_pubkeys: vec![DIGICERT_EV_ROOT_PUBKEY.to_string()],
        },
    }];
    entries.extend(
        [
            "wire.com",
            "www.wire.com",
            "prod-nginz-https.wire.com",
            "prod-nginz-ssl.wire.com",
            "prod-assets.wire.com",
        ]
        .into_iter()
        .map(main_key_entry),
    );
    PinRegistry::new(entries)
}
