//! Ordered, immutable registry of certificate pins.
//!
//! The registry is built once at process start from compiled-in configuration
//! and read concurrently afterwards. Entries are kept as an ordered sequence,
//! not a map: if two entries share a hostname, only the first one in
//! declaration order is ever consulted. That invariant is observable behavior
//! and deliberately preserved; the registry never deduplicates.

use crate::error::Error;
use crate::types::pin::PinEntry;

/// Hostname comparison form: surrounding whitespace trimmed, lowercased.
fn normalize_hostname(hostname: &str) -> String {
    hostname.trim().to_lowercase()
}

/// An immutable ordered collection of [`PinEntry`] records, one per protected
/// hostname. Pass it to the verification functions as an explicit dependency;
/// tests can substitute alternate pin sets the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinRegistry {
    entries: Vec<PinEntry>,
}

impl PinRegistry {
    pub fn new(entries: Vec<PinEntry>) -> Self {
        Self { entries }
    }

    /// Find the pin entry for a hostname, comparing case-insensitively with
    /// surrounding whitespace trimmed. First match in registry order wins.
    pub fn lookup(&self, hostname: &str) -> Option<&PinEntry> {
        let wanted = normalize_hostname(hostname);
        self.entries
            .iter()
            .find(|entry| normalize_hostname(&entry.hostname) == wanted)
    }

    /// Whether any entry matches the hostname, independent of what that entry
    /// asserts. This is the only way to distinguish "hostname not pinned"
    /// from "pinned but the entry asserts nothing".
    pub fn contains_hostname(&self, hostname: &str) -> bool {
        self.lookup(hostname).is_some()
    }

    pub fn entries(&self) -> &[PinEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the entry list to JSON, preserving order.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Deserialize a registry from a JSON entry list, preserving order.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let entries: Vec<PinEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }
}
