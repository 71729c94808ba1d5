//! Persisted index snapshots

use authz_engine::AuthorizationIndex;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A compiled index as written to disk.
///
/// The snapshot embeds the full index plus a compilation timestamp.
/// Validity is decided solely by comparing the embedded index's
/// `source_hash` against the hash of the current policy bytes; the
/// timestamp is bookkeeping only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the embedded index was compiled.
    pub compiled_at: DateTime<Utc>,

    /// The compiled index itself.
    #[serde(flatten)]
    pub index: AuthorizationIndex,
}

impl Snapshot {
    /// Wrap a freshly compiled index for persistence.
    pub fn new(index: AuthorizationIndex) -> Self {
        Self {
            compiled_at: Utc::now(),
            index,
        }
    }

    /// Whether this snapshot was compiled from policy bytes with `hash`.
    pub fn matches(&self, hash: &str) -> bool {
        self.index.source_hash == hash
    }
}
