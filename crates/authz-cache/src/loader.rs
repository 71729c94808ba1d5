//! Policy loading and cache orchestration
//!
//! Ties the pipeline together: read the policy file, hash it, reuse a
//! matching snapshot if one is stored, otherwise parse, compile, and
//! persist the fresh result.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use authz_engine::{AuthorizationIndex, CompileError};
use authz_policy::{parse_policy_bytes, PolicyError};

use crate::hash::content_hash;
use crate::snapshot::Snapshot;
use crate::store::SnapshotStore;

/// Errors that abort a policy load.
///
/// Snapshot read and write failures are deliberately absent: a failed
/// read degrades to recompilation and a failed write leaves the fresh
/// in-memory index in use. Both are logged, neither fails the load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The policy file could not be read.
    #[error("failed to read policy file: {0}")]
    Io(#[from] io::Error),

    /// The policy file is not a valid policy document.
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// The policy references an undefined role or contains an
    /// inheritance cycle.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Loads a policy file into a queryable [`AuthorizationIndex`].
///
/// Every load is a full rebuild from the source policy unless a cached
/// snapshot matches the policy's content hash exactly, in which case the
/// snapshot's index is reused verbatim. Reloading produces a brand-new
/// index value; callers swap the handle their readers use.
///
/// # Examples
///
/// ```rust,no_run
/// use authz_cache::Loader;
///
/// let index = Loader::new("policy.yaml")
///     .with_cache(".authz.json")
///     .load()
///     .expect("policy should load");
/// ```
#[derive(Debug, Clone)]
pub struct Loader {
    policy_path: PathBuf,
    cache: Option<SnapshotStore>,
}

impl Loader {
    /// Load the policy at `policy_path`, with no snapshot caching.
    pub fn new(policy_path: impl Into<PathBuf>) -> Self {
        Self {
            policy_path: policy_path.into(),
            cache: None,
        }
    }

    /// Persist compiled snapshots at `path` and reuse them on later
    /// loads when the policy is unchanged.
    pub fn with_cache(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache = Some(SnapshotStore::new(path));
        self
    }

    /// Load the policy, reusing a cached snapshot when the source is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the policy file cannot be read,
    /// [`LoadError::Policy`] if it does not parse, [`LoadError::Compile`]
    /// if it references undefined roles or contains an inheritance
    /// cycle.
    pub fn load(&self) -> Result<AuthorizationIndex, LoadError> {
        info!(path = %self.policy_path.display(), "loading access control policy");

        let bytes = fs::read(&self.policy_path)?;
        let hash = content_hash(&bytes);

        if let Some(store) = &self.cache {
            if let Some(index) = try_cached(store, &hash) {
                log_metrics(&index);
                return Ok(index);
            }
        }

        let policy = parse_policy_bytes(&bytes)?;

        let start = Instant::now();
        let index = AuthorizationIndex::compile(&policy, hash)?;
        info!(elapsed = ?start.elapsed(), "policy compiled");

        if let Some(store) = &self.cache {
            match store.save(&Snapshot::new(index.clone())) {
                Ok(()) => info!(path = %store.path().display(), "snapshot saved"),
                Err(err) => {
                    warn!(error = %err, "failed to save snapshot, continuing with in-memory index")
                }
            }
        }

        log_metrics(&index);
        Ok(index)
    }
}

/// Return the cached index if `store` holds a snapshot compiled from
/// policy bytes with `hash`. Any miss, mismatch, or read failure falls
/// through to recompilation.
fn try_cached(store: &SnapshotStore, hash: &str) -> Option<AuthorizationIndex> {
    if !store.exists() {
        debug!(path = %store.path().display(), "no snapshot found");
        return None;
    }
    match store.load() {
        Ok(snapshot) if snapshot.matches(hash) => {
            info!(
                path = %store.path().display(),
                compiled_at = %snapshot.compiled_at,
                "snapshot matches policy hash, reusing cached index"
            );
            Some(snapshot.index)
        }
        Ok(_) => {
            info!("snapshot hash differs from policy hash, recompiling");
            None
        }
        Err(err) => {
            warn!(error = %err, "failed to load snapshot, recompiling");
            None
        }
    }
}

fn log_metrics(index: &AuthorizationIndex) {
    info!(
        roles = index.roles.len(),
        users = index.users.len(),
        groups = index.groups.len(),
        "authorization index ready"
    );
}
