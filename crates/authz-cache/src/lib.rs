//! # Authz Cache
//!
//! Policy loading for the authz workspace: reads a policy file, gates
//! compilation behind a content-hash cache check, and persists compiled
//! indexes as reusable snapshots.
//!
//! ## Overview
//!
//! This crate handles:
//! - **Content hashing**: SHA-256 over the raw policy bytes
//! - **Snapshots**: the serialized form of a compiled index
//! - **Storage**: file-backed snapshot read/write at an explicit path
//! - **Loading**: the read → gate → compile → persist orchestration
//!
//! ## Cache semantics
//!
//! The gate is an exact whole-document match: a snapshot is reused only
//! when the hash stored inside it equals the hash of the current policy
//! bytes. Any mismatch, missing snapshot, or unreadable snapshot falls
//! back to a full recompile; a failure to persist a fresh snapshot is
//! logged and otherwise ignored. Only policy-read, parse, and compile
//! failures abort a load.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use authz_cache::Loader;
//!
//! let index = Loader::new("policy.yaml")
//!     .with_cache(".authz.json")
//!     .load()
//!     .expect("policy should load");
//!
//! assert!(index.authorize("alice", &["engineering"], "doc1", "read"));
//! ```

pub mod hash;
pub mod loader;
pub mod snapshot;
pub mod store;

// Re-export main types for convenience
pub use hash::content_hash;
pub use loader::{LoadError, Loader};
pub use snapshot::Snapshot;
pub use store::{SnapshotStore, StoreError};
