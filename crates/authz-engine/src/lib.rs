//! # Authz Engine
//!
//! Compiles a declarative role-based access-control policy into a flat,
//! queryable authorization index, and answers permission checks against
//! that index.
//!
//! ## Overview
//!
//! The engine handles:
//! - **Permission sets**: unordered collections of permission names
//! - **Role compilation**: flattening role inheritance (with cycle
//!   detection) into effective permission sets
//! - **Resource compilation**: projecting role sets onto per-identity,
//!   per-resource grants
//! - **Queries**: `authorize(user, groups, resource, permission)`
//!
//! ## Architecture
//!
//! ```text
//! Policy
//!   ├─ roles ──────→ compile_roles ─────→ role ─→ PermissionSet
//!   └─ resources ──→ compile_resources ─→ user/group ─→ resource ─→ PermissionSet
//!                                             │
//!                                    AuthorizationIndex ─→ authorize(..)
//! ```
//!
//! Inheritance is resolved entirely at compile time: a query never walks
//! the role graph, it performs two map lookups and a set membership test.
//!
//! ## Usage
//!
//! ```rust
//! use authz_engine::AuthorizationIndex;
//! use authz_policy::parse_policy;
//!
//! let policy = parse_policy(r#"
//! roles:
//!   viewer:
//!     permissions: [read]
//!   editor:
//!     permissions: [write]
//!     extends: [viewer]
//! resources:
//!   doc1:
//!     editor:
//!       users: [alice]
//! "#).unwrap();
//!
//! let index = AuthorizationIndex::compile(&policy, "policy-hash").unwrap();
//! assert!(index.authorize("alice", &[] as &[&str], "doc1", "read"));
//! assert!(!index.authorize("bob", &[] as &[&str], "doc1", "read"));
//! ```
//!
//! ## Compilation errors
//!
//! Compilation is all-or-nothing. A role reference that names an
//! undefined role fails with [`CompileError::UnknownRole`]; an
//! inheritance graph that revisits a role on the current traversal path
//! fails with [`CompileError::InheritanceCycle`]. No partial index is
//! ever produced.

pub mod error;
pub mod index;
pub mod resources;
pub mod roles;
pub mod set;

// Re-export main types for convenience
pub use error::{CompileError, ReferencePath};
pub use index::AuthorizationIndex;
pub use resources::{compile_resources, CompiledGrants, ResourceGrants};
pub use roles::{compile_roles, CompiledRoles};
pub use set::PermissionSet;
