//! # Authz Policy
//!
//! The declarative input side of the authz workspace: the policy document
//! model and its YAML parser.
//!
//! ## Overview
//!
//! A policy declares two things:
//! - **Roles**: named permission bundles that may extend other roles
//! - **Resources**: which roles are granted to which users and groups,
//!   per protected resource
//!
//! ```text
//! Policy
//!   ├─ roles:     name ─→ RoleDefinition { permissions, extends }
//!   └─ resources: name ─→ role ─→ RoleGrant { users, groups }
//! ```
//!
//! Parsing stops at shape: every field is optional and no reference
//! checking happens here. Whether an extended or granted role actually
//! exists is decided by the compiler in `authz-engine`.
//!
//! ## Usage
//!
//! ```rust
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
//! assert_eq!(policy.roles["editor"].extends, vec!["viewer"]);
//! assert_eq!(policy.resources["doc1"]["editor"].users, vec!["alice"]);
//! ```

pub mod error;
pub mod model;
pub mod parser;

// Re-export main types for convenience
pub use error::PolicyError;
pub use model::{Policy, RoleDefinition, RoleGrant};
pub use parser::{parse_policy, parse_policy_bytes};
