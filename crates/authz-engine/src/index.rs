//! The compiled authorization index
//!
//! The root compiled artifact and the query surface against it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use authz_policy::Policy;

use crate::error::CompileError;
use crate::resources::{compile_resources, ResourceGrants};
use crate::roles::{compile_roles, CompiledRoles};

/// The compiled, queryable authorization artifact.
///
/// An index is produced once per policy load (either freshly compiled or
/// recovered verbatim from a persisted snapshot) and is read-only
/// afterwards. Role inheritance is fully flattened at compile time, so
/// queries are map lookups with no graph traversal.
///
/// Reload discipline is copy-on-reload: a reload produces a brand-new
/// index value and the caller swaps the handle readers use, so in-flight
/// [`authorize`](Self::authorize) calls always see one consistent
/// snapshot. The index itself is never mutated.
///
/// # Examples
///
/// ```
/// use authz_engine::AuthorizationIndex;
/// use authz_policy::parse_policy;
///
/// let policy = parse_policy(r#"
/// roles:
///   viewer:
///     permissions: [read]
/// resources:
///   doc1:
///     viewer:
///       groups: [engineering]
/// "#).unwrap();
///
/// let index = AuthorizationIndex::compile(&policy, "hash").unwrap();
/// assert!(index.authorize("anyone", &["engineering"], "doc1", "read"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationIndex {
    /// Content hash of the source policy bytes this index was compiled
    /// from; used for cache-validity checks, never interpreted here.
    pub source_hash: String,

    /// Role name → the role's fully resolved permission set.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub roles: CompiledRoles,

    /// User name → per-resource permissions.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub users: HashMap<String, ResourceGrants>,

    /// Group name → per-resource permissions.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub groups: HashMap<String, ResourceGrants>,
}

impl AuthorizationIndex {
    /// Compile a policy into a queryable index.
    ///
    /// Runs the full pipeline: role inheritance is resolved first, then
    /// resource rules are projected onto per-identity grants.
    /// Compilation is all-or-nothing; on error no index is produced.
    ///
    /// `source_hash` is the content hash of the raw bytes the policy was
    /// read from; it is stored for later cache-validity comparison.
    ///
    /// # Errors
    ///
    /// [`CompileError::UnknownRole`] for a dangling role reference,
    /// [`CompileError::InheritanceCycle`] for cyclic inheritance.
    pub fn compile(policy: &Policy, source_hash: impl Into<String>) -> Result<Self, CompileError> {
        let roles = compile_roles(&policy.roles)?;
        let grants = compile_resources(&policy.resources, &roles)?;

        Ok(Self {
            source_hash: source_hash.into(),
            roles,
            users: grants.users,
            groups: grants.groups,
        })
    }

    /// Check whether `user`, or at least one of `groups`, holds
    /// `permission` on `resource`.
    ///
    /// The user's own grants are consulted first, then each supplied
    /// group; the first hit wins. Absence of the user, the resource, or
    /// the permission is an ordinary "no", never an error. This is a
    /// pure read: O(1) expected for the user check plus one O(1)
    /// expected lookup per group.
    pub fn authorize<S: AsRef<str>>(
        &self,
        user: &str,
        groups: &[S],
        resource: &str,
        permission: &str,
    ) -> bool {
        if has_permission_on_resource(&self.users, user, resource, permission) {
            return true;
        }
        groups.iter().any(|group| {
            has_permission_on_resource(&self.groups, group.as_ref(), resource, permission)
        })
    }
}

fn has_permission_on_resource(
    grants: &HashMap<String, ResourceGrants>,
    identity: &str,
    resource: &str,
    permission: &str,
) -> bool {
    grants
        .get(identity)
        .and_then(|resources| resources.get(resource))
        .map_or(false, |permissions| permissions.has(permission))
}
