//! Resource grant compilation
//!
//! Projects compiled role permission sets onto concrete per-identity,
//! per-resource grants for users and groups.

use std::collections::HashMap;

use authz_policy::RoleGrant;

use crate::error::{CompileError, ReferencePath};
use crate::roles::CompiledRoles;
use crate::set::PermissionSet;

/// Permissions an identity holds, keyed by resource name.
pub type ResourceGrants = HashMap<String, PermissionSet>;

/// The user and group grant maps produced from a policy's resource rules.
///
/// An identity that receives no grants has no entry at all; the query
/// path treats that absence exactly like an empty permission set.
#[derive(Debug, Default)]
pub struct CompiledGrants {
    /// User name → per-resource permissions.
    pub users: HashMap<String, ResourceGrants>,

    /// Group name → per-resource permissions.
    pub groups: HashMap<String, ResourceGrants>,
}

/// Project resource rules onto per-identity permission grants.
///
/// For every role granted on a resource, the role's compiled permission
/// set is unioned into each named user's and group's set for that
/// resource. An identity granted overlapping roles through several rules
/// accumulates monotonically; union is idempotent, so nothing is double
/// counted.
///
/// # Errors
///
/// [`CompileError::UnknownRole`] if a rule grants a role that was never
/// defined; the reference chain is `resource -> role`.
pub fn compile_resources(
    resources: &HashMap<String, HashMap<String, RoleGrant>>,
    roles: &CompiledRoles,
) -> Result<CompiledGrants, CompileError> {
    let mut grants = CompiledGrants::default();

    for (resource, rules) in resources {
        for (role, identities) in rules {
            let permissions =
                roles
                    .get(role.as_str())
                    .ok_or_else(|| CompileError::UnknownRole {
                        role: role.clone(),
                        path: ReferencePath::new(resource).with(role),
                    })?;

            for user in &identities.users {
                grant(&mut grants.users, user, resource, permissions);
            }
            for group in &identities.groups {
                grant(&mut grants.groups, group, resource, permissions);
            }
        }
    }

    Ok(grants)
}

fn grant(
    map: &mut HashMap<String, ResourceGrants>,
    identity: &str,
    resource: &str,
    permissions: &PermissionSet,
) {
    map.entry(identity.to_string())
        .or_default()
        .entry(resource.to_string())
        .or_default()
        .merge(permissions);
}
