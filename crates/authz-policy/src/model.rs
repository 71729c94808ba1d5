//! Policy document model
//!
//! Plain data describing a declarative access-control policy, exactly as
//! it appears in a policy file. Compilation into a queryable form lives
//! in `authz-engine`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a role is defined in the source policy.
///
/// A role bundles directly granted permissions with a list of roles it
/// inherits from. Both lists are optional in the document; an empty
/// definition is a valid (if useless) role.
///
/// # Examples
///
/// ```
/// use authz_policy::RoleDefinition;
///
/// let editor = RoleDefinition {
///     permissions: vec!["write".into()],
///     extends: vec!["viewer".into()],
/// };
/// assert_eq!(editor.extends.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Permissions granted directly by this role.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,

    /// Roles whose permissions this role inherits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
}

/// The identities that receive a role's permissions on one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    /// User names granted the role on this resource.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,

    /// Group names granted the role on this resource.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

/// A declarative access-control policy.
///
/// Role names are unique keys; a resource maps each granted role to the
/// users and groups that receive it. References between the two halves
/// (a rule naming a role, a role extending another) are not validated
/// here; the compiler rejects dangling references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Role name → definition.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub roles: HashMap<String, RoleDefinition>,

    /// Resource name → role name → identities granted that role.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub resources: HashMap<String, HashMap<String, RoleGrant>>,
}
