//! Policy document parsing

use crate::error::PolicyError;
use crate::model::Policy;

/// Parse a policy from YAML text.
///
/// Only the document shape is checked here; dangling role references are
/// reported by the compiler, not the parser.
///
/// # Examples
///
/// ```
/// use authz_policy::parse_policy;
///
/// let policy = parse_policy("roles:\n  viewer:\n    permissions: [read]\n").unwrap();
/// assert!(policy.roles.contains_key("viewer"));
/// ```
pub fn parse_policy(yaml: &str) -> Result<Policy, PolicyError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parse a policy from raw bytes, as read from a policy file.
///
/// Callers that also content-hash the file should hash the same bytes
/// they pass here.
pub fn parse_policy_bytes(bytes: &[u8]) -> Result<Policy, PolicyError> {
    Ok(serde_yaml::from_slice(bytes)?)
}
