//! Permission sets
//!
//! The algebraic substrate for compiled grants: an unordered collection
//! of permission-name strings with set-union semantics.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of permission names.
///
/// Permissions are opaque string tokens (`"read"`, `"deploy"`).
/// Duplicates collapse and iteration order carries no meaning. Sets are
/// mutated while a policy is being compiled and treated as read-only once
/// attached to a compiled role or grant; an independent deep copy is a
/// plain [`Clone`].
///
/// # Examples
///
/// ```
/// use authz_engine::PermissionSet;
///
/// let mut set = PermissionSet::from_names(["read"]);
/// set.add("write");
///
/// assert!(set.has("read"));
/// assert!(set.has("write"));
/// assert!(!set.has("delete"));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    permissions: HashSet<String>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self {
            permissions: HashSet::new(),
        }
    }

    /// Build a set from an initial list of permission names.
    ///
    /// Duplicates in the input collapse silently.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permissions: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether the set contains a permission.
    pub fn has(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Add a single permission to the set.
    pub fn add(&mut self, permission: impl Into<String>) {
        self.permissions.insert(permission.into());
    }

    /// Union `other` into this set.
    ///
    /// Idempotent and order-independent: merging the same set twice, or
    /// merging sets in a different order, yields the same result.
    pub fn merge(&mut self, other: &PermissionSet) {
        for permission in &other.permissions {
            self.permissions.insert(permission.clone());
        }
    }

    /// Iterate over the permission names, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_names(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_has() {
        let mut set = PermissionSet::new();
        assert!(set.is_empty());

        set.add("read");
        assert!(set.has("read"));
        assert!(!set.has("write"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = PermissionSet::from_names(["read", "read", "write"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_merge() {
        let mut set = PermissionSet::from_names(["read"]);
        let other = PermissionSet::from_names(["read", "write"]);

        set.merge(&other);
        assert_eq!(set.len(), 2);
        assert!(set.has("read"));
        assert!(set.has("write"));

        // merging again changes nothing
        set.merge(&other);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = PermissionSet::from_names(["read", "write"]);
        let b = PermissionSet::from_names(["write", "delete"]);

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = PermissionSet::from_names(["read"]);
        let mut copy = original.clone();
        copy.add("write");

        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
