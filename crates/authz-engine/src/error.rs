//! Error types for policy compilation
//!
//! Compilation is all-or-nothing: any of these errors aborts the whole
//! compile and no partial index is returned. Query-time absence (an
//! unknown user, resource, or permission) is never an error.

use std::fmt;
use thiserror::Error;

/// The chain of role references leading to a compilation error.
///
/// For an inheritance error this is the ordered list of role names from
/// the traversal root to the offending reference; for a resource rule it
/// is `resource -> role`. Rendered with `->` separators for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePath(Vec<String>);

impl ReferencePath {
    /// Start a path at a traversal root.
    pub fn new(root: impl Into<String>) -> Self {
        Self(vec![root.into()])
    }

    /// A new path with `segment` appended; the receiver is unchanged.
    ///
    /// Traversal keeps one path value per recursive call, so extension
    /// copies rather than mutates.
    pub fn with(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// The path's segments, in reference order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ReferencePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

/// Policy compilation error types.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A reference via `extends` or a resource rule names a role absent
    /// from the policy.
    #[error("role \"{role}\" is not defined (referenced via {path})")]
    UnknownRole {
        /// The missing role name.
        role: String,
        /// The reference chain that reached the missing role.
        path: ReferencePath,
    },

    /// The role inheritance graph revisited a role already on the
    /// current traversal path.
    #[error("role inheritance cycle: {path}")]
    InheritanceCycle {
        /// The full traversal path, ending at the revisited role.
        path: ReferencePath,
    },
}
