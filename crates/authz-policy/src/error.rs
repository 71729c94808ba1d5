//! Error types for policy reading

use thiserror::Error;

/// Errors produced while parsing a policy document.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The document is not valid YAML or does not match the policy shape.
    #[error("malformed policy document: {0}")]
    Malformed(#[from] serde_yaml::Error),
}
