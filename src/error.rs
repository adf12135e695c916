//! Error types for role resolution.

use thiserror::Error;

/// Convenience alias for fallible role operations.
pub type Result<T> = std::result::Result<T, RoleError>;

/// Errors raised while resolving role identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// The supplied identifier is neither a grants-table key nor a declared
    /// role of the role-type.
    #[error("Invalid role `{name}` supplied")]
    InvalidRole {
        /// The identifier as it was supplied.
        name: String,
    },
}
