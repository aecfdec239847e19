//! Errors for shared ylang types.

use thiserror::Error;

/// Errors from parsing a dialect name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    /// The name matches no known dialect.
    #[error("unknown dialect '{0}' (expected 'english' or 'yohan')")]
    Unknown(String),
}
