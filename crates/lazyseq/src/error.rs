use thiserror::Error;

use crate::value::ValueKind;

/// Construction-time failures. A producer that cannot be built never
/// exists, so every constructed producer upholds its invariants.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("expected a value coercible to an integer, got {found}")]
    NotCoercible { found: ValueKind },

    #[error("cycle input must be text, a list, or a frozen list, got {found}")]
    UnsupportedKind { found: ValueKind },

    #[error("cycle input must be non-empty")]
    EmptyInput,
}

/// Call-time failures of bounded materialization.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("count must be non-negative, got {0}")]
    Negative(i64),
}
