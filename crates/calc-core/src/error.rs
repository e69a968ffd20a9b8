//! Error types for the calculator core
//!
//! All fallible operations return `Result<T, CalcError>`.
//! The eight kinds cover every domain failure the calculator can
//! produce; the presentation layer collapses all of them to a single
//! display sentinel, so callers must not branch on the rendered text.

use thiserror::Error;

/// Calculator error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero right-hand operand
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative value
    #[error("square root of a negative number")]
    NegativeSqrt,

    /// Tangent at 90°/270° (π/2 + kπ)
    #[error("tangent undefined at this angle")]
    UndefinedTangent,

    /// Logarithm of zero or a negative value
    #[error("logarithm of a non-positive number")]
    NonPositiveLogarithm,

    /// Reciprocal of zero
    #[error("reciprocal of zero")]
    ZeroReciprocal,

    /// Parenthesis depth went negative or ended non-zero
    #[error("mismatched parentheses")]
    ParenthesisMismatch,

    /// Blank input, malformed number, or operator missing an operand
    #[error("invalid input")]
    InvalidInput,

    /// Result outside the finite range of f64
    #[error("overflow")]
    Overflow,
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;
