//! Expression parser/evaluator — precedence-aware infix arithmetic
//!
//! Used when a parenthesized or multi-term expression has been built
//! up; plain chained entry never goes through here (the reducer
//! collapses each pending operator pair immediately instead).
//!
//! Guarantees:
//! - Deterministic: same input always produces the same result
//! - Total: every failure is a typed error, never a panic

pub mod tokenizer;

mod eval;

use crate::error::{CalcError, Result};
use eval::{validate_parentheses, Evaluator};
use tokenizer::Tokenizer;

/// Parse and evaluate an infix arithmetic expression.
///
/// Supports `+ - * / ^` with standard precedence (`*`/`/` before
/// `+`/`-`; `^` highest and right-associative) and parentheses for
/// grouping.
///
/// # Errors
/// - `ParenthesisMismatch` — depth goes negative or ends non-zero
/// - `InvalidInput` — blank input, malformed number, operator missing
///   an operand, or trailing tokens
/// - `DivisionByZero` — `/` evaluated with a zero right operand
/// - `Overflow` — `^` produced a non-finite result
///
/// # Example
/// ```
/// use calc_core::parser::parse_expression;
///
/// assert_eq!(parse_expression("2+3*4").unwrap(), 14.0);
/// assert_eq!(parse_expression("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(parse_expression("2^3^2").unwrap(), 512.0);
/// ```
pub fn parse_expression(text: &str) -> Result<f64> {
    if text.trim().is_empty() {
        return Err(CalcError::InvalidInput);
    }

    let tokens = Tokenizer::new(text).tokenize()?;
    if tokens.is_empty() {
        return Err(CalcError::InvalidInput);
    }

    validate_parentheses(&tokens)?;
    Evaluator::new(&tokens).evaluate()
}
