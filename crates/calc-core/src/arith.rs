//! Basic arithmetic primitives and binary-operator dispatch
//!
//! Every function is total over finite inputs and reports domain
//! failures as typed errors; nothing here panics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// The four live-mode binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// The single-character form used in accumulated expression text
    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Parse an operator from its single-character form
    pub fn from_symbol(ch: char) -> Option<Op> {
        match ch {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Add two numbers
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract b from a
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide a by b; a zero right operand is an error
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Apply a binary operator to two operands.
///
/// Non-finite results (e.g. adding two values near f64::MAX) are
/// reported as `Overflow` rather than leaking into display text.
pub fn apply_op(a: f64, b: f64, op: Op) -> Result<f64> {
    let result = match op {
        Op::Add => add(a, b),
        Op::Sub => subtract(a, b),
        Op::Mul => multiply(a, b),
        Op::Div => divide(a, b)?,
    };
    if !result.is_finite() {
        return Err(CalcError::Overflow);
    }
    Ok(result)
}

/// Parse display text as a number
pub fn parse_number(text: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| CalcError::InvalidInput)
}

/// Whether the text parses as a finite number
pub fn is_valid_number(text: &str) -> bool {
    matches!(parse_number(text), Ok(v) if v.is_finite())
}
