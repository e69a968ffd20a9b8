//! Scientific numeric primitives
//!
//! Trig functions snap results within 1e-10 of the exact values
//! {-1, -0.5, 0, 0.5, 1}, compensating floating-point noise at the
//! common pedagogical angles (e.g. sin 30°). Tangent rejects its
//! singularities before evaluating. Logarithms, roots and reciprocals
//! report their domain failures as typed errors; nothing panics.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::DEG_TO_RAD;
use crate::error::{CalcError, Result};

/// Angle interpretation for trigonometric functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    Deg,
    Rad,
}

impl AngleMode {
    /// Flip DEG <-> RAD
    pub fn toggled(&self) -> AngleMode {
        match self {
            AngleMode::Deg => AngleMode::Rad,
            AngleMode::Rad => AngleMode::Deg,
        }
    }
}

/// Unary scientific functions the state machine can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SciFn {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Sqrt,
    Square,
    Reciprocal,
}

impl SciFn {
    /// The name used in history traces, e.g. `sqrt(9)`
    pub fn name(&self) -> &'static str {
        match self {
            SciFn::Sin => "sin",
            SciFn::Cos => "cos",
            SciFn::Tan => "tan",
            SciFn::Ln => "ln",
            SciFn::Log => "log",
            SciFn::Sqrt => "sqrt",
            SciFn::Square => "square",
            SciFn::Reciprocal => "reciprocal",
        }
    }
}

/// Convert degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

fn to_radians(value: f64, mode: AngleMode) -> f64 {
    match mode {
        AngleMode::Deg => degrees_to_radians(value),
        AngleMode::Rad => value,
    }
}

/// Snap a result within 1e-10 of one of the targets to the exact value
fn snap(result: f64, targets: &[f64]) -> f64 {
    for &target in targets {
        if (result - target).abs() < 1e-10 {
            return target;
        }
    }
    result
}

/// Sine of the value under the given angle mode
pub fn sin(value: f64, mode: AngleMode) -> f64 {
    snap(to_radians(value, mode).sin(), &[0.0, 1.0, -1.0, 0.5, -0.5])
}

/// Cosine of the value under the given angle mode
pub fn cos(value: f64, mode: AngleMode) -> f64 {
    snap(to_radians(value, mode).cos(), &[0.0, 1.0, -1.0, 0.5, -0.5])
}

/// Tangent of the value under the given angle mode.
///
/// The angle is normalized into [0, 360) (DEG) or [0, π) (RAD) and
/// rejected when it lands within 1e-10 of the 90°/270° (π/2)
/// singularity.
pub fn tan(value: f64, mode: AngleMode) -> Result<f64> {
    let radians = to_radians(value, mode);

    match mode {
        AngleMode::Deg => {
            let normalized = ((value % 360.0) + 360.0) % 360.0;
            if (normalized - 90.0).abs() < 1e-10 || (normalized - 270.0).abs() < 1e-10 {
                return Err(CalcError::UndefinedTangent);
            }
        }
        AngleMode::Rad => {
            let normalized = ((radians % PI) + PI) % PI;
            if (normalized - PI / 2.0).abs() < 1e-10 {
                return Err(CalcError::UndefinedTangent);
            }
        }
    }

    Ok(snap(radians.tan(), &[0.0, 1.0, -1.0]))
}

/// Natural logarithm; zero and negative inputs are errors
pub fn ln(value: f64) -> Result<f64> {
    if value <= 0.0 {
        return Err(CalcError::NonPositiveLogarithm);
    }
    Ok(value.ln())
}

/// Base-10 logarithm; zero and negative inputs are errors
pub fn log10(value: f64) -> Result<f64> {
    if value <= 0.0 {
        return Err(CalcError::NonPositiveLogarithm);
    }
    Ok(value.log10())
}

/// Non-negative square root; negative inputs are errors
pub fn sqrt(value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(CalcError::NegativeSqrt);
    }
    Ok(value.sqrt())
}

/// Square (x²)
pub fn square(value: f64) -> f64 {
    value * value
}

/// Reciprocal (1/x); zero is an error
pub fn reciprocal(value: f64) -> Result<f64> {
    if value == 0.0 {
        return Err(CalcError::ZeroReciprocal);
    }
    Ok(1.0 / value)
}

/// Power (base^exponent); non-finite results are overflow errors
pub fn power(base: f64, exponent: f64) -> Result<f64> {
    let result = base.powf(exponent);
    if !result.is_finite() {
        return Err(CalcError::Overflow);
    }
    Ok(result)
}

/// Apply a named unary function under the given angle mode.
///
/// Non-finite results from the total functions (square of a huge
/// value) are reported as `Overflow`.
pub fn apply_sci_fn(f: SciFn, value: f64, mode: AngleMode) -> Result<f64> {
    let result = match f {
        SciFn::Sin => sin(value, mode),
        SciFn::Cos => cos(value, mode),
        SciFn::Tan => tan(value, mode)?,
        SciFn::Ln => ln(value)?,
        SciFn::Log => log10(value)?,
        SciFn::Sqrt => sqrt(value)?,
        SciFn::Square => square(value),
        SciFn::Reciprocal => reciprocal(value)?,
    };
    if !result.is_finite() {
        return Err(CalcError::Overflow);
    }
    Ok(result)
}
