//! Calc Core — scientific calculator engine
//!
//! A pure, deterministic calculator core: an input state machine
//! (reducer), a precedence-aware expression evaluator, scientific
//! numeric primitives, and a bounded-precision display formatter.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ reduce(state, action) ──→ CalculatorState'
//!                    │
//!                    ├─→ arith / scientific   (numeric primitives)
//!                    ├─→ parser               (precedence-aware evaluation)
//!                    └─→ format               (numeric → display text)
//! ```
//!
//! # Guarantees
//!
//! - **Pure**: every transition is a value-to-value function;
//!   [`reduce_at`] takes the clock explicitly and reads nothing else
//! - **Total**: every (state, action) pair yields a valid new state;
//!   domain failures latch the error display, nothing panics
//! - **Bounded**: history never exceeds 50 entries
//!
//! Two evaluation modes coexist deliberately: live chained entry
//! collapses each pending operator pair immediately with no
//! precedence, while expressions containing parentheses go through
//! the precedence-aware [`parse_expression`]. `2+3*4` typed live
//! yields 20; the same text parsed yields 14.
//!
//! # Example
//!
//! ```
//! use calc_core::{reduce_at, Action, CalculatorState, Op};
//!
//! let state = [
//!     Action::Digit('5'),
//!     Action::Operator(Op::Add),
//!     Action::Digit('3'),
//!     Action::Equals,
//! ]
//! .into_iter()
//! .fold(CalculatorState::initial(), |s, a| reduce_at(&s, a, 0));
//!
//! assert_eq!(state.display, "8");
//! assert_eq!(state.history[0].expression, "5 + 3");
//! ```

pub mod arith;
pub mod constants;
pub mod error;
pub mod format;
pub mod parser;
pub mod reducer;
pub mod scientific;
pub mod state;

pub use arith::Op;
pub use error::{CalcError, Result};
pub use format::format_number;
pub use parser::parse_expression;
pub use reducer::{reduce, reduce_at};
pub use scientific::{AngleMode, SciFn};
pub use state::{Action, CalculatorState, EntryMode, HistoryEntry, MathConst, Paren};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_round_trip() {
        // Exercise the re-exported surface end to end: type an
        // expression with parentheses, evaluate, recall from history.
        let script = [
            Action::Parenthesis(Paren::Open),
            Action::Digit('2'),
            Action::Operator(Op::Add),
            Action::Digit('3'),
            Action::Parenthesis(Paren::Close),
            Action::Operator(Op::Mul),
            Action::Digit('4'),
            Action::Equals,
        ];
        let state = script
            .into_iter()
            .fold(CalculatorState::initial(), |s, a| reduce_at(&s, a, 7));

        assert_eq!(state.display, "20");

        let recalled = reduce_at(
            &state,
            Action::LoadFromHistory(state.history[0].result.clone()),
            8,
        );
        assert_eq!(recalled.display, "20");
        assert!(recalled.is_awaiting_operand());
    }

    #[test]
    fn test_error_collapses_to_display_sentinel() {
        // Typed kinds exist for callers, but the display shows the
        // single sentinel for every one of them.
        assert_eq!(format_number(f64::NAN), constants::ERROR_DISPLAY);
        let state = reduce_at(
            &CalculatorState::initial(),
            Action::Scientific(SciFn::Ln),
            0,
        );
        assert_eq!(state.display, constants::ERROR_DISPLAY);
    }
}
