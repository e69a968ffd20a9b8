//! Calculator state, history entries, and the action vocabulary
//!
//! `CalculatorState` is an immutable value: the reducer never mutates
//! it, it builds a replacement. All state types derive
//! Debug, Clone, PartialEq, Serialize, Deserialize so embeddings can
//! snapshot, compare, and persist them.

use serde::{Deserialize, Serialize};

use crate::arith::Op;
use crate::scientific::{AngleMode, SciFn};

/// Digit-entry sub-state: does the next digit start a fresh operand?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryMode {
    /// Digits append to the current operand
    Accumulating,
    /// The next digit replaces the display (armed after an operator,
    /// equals, scientific result, history load, or error)
    AwaitingOperand,
}

/// Math constants insertable as operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathConst {
    Pi,
    E,
}

impl MathConst {
    pub fn value(&self) -> f64 {
        match self {
            MathConst::Pi => std::f64::consts::PI,
            MathConst::E => std::f64::consts::E,
        }
    }
}

/// Parenthesis side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paren {
    Open,
    Close,
}

/// One completed calculation, newest kept first in the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique id derived from creation time and sequence
    pub id: String,
    /// The input trace, e.g. `"5 + 3"` or `"sqrt(9)"`
    pub expression: String,
    /// The formatted result text
    pub result: String,
    /// Creation time in milliseconds
    pub timestamp: u64,
}

/// The closed set of actions the state machine consumes.
///
/// UI clicks and keyboard events are translated into these upstream;
/// the core only ever sees discrete actions, one at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// A digit key, `'0'..='9'`
    Digit(char),
    Decimal,
    Operator(Op),
    Equals,
    /// Reset everything, history included
    Clear,
    /// Reset only the current entry
    ClearEntry,
    Backspace,
    Scientific(SciFn),
    ToggleAngle,
    Constant(MathConst),
    Parenthesis(Paren),
    /// Push an externally built entry (e.g. a persistence loader)
    AddHistory(HistoryEntry),
    ClearHistory,
    /// Recall a prior result onto the display
    LoadFromHistory(String),
}

/// Complete calculator state, replaced wholesale on each transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// The visible operand or result; a numeric literal, the error
    /// sentinel, or `"0"`. Never empty.
    pub display: String,
    /// Trace of the last committed operator step, e.g. `"5 +"`
    pub expression: String,
    /// Raw accumulated input, used when parentheses are in play
    pub full_expression: String,
    /// Pending left operand, already formatted
    pub previous_value: Option<String>,
    /// Pending binary operator; `Some` iff `previous_value` is `Some`
    pub operator: Option<Op>,
    /// Whether the next digit starts a fresh operand
    pub entry: EntryMode,
    /// Angle interpretation for trig functions
    pub angle_mode: AngleMode,
    /// Unmatched `(` count in `full_expression`
    pub parenthesis_count: u32,
    /// Prior results, newest first, at most 50
    pub history: Vec<HistoryEntry>,
    /// `Some("Error")` exactly when the last operation failed
    pub error: Option<String>,
    /// Monotonic counter folded into history entry ids
    pub entry_seq: u64,
}

impl CalculatorState {
    /// The documented initial state: display `"0"`, DEG mode, empty
    /// history, nothing pending
    pub fn initial() -> Self {
        CalculatorState {
            display: "0".to_string(),
            expression: String::new(),
            full_expression: String::new(),
            previous_value: None,
            operator: None,
            entry: EntryMode::Accumulating,
            angle_mode: AngleMode::Deg,
            parenthesis_count: 0,
            history: Vec::new(),
            error: None,
            entry_seq: 0,
        }
    }

    /// True when the next digit starts a fresh operand
    pub fn is_awaiting_operand(&self) -> bool {
        self.entry == EntryMode::AwaitingOperand
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}
