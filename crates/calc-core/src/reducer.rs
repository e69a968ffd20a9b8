//! The input state machine — a pure `(state, action) -> state` reducer
//!
//! Owns the live calculator semantics: digit accumulation, chained
//! binary operators, scientific unary application, parenthesis
//! tracking, history recording, and error latching.
//!
//! Two evaluation modes coexist deliberately. Live chained entry
//! collapses the pending operator pair at every operator press, with
//! no precedence (`2 + 3 *` shows 5). Once parentheses are in play,
//! EQUALS hands the accumulated text to the precedence-aware
//! [`parse_expression`] instead. The divergence is a product decision,
//! not an accident.
//!
//! # Guarantees
//!
//! - **Pure**: [`reduce_at`] reads no clock and performs no I/O; same
//!   state + action + time always produce the same next state
//! - **Total**: every (state, action) pair yields a valid new state;
//!   domain failures latch the error display instead of propagating

use crate::arith::{apply_op, parse_number, Op};
use crate::constants::{ERROR_DISPLAY, MAX_HISTORY_ITEMS};
use crate::error::Result;
use crate::format::format_number;
use crate::parser::parse_expression;
use crate::scientific::{apply_sci_fn, SciFn};
use crate::state::{Action, CalculatorState, EntryMode, HistoryEntry, MathConst, Paren};

/// Apply one action to the state, stamping any new history entry with
/// the wall clock. Delegates to [`reduce_at`].
pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    reduce_at(state, action, wall_clock_ms())
}

/// Apply one action to the state. `now_ms` is only consulted when a
/// history entry is created, so embeddings (and tests) fully control
/// timestamps and ids.
pub fn reduce_at(state: &CalculatorState, action: Action, now_ms: u64) -> CalculatorState {
    match action {
        Action::Digit(d) => digit(state, d),
        Action::Decimal => decimal(state),
        Action::Operator(op) => operator(state, op),
        Action::Equals => equals(state, now_ms),
        Action::Clear => CalculatorState::initial(),
        Action::ClearEntry => clear_entry(state),
        Action::Backspace => backspace(state),
        Action::Scientific(f) => scientific(state, f, now_ms),
        Action::ToggleAngle => toggle_angle(state),
        Action::Constant(c) => constant(state, c),
        Action::Parenthesis(p) => parenthesis(state, p),
        Action::AddHistory(entry) => add_history(state, entry),
        Action::ClearHistory => clear_history(state),
        Action::LoadFromHistory(text) => load_from_history(state, text),
    }
}

fn wall_clock_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// ── Transition helpers ────────────────────────────────────

/// Latch the error display and arm for fresh input. The pending
/// operator pair is left untouched.
fn latch_error(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        display: ERROR_DISPLAY.to_string(),
        error: Some(ERROR_DISPLAY.to_string()),
        entry: EntryMode::AwaitingOperand,
        ..state.clone()
    }
}

/// Latch the error display and also drop the pending operator pair
/// (binary-operation failures abandon the operation)
fn latch_error_clearing_pending(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        previous_value: None,
        operator: None,
        ..latch_error(state)
    }
}

/// Prepend an entry, evicting past the history bound
fn push_history(history: &[HistoryEntry], entry: HistoryEntry) -> Vec<HistoryEntry> {
    let mut next = Vec::with_capacity(history.len() + 1);
    next.push(entry);
    next.extend_from_slice(history);
    next.truncate(MAX_HISTORY_ITEMS);
    next
}

/// Build a history entry; the id combines creation time with the
/// state's monotonic sequence so ids stay unique under a frozen clock
fn history_entry(
    state: &CalculatorState,
    expression: String,
    result: String,
    now_ms: u64,
) -> (HistoryEntry, u64) {
    let seq = state.entry_seq + 1;
    let entry = HistoryEntry {
        id: format!("{}-{}", now_ms, seq),
        expression,
        result,
        timestamp: now_ms,
    };
    (entry, seq)
}

/// Collapse the pending binary pair against the current display
fn collapse_pending(state: &CalculatorState, prev: &str, op: Op) -> Result<f64> {
    let a = parse_number(prev)?;
    let b = parse_number(&state.display)?;
    apply_op(a, b, op)
}

// ── Transitions ───────────────────────────────────────────

fn digit(state: &CalculatorState, d: char) -> CalculatorState {
    if !d.is_ascii_digit() {
        return state.clone();
    }

    if state.is_awaiting_operand() || state.display == "0" {
        return CalculatorState {
            display: d.to_string(),
            full_expression: format!("{}{}", state.full_expression, d),
            entry: EntryMode::Accumulating,
            error: None,
            ..state.clone()
        };
    }

    CalculatorState {
        display: format!("{}{}", state.display, d),
        full_expression: format!("{}{}", state.full_expression, d),
        error: None,
        ..state.clone()
    }
}

fn decimal(state: &CalculatorState) -> CalculatorState {
    // One decimal point per operand
    if state.display.contains('.') {
        return state.clone();
    }

    if state.is_awaiting_operand() {
        return CalculatorState {
            display: "0.".to_string(),
            full_expression: format!("{}0.", state.full_expression),
            entry: EntryMode::Accumulating,
            error: None,
            ..state.clone()
        };
    }

    CalculatorState {
        display: format!("{}.", state.display),
        full_expression: format!("{}.", state.full_expression),
        error: None,
        ..state.clone()
    }
}

fn operator(state: &CalculatorState, op: Op) -> CalculatorState {
    // A pending pair with an entered operand collapses first, so
    // chained entry resolves strictly left to right at each press
    if let (Some(prev), Some(pending)) = (&state.previous_value, state.operator) {
        if !state.is_awaiting_operand() {
            return match collapse_pending(state, prev, pending) {
                Ok(value) => {
                    let formatted = format_number(value);
                    CalculatorState {
                        display: formatted.clone(),
                        expression: format!("{} {}", formatted, op),
                        previous_value: Some(formatted),
                        operator: Some(op),
                        entry: EntryMode::AwaitingOperand,
                        full_expression: format!("{}{}", state.full_expression, op.symbol()),
                        error: None,
                        ..state.clone()
                    }
                }
                Err(_) => latch_error_clearing_pending(state),
            };
        }
    }

    CalculatorState {
        expression: format!("{} {}", state.display, op),
        previous_value: Some(state.display.clone()),
        operator: Some(op),
        entry: EntryMode::AwaitingOperand,
        full_expression: format!("{}{}", state.full_expression, op.symbol()),
        error: None,
        ..state.clone()
    }
}

fn equals(state: &CalculatorState, now_ms: u64) -> CalculatorState {
    // Parenthesized path: full precedence via the expression evaluator
    if state.parenthesis_count != 0 || state.full_expression.contains('(') {
        return match parse_expression(&state.full_expression) {
            Ok(value) if value.is_finite() => {
                let formatted = format_number(value);
                let (entry, seq) = history_entry(
                    state,
                    state.full_expression.clone(),
                    formatted.clone(),
                    now_ms,
                );
                CalculatorState {
                    display: formatted,
                    expression: String::new(),
                    full_expression: String::new(),
                    previous_value: None,
                    operator: None,
                    entry: EntryMode::AwaitingOperand,
                    parenthesis_count: 0,
                    history: push_history(&state.history, entry),
                    error: None,
                    entry_seq: seq,
                    ..state.clone()
                }
            }
            // The accumulated text is kept so the user can inspect it
            _ => latch_error(state),
        };
    }

    // Live path: nothing pending means equals is a no-op
    let (prev, op) = match (&state.previous_value, state.operator) {
        (Some(prev), Some(op)) => (prev.clone(), op),
        _ => return state.clone(),
    };

    match collapse_pending(state, &prev, op) {
        Ok(value) => {
            let formatted = format_number(value);
            let (entry, seq) = history_entry(
                state,
                format!("{} {} {}", prev, op, state.display),
                formatted.clone(),
                now_ms,
            );
            CalculatorState {
                display: formatted,
                expression: String::new(),
                full_expression: String::new(),
                previous_value: None,
                operator: None,
                entry: EntryMode::AwaitingOperand,
                history: push_history(&state.history, entry),
                error: None,
                entry_seq: seq,
                ..state.clone()
            }
        }
        Err(_) => latch_error_clearing_pending(state),
    }
}

fn clear_entry(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        display: "0".to_string(),
        error: None,
        ..state.clone()
    }
}

fn backspace(state: &CalculatorState) -> CalculatorState {
    if state.display == "0" || state.is_awaiting_operand() {
        return state.clone();
    }

    let mut display = state.display.clone();
    display.pop();
    if display.is_empty() {
        display = "0".to_string();
    }

    let mut full_expression = state.full_expression.clone();
    full_expression.pop();

    CalculatorState {
        display,
        full_expression,
        error: None,
        ..state.clone()
    }
}

fn scientific(state: &CalculatorState, f: SciFn, now_ms: u64) -> CalculatorState {
    let value = match parse_number(&state.display) {
        Ok(v) => v,
        Err(_) => return latch_error(state),
    };

    match apply_sci_fn(f, value, state.angle_mode) {
        Ok(result) => {
            let formatted = format_number(result);
            let (entry, seq) = history_entry(
                state,
                format!("{}({})", f.name(), state.display),
                formatted.clone(),
                now_ms,
            );
            CalculatorState {
                display: formatted,
                entry: EntryMode::AwaitingOperand,
                history: push_history(&state.history, entry),
                error: None,
                entry_seq: seq,
                ..state.clone()
            }
        }
        Err(_) => latch_error(state),
    }
}

fn toggle_angle(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        angle_mode: state.angle_mode.toggled(),
        ..state.clone()
    }
}

fn constant(state: &CalculatorState, c: MathConst) -> CalculatorState {
    let formatted = format_number(c.value());

    if state.is_awaiting_operand() || state.display == "0" {
        return CalculatorState {
            display: formatted.clone(),
            full_expression: format!("{}{}", state.full_expression, formatted),
            entry: EntryMode::Accumulating,
            error: None,
            ..state.clone()
        };
    }

    // Replace the in-progress operand and the matching tail of the
    // accumulated text
    let keep = state
        .full_expression
        .len()
        .saturating_sub(state.display.len());
    let mut full_expression = state.full_expression[..keep].to_string();
    full_expression.push_str(&formatted);

    CalculatorState {
        display: formatted,
        full_expression,
        error: None,
        ..state.clone()
    }
}

fn parenthesis(state: &CalculatorState, p: Paren) -> CalculatorState {
    match p {
        Paren::Open => {
            if state.is_awaiting_operand() || state.display == "0" {
                return CalculatorState {
                    display: "0".to_string(),
                    full_expression: format!("{}(", state.full_expression),
                    parenthesis_count: state.parenthesis_count + 1,
                    entry: EntryMode::Accumulating,
                    error: None,
                    ..state.clone()
                };
            }
            CalculatorState {
                full_expression: format!("{}(", state.full_expression),
                parenthesis_count: state.parenthesis_count + 1,
                error: None,
                ..state.clone()
            }
        }
        Paren::Close => {
            // Nothing to close
            if state.parenthesis_count == 0 {
                return state.clone();
            }
            CalculatorState {
                full_expression: format!("{})", state.full_expression),
                parenthesis_count: state.parenthesis_count - 1,
                entry: EntryMode::AwaitingOperand,
                error: None,
                ..state.clone()
            }
        }
    }
}

fn add_history(state: &CalculatorState, entry: HistoryEntry) -> CalculatorState {
    CalculatorState {
        history: push_history(&state.history, entry),
        ..state.clone()
    }
}

fn clear_history(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        history: Vec::new(),
        ..state.clone()
    }
}

fn load_from_history(state: &CalculatorState, text: String) -> CalculatorState {
    CalculatorState {
        display: text,
        entry: EntryMode::AwaitingOperand,
        error: None,
        ..state.clone()
    }
}
