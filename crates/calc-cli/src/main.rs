use std::io::{self, BufRead};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use calc_core::{
    format_number, parse_expression, reduce, Action, CalcError, CalculatorState, MathConst, Op,
    Paren, SciFn,
};

/// calc — scientific calculator CLI
///
/// Evaluate infix expressions or drive the interactive calculator.
#[derive(Parser)]
#[command(name = "calc", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression with precedence and parentheses
    Eval {
        /// Expression text, e.g. "(2+3)*4"
        expression: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive line-driven calculator session
    Repl,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Eval { expression, json } => cmd_eval(&expression, json),
        Commands::Repl => cmd_repl(),
    };

    process::exit(exit_code);
}

// ── eval ──────────────────────────────────────────────────

fn cmd_eval(expression: &str, json: bool) -> i32 {
    match parse_expression(expression) {
        Ok(value) if value.is_finite() => {
            let formatted = format_number(value);
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "expression": expression, "result": formatted })
                );
            } else {
                println!("{}", formatted);
            }
            0
        }
        Ok(_) => {
            report_error(expression, CalcError::Overflow, json);
            1
        }
        Err(e) => {
            report_error(expression, e, json);
            1
        }
    }
}

fn report_error(expression: &str, error: CalcError, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({ "expression": expression, "error": error.to_string() })
        );
    } else {
        eprintln!("{} {}", "error:".red().bold(), error);
    }
}

// ── repl ──────────────────────────────────────────────────

fn cmd_repl() -> i32 {
    let stdin = io::stdin();
    let mut state = CalculatorState::initial();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }
        if trimmed == "history" {
            print_history(&state);
            continue;
        }

        for action in parse_input(trimmed) {
            state = reduce(&state, action);
        }
        print_state(&state);
    }

    0
}

/// Translate one input line into calculator actions.
///
/// Words name scientific functions, constants and controls; anything
/// else is dispatched character by character (digits, operators,
/// parentheses, `.` and `=`).
fn parse_input(line: &str) -> Vec<Action> {
    let mut actions = Vec::new();

    for word in line.split_whitespace() {
        if let Some(action) = word_action(word) {
            actions.push(action);
            continue;
        }
        for ch in word.chars() {
            match char_action(ch) {
                Some(action) => actions.push(action),
                None => {
                    eprintln!("{} ignoring '{}'", "warning:".yellow(), ch);
                }
            }
        }
    }

    actions
}

fn word_action(word: &str) -> Option<Action> {
    match word {
        "sin" => Some(Action::Scientific(SciFn::Sin)),
        "cos" => Some(Action::Scientific(SciFn::Cos)),
        "tan" => Some(Action::Scientific(SciFn::Tan)),
        "ln" => Some(Action::Scientific(SciFn::Ln)),
        "log" => Some(Action::Scientific(SciFn::Log)),
        "sqrt" => Some(Action::Scientific(SciFn::Sqrt)),
        "square" => Some(Action::Scientific(SciFn::Square)),
        "recip" => Some(Action::Scientific(SciFn::Reciprocal)),
        "pi" => Some(Action::Constant(MathConst::Pi)),
        "e" => Some(Action::Constant(MathConst::E)),
        "mode" => Some(Action::ToggleAngle),
        "clear" => Some(Action::Clear),
        "ce" => Some(Action::ClearEntry),
        "back" => Some(Action::Backspace),
        _ => None,
    }
}

fn char_action(ch: char) -> Option<Action> {
    if ch.is_ascii_digit() {
        return Some(Action::Digit(ch));
    }
    if let Some(op) = Op::from_symbol(ch) {
        return Some(Action::Operator(op));
    }
    match ch {
        '.' => Some(Action::Decimal),
        '=' => Some(Action::Equals),
        '(' => Some(Action::Parenthesis(Paren::Open)),
        ')' => Some(Action::Parenthesis(Paren::Close)),
        _ => None,
    }
}

fn print_state(state: &CalculatorState) {
    if state.error.is_some() {
        println!("{}", state.display.red());
    } else if state.expression.is_empty() {
        println!("{}", state.display);
    } else {
        println!("{}  {}", state.expression.dimmed(), state.display);
    }
}

fn print_history(state: &CalculatorState) {
    if state.history.is_empty() {
        println!("(no history)");
        return;
    }
    for entry in &state.history {
        println!("{} = {}", entry.expression, entry.result);
    }
}
