//! Precedence-tier evaluator over the token stream
//!
//! Grammar, lowest tier first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := primary ('^' factor)?        // right-associative
//! primary    := Number | '(' expression ')'
//! ```
//!
//! Evaluation happens while parsing; no AST is materialized. There is
//! no unary minus: a `-` without a left operand is invalid input.

use super::tokenizer::Token;
use crate::error::{CalcError, Result};
use crate::scientific::power;

/// Validate parenthesis balance with a running depth counter
pub(super) fn validate_parentheses(tokens: &[Token]) -> Result<()> {
    let mut depth: i32 = 0;

    for token in tokens {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth < 0 {
                    return Err(CalcError::ParenthesisMismatch);
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(CalcError::ParenthesisMismatch);
    }
    Ok(())
}

/// Cursor-based evaluator over a token slice
pub(super) struct Evaluator<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Evaluator<'a> {
    pub(super) fn new(tokens: &'a [Token]) -> Self {
        Evaluator {
            tokens,
            position: 0,
        }
    }

    /// Evaluate the whole stream; trailing tokens are invalid input
    pub(super) fn evaluate(&mut self) -> Result<f64> {
        let value = self.expression()?;
        if self.position != self.tokens.len() {
            return Err(CalcError::InvalidInput);
        }
        Ok(value)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<f64> {
        let mut value = self.term()?;

        while let Some(token) = self.peek() {
            match token {
                Token::Plus => {
                    self.advance();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }

        Ok(value)
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.factor()?;

        while let Some(token) = self.peek() {
            match token {
                Token::Star => {
                    self.advance();
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.advance();
                    let rhs = self.factor()?;
                    if rhs == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value /= rhs;
                }
                _ => break,
            }
        }

        Ok(value)
    }

    fn factor(&mut self) -> Result<f64> {
        let base = self.primary()?;

        if let Some(Token::Caret) = self.peek() {
            self.advance();
            // Recursing into factor (not primary) gives right
            // associativity: 2^3^2 == 2^(3^2) == 512
            let exponent = self.factor()?;
            return power(base, exponent);
        }

        Ok(base)
    }

    fn primary(&mut self) -> Result<f64> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expression()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(CalcError::ParenthesisMismatch),
                }
            }
            _ => Err(CalcError::InvalidInput),
        }
    }
}
