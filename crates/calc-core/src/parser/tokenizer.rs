//! Expression tokenizer — converts infix text into a token stream
//!
//! Contiguous digit/decimal-point runs become number tokens; the
//! operators and parentheses are single-character tokens; spaces are
//! skipped. Anything else is invalid input.

use crate::error::{CalcError, Result};

/// Token kinds for infix arithmetic expressions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

/// Tokenizer over expression text
pub struct Tokenizer {
    input: Vec<char>,
    position: usize,
}

impl Tokenizer {
    /// Create a new tokenizer for the given expression text
    pub fn new(text: &str) -> Self {
        Tokenizer {
            input: text.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input into a token stream
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                ' ' => {
                    self.advance();
                }
                '0'..='9' | '.' => tokens.push(self.read_number()?),
                '+' => {
                    self.advance();
                    tokens.push(Token::Plus);
                }
                '-' => {
                    self.advance();
                    tokens.push(Token::Minus);
                }
                '*' => {
                    self.advance();
                    tokens.push(Token::Star);
                }
                '/' => {
                    self.advance();
                    tokens.push(Token::Slash);
                }
                '^' => {
                    self.advance();
                    tokens.push(Token::Caret);
                }
                '(' => {
                    self.advance();
                    tokens.push(Token::LParen);
                }
                ')' => {
                    self.advance();
                    tokens.push(Token::RParen);
                }
                _ => return Err(CalcError::InvalidInput),
            }
        }

        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Read a contiguous digit/decimal-point run as one number token
    fn read_number(&mut self) -> Result<Token> {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.input[start..self.position].iter().collect();
        let value: f64 = text.parse().map_err(|_| CalcError::InvalidInput)?;
        Ok(Token::Number(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Tokenizer::new(input).tokenize().unwrap()
    }

    fn tokenize_err(input: &str) -> CalcError {
        Tokenizer::new(input).tokenize().unwrap_err()
    }

    // ── Numbers ────────────────────────────────────────

    #[test]
    fn test_tokenize_integers() {
        assert_eq!(
            tokenize("42 0 999"),
            vec![Token::Number(42.0), Token::Number(0.0), Token::Number(999.0)]
        );
    }

    #[test]
    fn test_tokenize_decimals() {
        assert_eq!(
            tokenize("3.14 0.5"),
            vec![Token::Number(3.14), Token::Number(0.5)]
        );
    }

    #[test]
    fn test_tokenize_leading_decimal_point() {
        assert_eq!(tokenize(".5"), vec![Token::Number(0.5)]);
    }

    #[test]
    fn test_malformed_number() {
        assert_eq!(tokenize_err("1.2.3"), CalcError::InvalidInput);
        assert_eq!(tokenize_err("."), CalcError::InvalidInput);
    }

    // ── Operators & parentheses ────────────────────────

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            tokenize("+ - * / ^ ( )"),
            vec![
                Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::Caret,
                Token::LParen,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_expression() {
        assert_eq!(
            tokenize("(2+3)*4"),
            vec![
                Token::LParen,
                Token::Number(2.0),
                Token::Plus,
                Token::Number(3.0),
                Token::RParen,
                Token::Star,
                Token::Number(4.0),
            ]
        );
    }

    // ── Whitespace ─────────────────────────────────────

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(
            tokenize("  2  +  3  "),
            vec![Token::Number(2.0), Token::Plus, Token::Number(3.0)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), Vec::new());
    }

    // ── Invalid characters ─────────────────────────────

    #[test]
    fn test_unexpected_character() {
        assert_eq!(tokenize_err("2+a"), CalcError::InvalidInput);
        assert_eq!(tokenize_err("@"), CalcError::InvalidInput);
    }
}
