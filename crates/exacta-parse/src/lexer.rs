//! Single pass lexer for polynomial literals.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{ParseError, Result};
use crate::token::{Token, TokenKind};

/// Turns a polynomial literal into tokens.
///
/// Whitespace separates tokens and is otherwise ignored. An `x` directly
/// after a number gets an implicit [`TokenKind::Mul`] in front of it.
pub struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            tokens: Vec::new(),
        }
    }

    /// Consumes the lexer, returning every token of the input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyInput`] for blank input and
    /// [`ParseError::InvalidCharacter`] for anything outside the alphabet.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        while let Some((offset, ch)) = self.chars.next() {
            let kind = match ch {
                c if c.is_whitespace() => continue,
                c if c.is_ascii_digit() => self.number(c),
                'x' => {
                    if matches!(self.tokens.last(), Some(Token { kind: TokenKind::Num(_), .. })) {
                        self.tokens.push(Token::new(TokenKind::Mul, offset));
                    }
                    TokenKind::X
                }
                '+' => TokenKind::Add,
                '-' => TokenKind::Sub,
                '*' => TokenKind::Mul,
                '/' => TokenKind::Div,
                '^' => TokenKind::Pow,
                ch => return Err(ParseError::InvalidCharacter { ch, offset }),
            };
            self.tokens.push(Token::new(kind, offset));
        }

        if self.tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Ok(self.tokens)
    }

    fn number(&mut self, first: char) -> TokenKind {
        let mut digits = String::from(first);
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.chars.next();
        }
        TokenKind::Num(digits)
    }
}

/// Tokenizes `input`.
///
/// # Errors
///
/// See [`Lexer::tokenize`].
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn num(s: &str) -> TokenKind {
        TokenKind::Num(s.to_owned())
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(kinds("3x"), vec![num("3"), TokenKind::Mul, TokenKind::X]);
        assert_eq!(kinds("3 x"), vec![num("3"), TokenKind::Mul, TokenKind::X]);
        assert_eq!(kinds("3*x"), vec![num("3"), TokenKind::Mul, TokenKind::X]);
        assert_eq!(kinds("x"), vec![TokenKind::X]);
    }

    #[test]
    fn test_full_literal() {
        assert_eq!(
            kinds("x^3+2/5x^2-3x+4"),
            vec![
                TokenKind::X,
                TokenKind::Pow,
                num("3"),
                TokenKind::Add,
                num("2"),
                TokenKind::Div,
                num("5"),
                TokenKind::Mul,
                TokenKind::X,
                TokenKind::Pow,
                num("2"),
                TokenKind::Sub,
                num("3"),
                TokenKind::Mul,
                TokenKind::X,
                TokenKind::Add,
                num("4"),
            ]
        );
    }

    #[test]
    fn test_whitespace_splits_numbers() {
        assert_eq!(kinds(" 12 34 "), vec![num("12"), num("34")]);
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize("12 + x").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 3, 5]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(tokenize(""), Err(ParseError::EmptyInput));
        assert_eq!(tokenize("   "), Err(ParseError::EmptyInput));
        assert_eq!(
            tokenize("2y"),
            Err(ParseError::InvalidCharacter { ch: 'y', offset: 1 })
        );
        assert_eq!(
            tokenize("1.5"),
            Err(ParseError::InvalidCharacter { ch: '.', offset: 1 })
        );
    }
}
