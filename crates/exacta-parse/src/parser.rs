//! Left-to-right parser from tokens to monoms.
//!
//! Grammar, one monom per term:
//!
//! ```text
//! poly  := monom (('+' | '-') monom)*
//! monom := ('+' | '-')? coeff ('*' 'x' power?)?
//!        | ('+' | '-')? 'x' power?
//! coeff := Num ('/' Num)?
//! power := '^' Num
//! ```

use crate::error::{ParseError, Result};
use crate::monom::Monom;
use crate::token::{Token, TokenKind};

/// Parser state: the token stream and a cursor into it.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a parser over `tokens`.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses every monom of the token stream.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedEnd`] when a term is cut short and
    /// [`ParseError::Expected`] for a token out of place.
    pub fn parse(mut self) -> Result<Vec<Monom>> {
        let mut monoms = Vec::new();

        if self.peek().is_none() {
            return Err(ParseError::UnexpectedEnd { expected: "a term" });
        }

        while self.peek().is_some() {
            let negative = if self.eat(&TokenKind::Sub) {
                true
            } else if self.eat(&TokenKind::Add) || monoms.is_empty() {
                false
            } else {
                return Err(self.unexpected("`+` or `-`"));
            };
            monoms.push(self.monom(negative)?);
        }

        Ok(monoms)
    }

    fn monom(&mut self, negative: bool) -> Result<Monom> {
        let starts_with_number = matches!(
            self.peek(),
            Some(Token {
                kind: TokenKind::Num(_),
                ..
            })
        );

        let (numerator, denominator) = if starts_with_number {
            let numerator = self.number("a coefficient")?;
            let denominator = if self.eat(&TokenKind::Div) {
                self.number("a denominator")?
            } else {
                String::from("1")
            };
            if self.eat(&TokenKind::Mul) && !self.at(&TokenKind::X) {
                return Err(self.unexpected("`x`"));
            }
            (numerator, denominator)
        } else if self.at(&TokenKind::X) {
            (String::from("1"), String::from("1"))
        } else {
            return Err(self.unexpected("a coefficient or `x`"));
        };

        let degree = if self.eat(&TokenKind::X) {
            if self.eat(&TokenKind::Pow) {
                self.number("an exponent")?
            } else {
                String::from("1")
            }
        } else {
            String::from("0")
        };

        Ok(Monom {
            negative,
            numerator,
            denominator,
            degree,
        })
    }

    fn number(&mut self, expected: &'static str) -> Result<String> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Num(digits),
                ..
            }) => {
                let digits = digits.clone();
                self.pos += 1;
                Ok(digits)
            }
            Some(_) => Err(self.unexpected(expected)),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|t| &t.kind == kind)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        let matched = self.at(kind);
        if matched {
            self.pos += 1;
        }
        matched
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::Expected {
                expected,
                found: token.kind.to_string(),
                offset: token.offset,
            },
            None => ParseError::UnexpectedEnd { expected },
        }
    }
}

/// Parses a token stream into monoms.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Monom>> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn monoms(input: &str) -> Result<Vec<Monom>> {
        parse(tokenize(input)?)
    }

    fn m(negative: bool, numerator: &str, denominator: &str, degree: &str) -> Monom {
        Monom {
            negative,
            numerator: numerator.to_owned(),
            denominator: denominator.to_owned(),
            degree: degree.to_owned(),
        }
    }

    #[test]
    fn test_single_terms() {
        assert_eq!(monoms("7").unwrap(), vec![m(false, "7", "1", "0")]);
        assert_eq!(monoms("x").unwrap(), vec![m(false, "1", "1", "1")]);
        assert_eq!(monoms("-x^4").unwrap(), vec![m(true, "1", "1", "4")]);
        assert_eq!(monoms("+3/4*x").unwrap(), vec![m(false, "3", "4", "1")]);
        assert_eq!(monoms("2/3").unwrap(), vec![m(false, "2", "3", "0")]);
    }

    #[test]
    fn test_full_literal() {
        assert_eq!(
            monoms("x^3+2/5x^2 - 3x+4").unwrap(),
            vec![
                m(false, "1", "1", "3"),
                m(false, "2", "5", "2"),
                m(true, "3", "1", "1"),
                m(false, "4", "1", "0"),
            ]
        );
    }

    #[test]
    fn test_missing_sign_between_terms() {
        assert_eq!(
            monoms("3x2"),
            Err(ParseError::Expected {
                expected: "`+` or `-`",
                found: "number `2`".to_owned(),
                offset: 2,
            })
        );
        assert!(matches!(monoms("3 4"), Err(ParseError::Expected { .. })));
    }

    #[test]
    fn test_truncated_terms() {
        assert_eq!(
            monoms("x^"),
            Err(ParseError::UnexpectedEnd { expected: "an exponent" })
        );
        assert_eq!(
            monoms("1/"),
            Err(ParseError::UnexpectedEnd { expected: "a denominator" })
        );
        assert_eq!(
            monoms("x+"),
            Err(ParseError::UnexpectedEnd {
                expected: "a coefficient or `x`"
            })
        );
        assert_eq!(
            monoms("3*"),
            Err(ParseError::UnexpectedEnd { expected: "`x`" })
        );
    }

    #[test]
    fn test_misplaced_tokens() {
        assert!(matches!(
            monoms("--3"),
            Err(ParseError::Expected { offset: 1, .. })
        ));
        assert!(matches!(monoms("x*3"), Err(ParseError::Expected { .. })));
        assert!(matches!(monoms("^2"), Err(ParseError::Expected { offset: 0, .. })));
        assert!(matches!(monoms("3*/x"), Err(ParseError::Expected { .. })));
    }
}
