//! Tokenization for shunt
//!
//! Tokens are the atomic elements of an infix expression: integer literals,
//! the four binary operators and parentheses. Anything else in the input
//! (whitespace, letters, punctuation) is skipped without complaint.

use nom::{
    branch::alt,
    character::complete::{anychar, char, digit1},
    combinator::{map, value},
    multi::many0,
    IResult,
};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl Operator {
    /// Binding strength: `+ -` bind at 1, `* /` at 2
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Every operator is left-associative
    pub fn is_left_associative(self) -> bool {
        true
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A non-negative integer literal
    Number(i64),
    /// One of `+ - * /`
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// The kind of the token as a single character; numbers are `'n'`
    pub fn symbol(&self) -> char {
        match self {
            Token::Number(_) => 'n',
            Token::Operator(op) => op.symbol(),
            Token::LeftParen => '(',
            Token::RightParen => ')',
        }
    }

    /// The integer payload, only present on numbers
    pub fn value(&self) -> Option<i64> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Operator precedence; parentheses and numbers rank 0
    pub fn precedence(&self) -> u8 {
        match self {
            Token::Operator(op) => op.precedence(),
            _ => 0,
        }
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, Token::LeftParen | Token::RightParen)
    }
}

/// Renders as `{kind, value}`, e.g. `{'n', 42}` or `{'+', 0}`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'{}', {}}}", self.symbol(), self.value().unwrap_or(0))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Number literal too large: {0}")]
    NumberTooLarge(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// One step of the scan: a finished token, a digit run still to be
/// converted, or a character that carries no meaning
#[derive(Debug, Clone)]
enum Lexeme<'a> {
    Token(Token),
    Digits(&'a str),
    Skip,
}

/// Parse one of `+ - * /`
fn operator(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Operator(Operator::Add), char('+')),
        value(Token::Operator(Operator::Sub), char('-')),
        value(Token::Operator(Operator::Mul), char('*')),
        value(Token::Operator(Operator::Div), char('/')),
    ))(input)
}

/// Parse `(` or `)`
fn paren(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::LeftParen, char('(')),
        value(Token::RightParen, char(')')),
    ))(input)
}

/// Parse a maximal run of ASCII digits
fn digits(input: &str) -> IResult<&str, Lexeme<'_>> {
    map(digit1, Lexeme::Digits)(input)
}

/// Consume any other character
fn skip(input: &str) -> IResult<&str, Lexeme<'_>> {
    value(Lexeme::Skip, anychar)(input)
}

fn lexeme(input: &str) -> IResult<&str, Lexeme<'_>> {
    alt((
        map(alt((operator, paren)), Lexeme::Token),
        digits,
        // Fallback last: always consumes one char
        skip,
    ))(input)
}

/// Tokenize a complete input string
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let (_, lexemes) =
        many0(lexeme)(input).map_err(|e| LexError::ParseError(format!("{:?}", e)))?;

    let mut tokens = Vec::with_capacity(lexemes.len());
    for lexeme in lexemes {
        match lexeme {
            Lexeme::Token(token) => tokens.push(token),
            Lexeme::Digits(run) => {
                let n = run
                    .parse::<i64>()
                    .map_err(|_| LexError::NumberTooLarge(run.to_string()))?;
                tokens.push(Token::Number(n));
            }
            Lexeme::Skip => {}
        }
    }

    Ok(tokens)
}
