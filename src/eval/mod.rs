//! Evaluator for shunt - postfix evaluation over an integer stack
//!
//! The evaluator walks a postfix token sequence left to right:
//! - Numbers push their value
//! - Operators pop two operands and push the result
//! - Parentheses are never valid here and abort evaluation
//!
//! For an operator with stack `... a b` (b on top) the result is `a op b`,
//! so `-` and `/` see their operands in source order. All arithmetic is
//! checked; division truncates toward zero.

mod stack;

use crate::display::{format_stack, format_token};
use crate::lexer::{Operator, Token};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivideByZero,
    #[error("Invalid token in postfix input: {0}")]
    InvalidToken(Token),
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),
    #[error("Integer overflow: {lhs} {op} {rhs}")]
    Overflow { op: Operator, lhs: i64, rhs: i64 },
}

/// Number of stack values shown per trace line
const TRACE_DEPTH: usize = 5;

/// The evaluator owns the value stack and executes postfix sequences
pub struct Evaluator {
    /// The value stack
    pub(crate) stack: Vec<i64>,
    /// Trace mode - print stack after each token
    pub(crate) trace_mode: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            stack: Vec::new(),
            trace_mode: false,
        }
    }

    /// Enable or disable trace mode
    pub fn set_trace_mode(&mut self, enabled: bool) {
        self.trace_mode = enabled;
    }

    pub fn trace_mode(&self) -> bool {
        self.trace_mode
    }

    /// The stack as left by the last evaluation
    pub fn stack(&self) -> &[i64] {
        &self.stack
    }

    /// Clear the stack
    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    /// Evaluate a postfix sequence. An empty sequence evaluates to 0.
    pub fn eval(&mut self, tokens: &[Token]) -> Result<i64, EvalError> {
        self.stack.clear();
        if tokens.is_empty() {
            return Ok(0);
        }

        for token in tokens {
            self.eval_token(token)?;
            if self.trace_mode {
                self.print_trace(token);
            }
        }

        self.result()
    }

    fn eval_token(&mut self, token: &Token) -> Result<(), EvalError> {
        match token {
            Token::Number(n) => {
                self.stack.push(*n);
                Ok(())
            }
            Token::Operator(op) => self.apply(*op),
            Token::LeftParen | Token::RightParen => Err(EvalError::InvalidToken(*token)),
        }
    }

    /// Print trace output showing the token and stack state
    pub(crate) fn print_trace(&self, token: &Token) {
        eprintln!(
            "\x1b[90m>>> {} │ {}\x1b[0m",
            format_token(token),
            format_stack(&self.stack, TRACE_DEPTH)
        );
    }
}

/// Evaluate a postfix sequence with a fresh evaluator
pub fn eval_postfix(tokens: &[Token]) -> Result<i64, EvalError> {
    Evaluator::new().eval(tokens)
}
