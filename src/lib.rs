//! shunt - integer arithmetic with the shunting-yard algorithm
//!
//! # Overview
//!
//! shunt evaluates expressions built from non-negative integer literals,
//! `+ - * /` and parentheses. Evaluation is a three-stage pipeline:
//!
//! ```text
//! "2+3*4"  --lex-->  [2, +, 3, *, 4]          (infix tokens)
//!          --to_postfix-->  [2, 3, 4, *, +]   (postfix / RPN)
//!          --eval_postfix-->  14
//! ```
//!
//! `*` and `/` bind tighter than `+` and `-`; operators of equal precedence
//! group left to right, so `8-4-2` is `(8-4)-2`. Division truncates toward zero.
//!
//! # Permissive input
//!
//! Characters other than digits, operators and parentheses are skipped, and
//! unbalanced parentheses are tolerated during conversion. There is no unary
//! minus: `-5` lexes as a `-` followed by `5`.
//!
//! # Example
//!
//! ```rust
//! use shunt::{evaluate, lex, to_postfix, eval_postfix};
//!
//! assert_eq!(evaluate("(2+3)*4").unwrap(), 20);
//!
//! let tokens = lex("8-4-2").unwrap();
//! let postfix = to_postfix(&tokens);
//! assert_eq!(eval_postfix(&postfix).unwrap(), 2);
//! ```

pub mod display;
pub mod eval;
pub mod lexer;
pub mod parser;

use thiserror::Error;

// Re-export commonly used items
pub use eval::{eval_postfix, EvalError, Evaluator};
pub use lexer::{lex, LexError, Operator, Token};
pub use parser::{to_postfix, Converter};

/// Tokenize an expression (alias for [`lex`])
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    lex(expression)
}

/// Any failure along the pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, Error::Eval(EvalError::DivideByZero))
    }
}

/// Convenience function to evaluate an infix expression
pub fn evaluate(expression: &str) -> Result<i64, Error> {
    let tokens = lex(expression)?;
    let postfix = to_postfix(&tokens);
    Ok(eval_postfix(&postfix)?)
}
