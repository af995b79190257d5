//! Common test utilities for shunt integration tests

pub use shunt::{eval_postfix, evaluate, lex, to_postfix, Error, EvalError, Token};

/// Helper to run the full pipeline stage by stage
#[allow(dead_code)]
pub fn pipeline(input: &str) -> Result<i64, String> {
    let tokens = lex(input).map_err(|e| e.to_string())?;
    let postfix = to_postfix(&tokens);
    eval_postfix(&postfix).map_err(|e| e.to_string())
}

/// Helper to render the postfix form of an expression
#[allow(dead_code)]
pub fn rpn(input: &str) -> String {
    let tokens = lex(input).unwrap();
    shunt::display::format_tokens(&to_postfix(&tokens))
}
