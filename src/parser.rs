//! Infix to postfix conversion for shunt
//!
//! Reorders an infix token sequence into postfix (RPN) order with the
//! shunting-yard algorithm. Parentheses disappear from the output; operator
//! order alone encodes precedence and left-associative grouping.
//!
//! Conversion never fails. A `)` with no matching `(` simply stops popping,
//! and a `(` that is never closed is flushed to the output at the end, where
//! the evaluator rejects it.

use crate::lexer::Token;

/// Shunting-yard state
pub struct Converter {
    output: Vec<Token>,
    ops: Vec<Token>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Converter {
            output: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Feed one infix token
    pub fn push(&mut self, token: Token) {
        match token {
            Token::Number(_) => self.output.push(token),
            Token::LeftParen => self.ops.push(token),
            Token::RightParen => self.close_group(),
            Token::Operator(op) => {
                while let Some(top) = self.ops.last() {
                    if *top == Token::LeftParen {
                        break;
                    }
                    let pops = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence() && op.is_left_associative());
                    if !pops {
                        break;
                    }
                    self.pop_to_output();
                }
                self.ops.push(token);
            }
        }
    }

    /// Pop operators until the matching `(`, then discard it
    fn close_group(&mut self) {
        while let Some(top) = self.ops.last() {
            if *top == Token::LeftParen {
                break;
            }
            self.pop_to_output();
        }
        // Unmatched ')': the stack just ran dry
        if self.ops.last() == Some(&Token::LeftParen) {
            self.ops.pop();
        }
    }

    fn pop_to_output(&mut self) {
        if let Some(top) = self.ops.pop() {
            self.output.push(top);
        }
    }

    /// Flush the operator stack in LIFO order and return the postfix sequence
    pub fn finish(mut self) -> Vec<Token> {
        while let Some(top) = self.ops.pop() {
            self.output.push(top);
        }
        self.output
    }
}

/// Convert an infix token sequence to postfix order
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut converter = Converter::new();
    for token in tokens {
        converter.push(*token);
    }
    converter.finish()
}
