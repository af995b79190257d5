use super::{EvalError, Evaluator};
use crate::lexer::Operator;

impl Evaluator {
    /// Pop the operands of a binary operator: returns `(a, b)` for stack `... a b`
    pub(crate) fn pop_operands(&mut self, op: Operator) -> Result<(i64, i64), EvalError> {
        let len = self.stack.len();
        if len < 2 {
            return Err(EvalError::MalformedExpression(format!(
                "'{}' needs two operands, found {}",
                op, len
            )));
        }
        let b = self.stack.pop().ok_or_else(|| underflow(op))?;
        let a = self.stack.pop().ok_or_else(|| underflow(op))?;
        Ok((a, b))
    }

    /// Apply a binary operator to the top two values
    /// Usage: 10 3 - -> 7
    pub(crate) fn apply(&mut self, op: Operator) -> Result<(), EvalError> {
        let (a, b) = self.pop_operands(op)?;
        let result = match op {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Div => {
                if b == 0 {
                    return Err(EvalError::DivideByZero);
                }
                a.checked_div(b)
            }
        };
        let value = result.ok_or(EvalError::Overflow { op, lhs: a, rhs: b })?;
        self.stack.push(value);
        Ok(())
    }

    /// The single value left once every token is consumed
    pub(crate) fn result(&self) -> Result<i64, EvalError> {
        match self.stack.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvalError::MalformedExpression(
                "no value left on stack".to_string(),
            )),
            values => Err(EvalError::MalformedExpression(format!(
                "{} values left on stack, expected 1",
                values.len()
            ))),
        }
    }
}

fn underflow(op: Operator) -> EvalError {
    EvalError::MalformedExpression(format!("'{}' ran out of operands", op))
}
