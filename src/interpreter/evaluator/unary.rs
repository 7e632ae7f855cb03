use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies a unary operator to an already-evaluated operand.
///
/// # Parameters
/// - `op`: The unary operator.
/// - `value`: The operand value.
/// - `line`: Source code line number for error reporting.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// `RuntimeError::TypeError` if the operand is not a number.
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => Ok(Value::Number(-value.as_number(line)?)),
    }
}
