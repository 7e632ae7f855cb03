use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies a binary operator to two already-evaluated operands.
///
/// Both operands are evaluated eagerly, left first, before this function
/// runs; there is no short-circuiting. The implementation matches on the
/// operand variant pair:
///
/// - Arithmetic (`-`, `*`, `/`, `^`) requires two numbers.
/// - `+` adds two numbers or concatenates two strings; mixing a string and
///   a number is a type error, never an implicit coercion.
/// - `/` by zero is a diagnostic, not an IEEE infinity.
/// - `<` and `>` require two numbers and yield `1` or `0`.
/// - `==` compares like-typed values and yields `0` for mismatched types;
///   functions compare by identity.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand value.
/// - `right`: Right operand value.
/// - `line`: Source code line number for error reporting.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `RuntimeError::TypeError` on operand type mismatches.
/// - `RuntimeError::DivisionByZero` when dividing by zero.
///
/// # Example
/// ```
/// use lumen::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add,
///                       &Value::Number(1.0),
///                       &Value::Number(2.0),
///                       1).unwrap();
///
/// assert_eq!(sum, Value::Number(3.0));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
            _ => Err(RuntimeError::TypeError { details: format!("cannot add {} and {}",
                                                                left.type_name(),
                                                                right.type_name()),
                                               line }),
        },
        BinaryOperator::Sub => Ok(Value::Number(left.as_number(line)? - right.as_number(line)?)),
        BinaryOperator::Mul => Ok(Value::Number(left.as_number(line)? * right.as_number(line)?)),
        BinaryOperator::Div => {
            let divisor = right.as_number(line)?;
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Value::Number(left.as_number(line)? / divisor))
        },
        BinaryOperator::Pow => {
            Ok(Value::Number(left.as_number(line)?.powf(right.as_number(line)?)))
        },
        BinaryOperator::Less => {
            Ok(bool_number(left.as_number(line)? < right.as_number(line)?))
        },
        BinaryOperator::Greater => {
            Ok(bool_number(left.as_number(line)? > right.as_number(line)?))
        },
        BinaryOperator::Equal => Ok(bool_number(left == right)),
    }
}

/// Wraps a truth value as the number `1` or `0`, the language's comparison
/// result representation.
const fn bool_number(b: bool) -> Value {
    Value::Number(if b { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_and_concatenation() {
        assert_eq!(eval_binary(BinaryOperator::Add,
                               &Value::Number(2.0),
                               &Value::Number(3.0),
                               1),
                   Ok(Value::Number(5.0)));
        assert_eq!(eval_binary(BinaryOperator::Add,
                               &Value::Str("ab".to_string()),
                               &Value::Str("cd".to_string()),
                               1),
                   Ok(Value::Str("abcd".to_string())));
    }

    #[test]
    fn mixed_addition_is_a_type_error() {
        let err = eval_binary(BinaryOperator::Add,
                              &Value::Str("n = ".to_string()),
                              &Value::Number(1.0),
                              7).unwrap_err();

        assert!(matches!(err, RuntimeError::TypeError { line: 7, .. }));
    }

    #[test]
    fn division_by_zero_is_a_diagnostic() {
        assert_eq!(eval_binary(BinaryOperator::Div,
                               &Value::Number(1.0),
                               &Value::Number(0.0),
                               3),
                   Err(RuntimeError::DivisionByZero { line: 3 }));
    }

    #[test]
    fn comparisons_yield_numbers() {
        assert_eq!(eval_binary(BinaryOperator::Less,
                               &Value::Number(2.0),
                               &Value::Number(3.0),
                               1),
                   Ok(Value::Number(1.0)));
        assert_eq!(eval_binary(BinaryOperator::Greater,
                               &Value::Number(2.0),
                               &Value::Number(3.0),
                               1),
                   Ok(Value::Number(0.0)));
    }

    #[test]
    fn equality_across_types_is_false_not_an_error() {
        assert_eq!(eval_binary(BinaryOperator::Equal,
                               &Value::Str("1".to_string()),
                               &Value::Number(1.0),
                               1),
                   Ok(Value::Number(0.0)));
    }
}
