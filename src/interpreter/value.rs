use std::rc::Rc;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, scope::Scope},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and `say` output. The set of variants is
/// closed: operator implementations match on variant pairs instead of
/// inspecting types at runtime.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point). Comparisons also
    /// produce numbers: `1` for true and `0` for false.
    Number(f64),
    /// A text value.
    Str(String),
    /// A user-defined function together with the scope that was active at
    /// its definition site. The shared reference keeps that scope alive for
    /// as long as the function itself, which is what makes closures work
    /// after the defining call has returned.
    Function(Rc<FunctionValue>),
    /// The absence of a value; produced by statements such as `say` and by
    /// calls that finish without an explicit `return`.
    Null,
}

/// A user-defined function: its parameter list, its body, and the scope
/// captured at the definition site.
#[derive(Debug)]
pub struct FunctionValue {
    /// The function name, if it was defined with one.
    pub name:   Option<String>,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body block, evaluated once per call.
    pub body:   Node,
    /// The scope in which the function was defined (not called).
    pub scope:  Scope,
}

impl FunctionValue {
    /// The name used for this function in diagnostics and display output.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeError)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::value::Value;
    ///
    /// let x = Value::Number(10.0);
    ///
    /// assert_eq!(x.as_number(1).unwrap(), 10.0);
    /// assert!(Value::Null.as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Interprets the value as a condition.
    ///
    /// Conditions must be numbers; any non-zero number is true. Comparison
    /// operators produce `1` and `0`, so their results feed directly into
    /// `if` and `while`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The truth value.
    /// - `Err(RuntimeError::TypeError)`: If the value is not a number.
    pub fn is_truthy(&self, line: usize) -> EvalResult<bool> {
        Ok(self.as_number(line)? != 0.0)
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short name for the value's type, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "a number",
            Self::Str(_) => "a string",
            Self::Function(_) => "a function",
            Self::Null => "null",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            // Functions compare by identity, not structure.
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Function(func) => write!(f, "<function {}>", func.label()),
            Self::Null => write!(f, "null"),
        }
    }
}
