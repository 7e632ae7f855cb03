#[derive(Debug, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are ordinary values: evaluation returns them instead of
/// panicking, and every caller propagates the first one it sees upward
/// without retrying.
pub enum RuntimeError {
    /// Tried to read or assign an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// How many parameters the function declares.
        expected: usize,
        /// How many arguments the call supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ArgumentCountMismatch { expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Argument count mismatch: expected {expected}, found {found}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
