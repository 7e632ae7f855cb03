#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The parser aborts on the first error; there is no recovery or
/// multi-error reporting.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of the token encountered and what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block was opened but its closing `end` keyword is missing.
    ExpectedBlockEnd {
        /// The source line where the enclosing block started.
        line: usize,
    },
    /// The left side of an assignment is not a plain variable name.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedBlockEnd { line } => {
                write!(f, "Error on line {line}: Expected 'end' to close the block.")
            },

            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Invalid assignment target; only variables can be assigned to."),
        }
    }
}

impl std::error::Error for ParseError {}
