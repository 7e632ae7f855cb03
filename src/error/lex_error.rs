#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
///
/// Lexing fails fast: the first offending character aborts the scan and no
/// partial token sequence is produced.
pub enum LexError {
    /// Encountered a character that matches no lexical rule.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line where the string started.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "Error on line {line}: Illegal character '{character}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
        }
    }
}

impl std::error::Error for LexError {}
