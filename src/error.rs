/// Lexing errors.
///
/// Defines all error types that can occur while scanning raw source text
/// into tokens, such as characters that match no lexical rule or string
/// literals that are never closed.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream
/// into an abstract syntax tree. Parse errors include unexpected tokens,
/// missing delimiters, and input that ends mid-construct.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables, type mismatches, division by zero, or calling a
/// function with the wrong number of arguments.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
