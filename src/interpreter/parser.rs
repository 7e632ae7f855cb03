/// Expression-level parsing entry points.
///
/// Declares the `ParseResult` alias, the whole-program entry point, and the
/// expression parser that the precedence levels hang off.
pub mod core;
/// Statement parsing.
///
/// Handles `let`, `define`, `return`, `say`, `if`, `while`, `repeat`, and
/// expression statements.
pub mod statement;

/// Binary operator parsing with explicit precedence levels.
pub mod binary;
/// `end`-delimited block parsing shared by function bodies and control
/// flow.
pub mod block;
/// Unary, postfix (call), and atomic expression parsing.
pub mod unary;
/// Small shared parsing helpers.
pub mod utils;
