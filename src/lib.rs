//! # lumen
//!
//! lumen is a small, friendly scripting language implemented as a
//! tree-walking interpreter. It lexes source text into tokens, parses the
//! tokens into an abstract syntax tree, and evaluates the tree against a
//! context holding the program's variables, with closures, `say` output,
//! and structured diagnostics instead of panics.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::evaluate,
    lexer::tokenize,
    parser::core::parse_program,
    scope::Context,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source locations to nodes for error reporting.
/// - Enables uniform handling of statements and expressions.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code.
/// It standardizes error reporting and carries detailed information about
/// failures, including error kinds, descriptions, and source locations.
/// Every stage returns its diagnostic as a value; nothing is thrown.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, scoping, and error handling to provide a complete
/// runtime for source code evaluation. It exposes the public API for
/// interpreting and executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, scope, and
///   value types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a piece of source text against a context and returns its value.
///
/// The source is tokenized, parsed into a single program block, and
/// evaluated. Each stage either produces its output or a diagnostic that
/// short-circuits all later stages. The program's value is its last
/// statement's value, so `let x = 10` yields `10` and an empty program
/// yields null.
///
/// The context is borrowed, not consumed: bindings created by the program
/// remain visible to later calls sharing the same context, which is what
/// lets a line-based prompt build up state across lines.
///
/// # Errors
/// Returns the first lexing, parsing, or runtime diagnostic encountered.
///
/// # Examples
/// ```
/// use lumen::{interpreter::scope::Context, run_source};
///
/// let context = Context::new();
///
/// let value = run_source("let x = 1 + 2", &context).unwrap();
/// assert_eq!(value.to_string(), "3");
///
/// // State persists across runs sharing a context.
/// let value = run_source("x * 2", &context).unwrap();
/// assert_eq!(value.to_string(), "6");
///
/// // Diagnostics are values, not panics.
/// assert!(run_source("y + 1", &context).is_err());
/// ```
pub fn run_source(source: &str, context: &Context) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;
    let outcome = evaluate(&program, context)?;

    Ok(outcome.value)
}
