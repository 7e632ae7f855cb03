/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparisons, manages variable state, threads the
/// return signal out of function bodies, and produces results. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, closures, and control flow.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and syntax, reporting errors with location info.
/// - Supports arithmetic, function definitions, calls, assignments, and
///   control flow.
pub mod parser;
/// The scope module implements lexical name resolution and call frames.
///
/// Scopes form a chain of name-to-value mappings searched from the inside
/// out; contexts pair a scope with a diagnostic label and a link to the
/// calling frame. Together they give the language lexical scoping and
/// closures.
///
/// # Responsibilities
/// - Defines, rebinds, and resolves variables through the scope chain.
/// - Keeps captured scopes alive for as long as any function references
///   them.
/// - Tracks the call-frame chain for diagnostic backtraces.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the closed set of value types used during
/// execution (numbers, strings, functions, and null) along with
/// conversion and display helpers used throughout the evaluator.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversion, truthiness, and display behavior.
/// - Carries each function's captured scope alongside its body.
pub mod value;
