/// Evaluation entry point and statement semantics.
///
/// Declares the `Outcome` type that threads the return signal, the
/// `EvalResult` alias, and the exhaustive dispatch over AST variants.
pub mod core;

/// Binary operator evaluation.
pub mod binary;
/// Function values, calls, and closure frames.
pub mod call;
/// Unary operator evaluation.
pub mod unary;
