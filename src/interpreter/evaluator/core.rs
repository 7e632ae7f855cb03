use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, call, unary::eval_unary},
        scope::Context,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Diagnostics are ordinary values:
/// the first one encountered propagates upward through the smallest
/// enclosing evaluation, and nothing after it runs.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The result of evaluating one node.
///
/// `returning` is a control signal, not a value: it tells enclosing blocks
/// to stop evaluating their remaining statements and bubble `value` up to
/// the nearest function-call boundary. Only `return` statements set it;
/// calls absorb it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The produced value.
    pub value:     Value,
    /// Whether a `return` statement is unwinding to the enclosing call.
    pub returning: bool,
}

impl Outcome {
    /// An ordinary outcome carrying `value`.
    #[must_use]
    pub const fn of(value: Value) -> Self {
        Self { value,
               returning: false }
    }

    /// An outcome produced by a `return` statement.
    #[must_use]
    pub const fn returned(value: Value) -> Self {
        Self { value,
               returning: true }
    }
}

/// Evaluates an AST node against a context.
///
/// This is the main entry point of the interpreter. Dispatch is purely on
/// the node's variant; the set of variants is closed and handled
/// exhaustively.
///
/// # Parameters
/// - `node`: The node to evaluate.
/// - `context`: The active call frame, holding the scope used for name
///   resolution.
///
/// # Returns
/// The node's [`Outcome`], or the first `RuntimeError` raised beneath it.
///
/// # Example
/// ```
/// use lumen::{
///     ast::Node,
///     interpreter::{evaluator::core::evaluate, scope::Context, value::Value},
/// };
///
/// let context = Context::new();
/// let node = Node::Number { value: 3.0,
///                           line:  1, };
///
/// let outcome = evaluate(&node, &context).unwrap();
/// assert_eq!(outcome.value, Value::Number(3.0));
/// assert!(!outcome.returning);
/// ```
pub fn evaluate(node: &Node, context: &Context) -> EvalResult<Outcome> {
    match node {
        Node::Number { value, .. } => Ok(Outcome::of(Value::Number(*value))),
        Node::Str { value, .. } => Ok(Outcome::of(Value::Str(value.clone()))),
        Node::VarAccess { name, line } => eval_var_access(name, *line, context),
        Node::Let { name, value, line } => eval_let(name, value, *line, context),
        Node::Assign { name, value, line } => eval_assign(name, value, *line, context),
        Node::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            let lval = eval_value(left, context)?;
            let rval = eval_value(right, context)?;
            Ok(Outcome::of(eval_binary(*op, &lval, &rval, *line)?))
        },
        Node::UnaryOp { op, expr, line } => {
            let val = eval_value(expr, context)?;
            Ok(Outcome::of(eval_unary(*op, &val, *line)?))
        },
        Node::FunctionDef { name,
                            params,
                            body,
                            line: _, } => call::eval_function_def(name, params, body, context),
        Node::Call { callee, args, line } => call::eval_call(callee, args, *line, context),
        Node::Return { value, line: _ } => eval_return(value.as_deref(), context),
        Node::Say { expr, .. } => eval_say(expr, context),
        Node::If { condition,
                   then_block,
                   else_block,
                   line, } => {
            eval_if(condition, then_block, else_block.as_deref(), *line, context)
        },
        Node::While { condition, body, line } => eval_while(condition, body, *line, context),
        Node::Repeat { count, body, line } => eval_repeat(count, body, *line, context),
        Node::Block { statements, .. } => eval_block(statements, context),
    }
}

/// Evaluates a subexpression for its value alone.
///
/// Sub-expressions never carry a live return signal out of this helper:
/// the only producers of `returning` are `return` statements, which appear
/// inside blocks, and calls absorb the signal at their boundary.
pub(crate) fn eval_value(node: &Node, context: &Context) -> EvalResult<Value> {
    Ok(evaluate(node, context)?.value)
}

/// Looks up a variable through the active scope chain.
///
/// Lookup walks from the local scope outward; an exhausted chain is a
/// diagnostic, not a crash.
fn eval_var_access(name: &str, line: usize, context: &Context) -> EvalResult<Outcome> {
    context.scope()
           .lookup(name)
           .map(Outcome::of)
           .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                          line })
}

/// Evaluates a `let` binding.
///
/// The initializer is evaluated first (propagating any diagnostic), then
/// the name is created in the *local* scope, shadowing outer bindings.
/// The binding evaluates to the bound value, so `let x = 10` yields `10`.
fn eval_let(name: &str, value: &Node, _line: usize, context: &Context) -> EvalResult<Outcome> {
    let value = eval_value(value, context)?;
    context.scope().define(name, value.clone());
    Ok(Outcome::of(value))
}

/// Evaluates an assignment to an existing name.
///
/// The right-hand side is evaluated first; the name is then rebound
/// wherever the scope chain defines it. Assignment never implicitly
/// creates a binding. Like `let`, it evaluates to the assigned value.
fn eval_assign(name: &str, value: &Node, line: usize, context: &Context) -> EvalResult<Outcome> {
    let value = eval_value(value, context)?;
    context.scope().assign(name, value.clone(), line)?;
    Ok(Outcome::of(value))
}

/// Evaluates a `return` statement.
///
/// The optional expression defaults to null. The resulting outcome has
/// `returning` set, which short-circuits every enclosing block up to the
/// nearest call boundary.
fn eval_return(value: Option<&Node>, context: &Context) -> EvalResult<Outcome> {
    let value = match value {
        Some(expr) => eval_value(expr, context)?,
        None => Value::Null,
    };
    Ok(Outcome::returned(value))
}

/// Evaluates a `say` statement.
///
/// The expression's display form is written to standard output,
/// synchronously, before evaluation continues; print ordering therefore
/// matches program order exactly. The statement itself yields null.
fn eval_say(expr: &Node, context: &Context) -> EvalResult<Outcome> {
    let value = eval_value(expr, context)?;
    println!("{value}");
    Ok(Outcome::of(Value::Null))
}

/// Evaluates an `if` statement.
///
/// The condition must be a number; any non-zero number selects the `then`
/// branch. The chosen branch's outcome, including any return signal,
/// becomes the statement's outcome. Without an `else`, a false condition
/// yields null.
fn eval_if(condition: &Node,
           then_block: &Node,
           else_block: Option<&Node>,
           line: usize,
           context: &Context)
           -> EvalResult<Outcome> {
    if eval_value(condition, context)?.is_truthy(line)? {
        evaluate(then_block, context)
    } else if let Some(block) = else_block {
        evaluate(block, context)
    } else {
        Ok(Outcome::of(Value::Null))
    }
}

/// Evaluates a `while` loop.
///
/// The condition is re-evaluated before every iteration. A `return`
/// inside the body stops the loop and propagates outward. The loop itself
/// yields null.
fn eval_while(condition: &Node, body: &Node, line: usize, context: &Context) -> EvalResult<Outcome> {
    while eval_value(condition, context)?.is_truthy(line)? {
        let outcome = evaluate(body, context)?;
        if outcome.returning {
            return Ok(outcome);
        }
    }
    Ok(Outcome::of(Value::Null))
}

/// Evaluates a `repeat N times` loop.
///
/// The count is evaluated once and must be a non-negative number; the body
/// runs ⌊count⌋ times. A `return` inside the body stops the loop and
/// propagates outward. The loop itself yields null.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn eval_repeat(count: &Node, body: &Node, line: usize, context: &Context) -> EvalResult<Outcome> {
    let count = eval_value(count, context)?.as_number(line)?;
    if count < 0.0 || !count.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("repeat count must be a non-negative number, found {count}"),
                                             line });
    }

    for _ in 0..count.trunc() as u64 {
        let outcome = evaluate(body, context)?;
        if outcome.returning {
            return Ok(outcome);
        }
    }
    Ok(Outcome::of(Value::Null))
}

/// Evaluates a sequence of statements.
///
/// Statements run in order. The first outcome carrying a return signal
/// short-circuits the remainder of the block and becomes the block's
/// outcome; a diagnostic aborts it the same way via `?`. Otherwise the
/// block collapses to its last statement's value, or null when empty.
/// Blocks do not open a scope of their own; only calls create frames.
fn eval_block(statements: &[Node], context: &Context) -> EvalResult<Outcome> {
    let mut last = Value::Null;

    for statement in statements {
        let outcome = evaluate(statement, context)?;
        if outcome.returning {
            return Ok(outcome);
        }
        last = outcome.value;
    }

    Ok(Outcome::of(last))
}
