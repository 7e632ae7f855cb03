use std::rc::Rc;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Outcome, evaluate, eval_value},
        scope::{Context, Scope},
        value::{FunctionValue, Value},
    },
};

/// Evaluates a function definition.
///
/// The definition captures the *current* scope, not a copy of it, which
/// is what enables closures: the function resolves outer names through the
/// chain that was active where it was defined, even after the frame that
/// created that chain has returned.
///
/// A named definition is registered in the local scope and evaluates to
/// the function value; an unnamed one evaluates to null.
///
/// # Parameters
/// - `name`: The function name, if any.
/// - `params`: Parameter names in declaration order.
/// - `body`: The body block.
/// - `context`: The defining frame.
///
/// # Returns
/// The new function value, or null for an unnamed definition.
pub(crate) fn eval_function_def(name: &Option<String>,
                                params: &[String],
                                body: &Node,
                                context: &Context)
                                -> EvalResult<Outcome> {
    let Some(name) = name else {
        return Ok(Outcome::of(Value::Null));
    };

    let function = Rc::new(FunctionValue { name:   Some(name.clone()),
                                           params: params.to_vec(),
                                           body:   body.clone(),
                                           scope:  context.scope().clone(), });

    let value = Value::Function(function);
    context.scope().define(name.clone(), value.clone());

    Ok(Outcome::of(value))
}

/// Evaluates a call expression.
///
/// The callee and all arguments are evaluated eagerly, left to right,
/// before anything else happens. The callee must be a function and the
/// argument count must match its parameter count exactly.
///
/// A fresh frame is then created whose scope is parented to the function's
/// *captured* scope, never the caller's, so resolution is lexical rather
/// than dynamic. Parameters are bound positionally in that frame, the body
/// block runs, and a `return` inside it is absorbed here: its value
/// becomes the call's result. A body that finishes without returning
/// yields null.
///
/// # Parameters
/// - `callee`: Expression producing the function to call.
/// - `args`: Argument expressions.
/// - `line`: Source code line number for error reporting.
/// - `context`: The calling frame, linked into the new frame's backtrace.
///
/// # Returns
/// The call's result value.
///
/// # Errors
/// - `RuntimeError::TypeError` if the callee is not a function.
/// - `RuntimeError::ArgumentCountMismatch` on an arity mismatch; arguments
///   are not partially bound.
pub(crate) fn eval_call(callee: &Node,
                        args: &[Node],
                        line: usize,
                        context: &Context)
                        -> EvalResult<Outcome> {
    let callee_value = eval_value(callee, context)?;

    let mut arg_values = Vec::with_capacity(args.len());
    for arg in args {
        arg_values.push(eval_value(arg, context)?);
    }

    let function = match callee_value {
        Value::Function(function) => function,
        other => {
            return Err(RuntimeError::TypeError { details: format!("tried to call {}",
                                                                  other.type_name()),
                                                 line });
        },
    };

    if arg_values.len() != function.params.len() {
        return Err(RuntimeError::ArgumentCountMismatch { expected: function.params.len(),
                                                         found:    arg_values.len(),
                                                         line });
    }

    let frame_scope = Scope::with_parent(&function.scope);
    for (param, value) in function.params.iter().zip(arg_values) {
        frame_scope.define(param.clone(), value);
    }

    let frame = context.frame(function.label(), frame_scope);
    let outcome = evaluate(&function.body, &frame)?;

    // The return signal stops at the call boundary.
    let value = if outcome.returning {
        outcome.value
    } else {
        Value::Null
    };

    Ok(Outcome::of(value))
}
