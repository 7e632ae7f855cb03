use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// A chained name-to-value mapping implementing lexical variable
/// resolution.
///
/// Each scope holds its own bindings plus an optional reference to a parent
/// scope; lookups walk from the local scope outward until the chain is
/// exhausted. Parent links are strictly outward, so the chain is never
/// cyclic. Scopes are shared by reference counting: a function value keeps
/// its defining scope alive even after the frame that created it has gone,
/// which is what enables closures.
#[derive(Debug, Default, Clone)]
pub struct Scope(Rc<RefCell<ScopeInner>>);

#[derive(Debug, Default)]
struct ScopeInner {
    vars:   HashMap<String, Value>,
    parent: Option<Scope>,
}

impl Scope {
    /// Creates a fresh, empty, parentless scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose lookups fall back to `parent`.
    ///
    /// The parent is shared, not copied; bindings added to it later are
    /// visible through the child.
    #[must_use]
    pub fn with_parent(parent: &Self) -> Self {
        Self(Rc::new(RefCell::new(ScopeInner { vars:   HashMap::new(),
                                               parent: Some(parent.clone()), })))
    }

    /// Inserts a binding into this scope only, shadowing any outer binding
    /// of the same name.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::{scope::Scope, value::Value};
    ///
    /// let outer = Scope::new();
    /// outer.define("x", Value::Number(1.0));
    ///
    /// let inner = Scope::with_parent(&outer);
    /// inner.define("x", Value::Number(2.0));
    ///
    /// assert_eq!(inner.lookup("x"), Some(Value::Number(2.0)));
    /// assert_eq!(outer.lookup("x"), Some(Value::Number(1.0)));
    /// ```
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().vars.insert(name.into(), value);
    }

    /// Rebinds an existing name, searching from this scope outward.
    ///
    /// The first scope in the chain that defines the name receives the new
    /// value. Assignment never creates a binding: if no scope in the chain
    /// defines the name, an `UnknownVariable` error is returned.
    ///
    /// # Parameters
    /// - `name`: The variable to update.
    /// - `value`: The new value.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if the name is bound nowhere in the
    /// chain.
    pub fn assign(&self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let mut inner = self.0.borrow_mut();

        if let Some(slot) = inner.vars.get_mut(name) {
            *slot = value;
            return Ok(());
        }

        match &inner.parent {
            Some(parent) => parent.assign(name, value, line),
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Looks up a name, searching from this scope outward.
    ///
    /// # Returns
    /// The bound value, or `None` if the chain does not define the name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let inner = self.0.borrow();
        inner.vars
             .get(name)
             .cloned()
             // .. or try the parent chain
             .or_else(|| inner.parent.as_ref().and_then(|p| p.lookup(name)))
    }
}

/// One call frame: a label for diagnostics, a link to the calling frame,
/// and the frame's active scope.
///
/// A new context is created exactly once per function invocation; its
/// scope's parent is the function's *defining* scope, never the caller's,
/// which is what makes the language lexically rather than dynamically
/// scoped. The parent link exists for diagnostic backtraces only and is
/// never consulted for variable lookup.
#[derive(Debug, Clone)]
pub struct Context {
    label:  String,
    parent: Option<Rc<Context>>,
    scope:  Scope,
}

impl Context {
    /// Creates the root context of a session: a `<program>` frame with a
    /// fresh, empty, parentless scope (the global scope).
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::scope::Context;
    ///
    /// let context = Context::new();
    ///
    /// assert!(context.scope().lookup("x").is_none());
    /// assert_eq!(context.backtrace(), vec!["<program>".to_string()]);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self { label:  "<program>".to_string(),
               parent: None,
               scope:  Scope::new(), }
    }

    /// Creates the frame for a function call.
    ///
    /// `self` becomes the caller link in the new frame's backtrace; `scope`
    /// must already be parented to the function's captured scope.
    #[must_use]
    pub fn frame(&self, label: impl Into<String>, scope: Scope) -> Self {
        Self { label: label.into(),
               parent: Some(Rc::new(self.clone())),
               scope }
    }

    /// The scope active in this frame.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The frame's diagnostic label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The labels of this frame and all its callers, innermost first.
    #[must_use]
    pub fn backtrace(&self) -> Vec<String> {
        let mut labels = vec![self.label.clone()];
        let mut current = self.parent.clone();

        while let Some(context) = current {
            labels.push(context.label.clone());
            current = context.parent.clone();
        }

        labels
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getting() {
        assert!(Scope::new().lookup("foo").is_none());
    }

    #[test]
    fn assignment_rebinds_in_the_defining_scope() {
        let outer = Scope::new();
        outer.define("x", Value::Number(1.0));

        let inner = Scope::with_parent(&outer);
        inner.assign("x", Value::Number(5.0), 1).unwrap();

        assert_eq!(outer.lookup("x"), Some(Value::Number(5.0)));
        assert_eq!(inner.lookup("x"), Some(Value::Number(5.0)));
    }

    #[test]
    fn assignment_never_creates() {
        let scope = Scope::new();
        let err = scope.assign("ghost", Value::Null, 3).unwrap_err();

        assert_eq!(err,
                   RuntimeError::UnknownVariable { name: "ghost".to_string(),
                                                   line: 3, });
    }

    #[test]
    fn captured_scope_outlives_its_frame() {
        let captured = {
            let frame = Scope::new();
            frame.define("n", Value::Number(7.0));
            Scope::with_parent(&frame)
        };

        // The frame variable is gone, but the chain keeps it alive.
        assert_eq!(captured.lookup("n"), Some(Value::Number(7.0)));
    }

    #[test]
    fn backtrace_lists_frames_innermost_first() {
        let root = Context::new();
        let child = root.frame("outer", Scope::with_parent(root.scope()));
        let grandchild = child.frame("inner", Scope::with_parent(child.scope()));

        assert_eq!(grandchild.backtrace(),
                   vec!["inner".to_string(),
                        "outer".to_string(),
                        "<program>".to_string()]);
    }
}
