// ABOUTME: Lexical environments: name-to-value bindings with an outer scope

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A lexical scope. Environments are shared: closures hold the scope they
/// were created in and call frames hold their outer scope, so they live
/// behind `Rc` and may outlive the call that created them.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a root environment with no outer scope.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            outer: None,
        })
    }

    /// Creates a scope whose lookups fall through to `outer`.
    pub fn enclosed(outer: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            outer: Some(outer),
        })
    }

    /// Looks a name up in this scope, then outward through the chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }

        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds a name in THIS scope only, shadowing any outer binding.
    pub fn set(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let env = Environment::new();
        env.set("x".to_string(), Value::Integer(42));

        match env.get("x") {
            Some(Value::Integer(n)) => assert_eq!(n, 42),
            other => panic!("expected Integer(42), got {:?}", other),
        }
    }

    #[test]
    fn test_missing_name() {
        let env = Environment::new();
        assert!(env.get("missing").is_none());
    }

    #[test]
    fn test_lookup_walks_outer_chain() {
        let outer = Environment::new();
        outer.set("a".to_string(), Value::Integer(1));

        let middle = Environment::enclosed(outer);
        middle.set("b".to_string(), Value::Integer(2));

        let inner = Environment::enclosed(middle);
        inner.set("c".to_string(), Value::Integer(3));

        for (name, expected) in [("a", 1), ("b", 2), ("c", 3)] {
            match inner.get(name) {
                Some(Value::Integer(n)) => assert_eq!(n, expected),
                other => panic!("expected Integer({}), got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_set_shadows_outer_binding() {
        let outer = Environment::new();
        outer.set("x".to_string(), Value::Integer(1));

        let inner = Environment::enclosed(outer.clone());
        inner.set("x".to_string(), Value::Integer(2));

        match inner.get("x") {
            Some(Value::Integer(n)) => assert_eq!(n, 2),
            other => panic!("expected Integer(2), got {:?}", other),
        }

        // The outer binding is untouched
        match outer.get("x") {
            Some(Value::Integer(n)) => assert_eq!(n, 1),
            other => panic!("expected Integer(1), got {:?}", other),
        }
    }

    #[test]
    fn test_binding_added_after_enclosure_is_visible() {
        let outer = Environment::new();
        let inner = Environment::enclosed(outer.clone());

        outer.set("late".to_string(), Value::Integer(99));

        match inner.get("late") {
            Some(Value::Integer(n)) => assert_eq!(n, 99),
            other => panic!("expected Integer(99), got {:?}", other),
        }
    }
}
