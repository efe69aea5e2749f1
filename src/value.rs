// ABOUTME: Runtime values produced by the evaluator

use crate::ast::{BlockStatement, Identifier};
use crate::env::Environment;
use std::fmt;
use std::rc::Rc;

/// A runtime value. `Return` is an internal marker wrapping the value of an
/// early return while it escapes nested blocks; user code never observes it.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Bool(bool),
    Null,
    Return(Box<Value>),
    Function(Rc<Function>),
}

/// A closure: parameters and body from the `fn` literal, plus a reference to
/// the environment in force when the literal was evaluated.
#[derive(Debug, Clone)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Rc<Environment>,
}

impl Value {
    /// The type tag used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN_VALUE",
            Value::Function(_) => "FUNCTION",
        }
    }

    /// Everything is truthy except `false` and `null`; zero is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null)
    }
}

impl fmt::Display for Value {
    /// The inspect form shown by the REPL and the file driver.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Null => write!(f, "null"),
            Value::Return(value) => write!(f, "{}", value),
            Value::Function(function) => {
                let parameters = function
                    .parameters
                    .iter()
                    .map(Identifier::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "fn({}) {{\n{}\n}}", parameters, function.body)
            }
        }
    }
}
