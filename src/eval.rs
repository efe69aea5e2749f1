// ABOUTME: Tree-walking evaluator executing parsed Monk programs

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Function, Value};
use std::rc::Rc;

/// Evaluates a program in the given environment, returning the value of the
/// last statement. A `return` at program level terminates the program with
/// the returned value; a runtime error aborts evaluation immediately.
pub fn eval(program: &Program, env: &Rc<Environment>) -> Result<Value, EvalError> {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

fn eval_statement(statement: &Statement, env: &Rc<Environment>) -> Result<Value, EvalError> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.set(name.value.clone(), value);
            Ok(Value::Null)
        }
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        }
        Statement::Expression { expression, .. } => eval_expression(expression, env),
    }
}

/// Unlike program evaluation, a block passes a `Return` through UNOPENED so
/// it can escape arbitrarily nested blocks and reach the enclosing call or
/// program boundary.
fn eval_block(block: &BlockStatement, env: &Rc<Environment>) -> Result<Value, EvalError> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_expression(expression: &Expression, env: &Rc<Environment>) -> Result<Value, EvalError> {
    match expression {
        Expression::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expression::Boolean { value, .. } => Ok(Value::Bool(*value)),
        Expression::Identifier(identifier) => env
            .get(&identifier.value)
            .ok_or_else(|| EvalError::IdentifierNotFound(identifier.value.clone())),
        Expression::Prefix {
            operator, right, ..
        } => {
            let right = eval_expression(right, env)?;
            eval_prefix_expression(operator, right)
        }
        Expression::Infix {
            operator,
            left,
            right,
            ..
        } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix_expression(operator, left, right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
            ..
        } => {
            let condition = eval_expression(condition, env)?;

            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        }
        Expression::Function {
            parameters, body, ..
        } => Ok(Value::Function(Rc::new(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: env.clone(),
        }))),
        Expression::Call {
            function,
            arguments,
            ..
        } => {
            let callee = eval_expression(function, env)?;

            // Left to right; the first failing argument aborts the call
            let arguments = arguments
                .iter()
                .map(|argument| eval_expression(argument, env))
                .collect::<Result<Vec<_>, _>>()?;

            apply_function(callee, arguments)
        }
    }
}

fn eval_prefix_expression(operator: &str, right: Value) -> Result<Value, EvalError> {
    match operator {
        "!" => Ok(eval_bang_operator(right)),
        "-" => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            other => Err(EvalError::UnknownPrefixOperator {
                operator: operator.to_string(),
                operand: other.type_name(),
            }),
        },
        _ => Err(EvalError::UnknownPrefixOperator {
            operator: operator.to_string(),
            operand: right.type_name(),
        }),
    }
}

fn eval_bang_operator(value: Value) -> Value {
    match value {
        Value::Bool(value) => Value::Bool(!value),
        Value::Null => Value::Bool(true),
        _ => Value::Bool(false),
    }
}

fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Result<Value, EvalError> {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => {
            eval_integer_infix_expression(operator, *l, *r)
        }
        _ => match operator {
            // Identity comparison comes before the type check, so mixed
            // types compare unequal rather than erroring
            "==" => Ok(Value::Bool(identity_eq(&left, &right))),
            "!=" => Ok(Value::Bool(!identity_eq(&left, &right))),
            _ if left.type_name() != right.type_name() => Err(EvalError::TypeMismatch {
                left: left.type_name(),
                operator: operator.to_string(),
                right: right.type_name(),
            }),
            _ => Err(EvalError::UnknownInfixOperator {
                left: left.type_name(),
                operator: operator.to_string(),
                right: right.type_name(),
            }),
        },
    }
}

/// Object identity for the non-integer `==`/`!=` path: booleans and null
/// compare as the interned singletons they stand for, functions by
/// allocation.
fn identity_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Null, Value::Null) => true,
        (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
        _ => false,
    }
}

/// Integer arithmetic wraps on overflow; division truncates toward zero.
fn eval_integer_infix_expression(
    operator: &str,
    left: i64,
    right: i64,
) -> Result<Value, EvalError> {
    match operator {
        "+" => Ok(Value::Integer(left.wrapping_add(right))),
        "-" => Ok(Value::Integer(left.wrapping_sub(right))),
        "*" => Ok(Value::Integer(left.wrapping_mul(right))),
        "/" => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        }
        "<" => Ok(Value::Bool(left < right)),
        ">" => Ok(Value::Bool(left > right)),
        "==" => Ok(Value::Bool(left == right)),
        "!=" => Ok(Value::Bool(left != right)),
        _ => Err(EvalError::UnknownInfixOperator {
            left: "INTEGER",
            operator: operator.to_string(),
            right: "INTEGER",
        }),
    }
}

fn apply_function(callee: Value, arguments: Vec<Value>) -> Result<Value, EvalError> {
    let function = match callee {
        Value::Function(function) => function,
        other => return Err(EvalError::NotCallable(other.type_name())),
    };

    if function.parameters.len() != arguments.len() {
        return Err(EvalError::WrongArity {
            expected: function.parameters.len(),
            got: arguments.len(),
        });
    }

    // Fresh frame over the captured environment, not the caller's
    let call_env = Environment::enclosed(function.env.clone());

    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        call_env.set(parameter.value.clone(), argument);
    }

    // Unwrap here so `return` escapes exactly one call frame
    match eval_block(&function.body, &call_env)? {
        Value::Return(value) => Ok(*value),
        value => Ok(value),
    }
}
