// ABOUTME: Error types for parse-time diagnostics and runtime failures

use crate::token::TokenKind;
use thiserror::Error;

/// A recoverable parse-time diagnostic. The parser accumulates these and
/// keeps going; it never aborts on the first failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected next token to be {expected} but got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },

    #[error("No prefix parse function for {0} found")]
    NoPrefixParser(TokenKind),

    #[error("Could not parse \"{0}\" as integer")]
    InvalidInteger(String),
}

/// A runtime failure. Once produced it propagates unmodified through every
/// enclosing evaluation context and surfaces as the top-level result, where
/// the drivers render it as `ERROR: <message>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: &'static str,
        operator: String,
        right: &'static str,
    },

    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: String,
        operand: &'static str,
    },

    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        operator: String,
        right: &'static str,
    },

    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),

    #[error("not a function: {0}")]
    NotCallable(&'static str),

    #[error("wrong number of arguments: expected {expected}, got {got}")]
    WrongArity { expected: usize, got: usize },

    #[error("division by zero")]
    DivisionByZero,
}
