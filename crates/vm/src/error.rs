//! Runtime errors for the ylang machine.
//!
//! Every error is fatal to the run. None of them carry a line number.

use thiserror::Error;
use ylang_common::Opcode;
use ylang_syntax::SyntaxError;

/// Errors that abort execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Pop, peek or DUP on an empty stack.
    #[error("stack underflow")]
    StackUnderflow,

    /// An instruction received an operand of the wrong kind.
    #[error("type mismatch in {opcode}")]
    TypeMismatch { opcode: Opcode },

    /// DIV with an integer zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// LOAD of a name that was never stored.
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },

    /// Integer arithmetic left the 64-bit signed range.
    #[error("integer overflow in {opcode}")]
    IntegerOverflow { opcode: Opcode },

    /// Blocks nested deeper than the configured limit.
    #[error("block nesting exceeded limit {limit}")]
    BlockDepthExceeded { limit: usize },

    /// Writing PRINT output failed.
    #[error("output error: {message}")]
    Output { message: String },

    /// The command line could not be classified.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl From<std::io::Error> for RuntimeError {
    fn from(e: std::io::Error) -> Self {
        RuntimeError::Output {
            message: e.to_string(),
        }
    }
}
