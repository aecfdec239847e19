//! Error types for instruction classification.

use thiserror::Error;

/// Errors produced while matching a command line against the grammar.
///
/// None of these carry a line number: a command is classified at the moment
/// it is dispatched, and the interpreter reports failures without position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// No grammar rule matches the command.
    #[error("unknown instruction: {command}")]
    UnknownInstruction { command: String },

    /// The `REPEAT` operand is not a signed integer.
    #[error("repeat count must be an integer: {count}")]
    InvalidRepeatCount { count: String },

    /// A digit-only push literal does not fit in a 64-bit signed integer.
    #[error("integer literal out of range: {token}")]
    IntegerLiteralOutOfRange { token: String },
}
