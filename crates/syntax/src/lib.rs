//! ylang syntax: line splitting and instruction classification.
//!
//! Source text is split into trimmed command lines, skipping blanks and
//! `#` comments. Each command is classified against a fixed keyword grammar
//! only when the machine reaches it, so a bad line does not stop earlier
//! lines from running.
//!
//! # Usage
//!
//! ```
//! use ylang_common::{Dialect, Instruction, Value};
//! use ylang_syntax::{parse_command, split_lines};
//!
//! let lines = split_lines("# sum\nPUSH 3\n\nPUSH 4\nADD\n");
//! assert_eq!(lines, vec!["PUSH 3", "PUSH 4", "ADD"]);
//!
//! let instr = parse_command(lines[0], Dialect::English).unwrap();
//! assert_eq!(instr, Instruction::Push(Value::Integer(3)));
//! ```

pub mod error;

mod lexer;
mod parser;

pub use error::SyntaxError;
pub use lexer::{numbered_lines, split_lines};
pub use parser::{parse_command, parse_literal};

use ylang_common::{Dialect, Instruction};

/// Classify every command line of `text` without executing anything.
///
/// Returns the instructions in order, or the first failure together with
/// its 1-based physical line number. Block contents are plain text values
/// at this stage and are not inspected.
pub fn check(text: &str, dialect: Dialect) -> Result<Vec<Instruction>, (usize, SyntaxError)> {
    numbered_lines(text)
        .into_iter()
        .map(|(line_num, line)| parse_command(line, dialect).map_err(|e| (line_num, e)))
        .collect()
}
