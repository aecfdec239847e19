//! Classified instructions.
//!
//! An [`Instruction`] is one command line after it has been matched against
//! the grammar: the opcode plus its already-extracted operand. Push literals
//! are classified into a [`Value`]; `REPEAT` counts are parsed.

use crate::dialect::Dialect;
use crate::opcode::Opcode;
use crate::value::Value;
use std::fmt;

/// A single classified ylang instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Push a literal value.
    Push(Value),
    Print,
    Add,
    Sub,
    Mul,
    Div,
    /// Bind the popped value to this name.
    Store(String),
    /// Push a copy of the value bound to this name.
    Load(String),
    Eq,
    Gt,
    Lt,
    If,
    /// Run the popped block this many times.
    Repeat(i64),
    Dup,
    Reverse,
}

impl Instruction {
    /// The opcode this instruction executes.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Push(_) => Opcode::Push,
            Instruction::Print => Opcode::Print,
            Instruction::Add => Opcode::Add,
            Instruction::Sub => Opcode::Sub,
            Instruction::Mul => Opcode::Mul,
            Instruction::Div => Opcode::Div,
            Instruction::Store(_) => Opcode::Store,
            Instruction::Load(_) => Opcode::Load,
            Instruction::Eq => Opcode::Eq,
            Instruction::Gt => Opcode::Gt,
            Instruction::Lt => Opcode::Lt,
            Instruction::If => Opcode::If,
            Instruction::Repeat(_) => Opcode::Repeat,
            Instruction::Dup => Opcode::Dup,
            Instruction::Reverse => Opcode::Reverse,
        }
    }

    /// Render this instruction as a source line in `dialect`.
    ///
    /// Push literals are written verbatim, so a text literal that itself looks
    /// like an integer (e.g. `Text("12")`) does not render back to the same
    /// instruction.
    pub fn render(&self, dialect: Dialect) -> String {
        let keyword = self.opcode().keyword(dialect);
        match self {
            Instruction::Push(value) => format!("{keyword} {value}"),
            Instruction::Store(name) | Instruction::Load(name) => format!("{keyword} {name}"),
            Instruction::Repeat(count) => format!("{keyword} {count}"),
            _ => keyword.to_string(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Dialect::English))
    }
}
