//! Opcode definitions for the ylang instruction set.
//!
//! Each opcode has one keyword per [`Dialect`]. The order of
//! [`ALL_OPCODES`] is the matching priority used by the dispatcher.

use crate::dialect::Dialect;
use std::fmt;

/// Identifies the operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Stack & output
    /// Push a literal: integer if it looks like one, text otherwise.
    Push,
    /// Pop one value and write its bare form plus a newline.
    Print,

    // Arithmetic
    /// Integer sum, or text concatenation if either operand is text.
    Add,
    /// Pop b, pop a, push a - b. Integers only.
    Sub,
    /// Pop b, pop a, push a * b. Integers only.
    Mul,
    /// Pop b, pop a, push floor(a / b). Zero divisor checked first.
    Div,

    // Variables
    /// Pop a value and bind it to the operand name.
    Store,
    /// Push a copy of the value bound to the operand name.
    Load,

    // Comparison
    /// Pop b, pop a, push 1 if structurally equal.
    Eq,
    /// Pop b, pop a, push 1 if a > b.
    Gt,
    /// Pop b, pop a, push 1 if a < b.
    Lt,

    // Blocks
    /// Pop condition, pop block; run the block if the condition is truthy.
    If,
    /// Pop block; run it `count` times.
    Repeat,

    // Misc
    /// Push a copy of the top value.
    Dup,
    /// Pop text, push it reversed.
    Reverse,
}

/// Argument shape of an opcode's source form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// The whole trimmed command equals the keyword.
    Bare,
    /// The keyword, a space, then a verbatim operand.
    Operand,
}

/// All opcodes, in dispatch priority order.
pub const ALL_OPCODES: [Opcode; 15] = [
    Opcode::Push,
    Opcode::Print,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Store,
    Opcode::Load,
    Opcode::Eq,
    Opcode::Gt,
    Opcode::Lt,
    Opcode::If,
    Opcode::Repeat,
    Opcode::Dup,
    Opcode::Reverse,
];

impl Opcode {
    /// Returns the canonical (English) mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        self.keyword(Dialect::English)
    }

    /// Returns the keyword that introduces this opcode in `dialect`.
    pub fn keyword(&self, dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::English => match self {
                Opcode::Push => "PUSH",
                Opcode::Print => "PRINT",
                Opcode::Add => "ADD",
                Opcode::Sub => "SUB",
                Opcode::Mul => "MUL",
                Opcode::Div => "DIV",
                Opcode::Store => "STORE",
                Opcode::Load => "LOAD",
                Opcode::Eq => "EQ",
                Opcode::Gt => "GT",
                Opcode::Lt => "LT",
                Opcode::If => "IF",
                Opcode::Repeat => "REPEAT",
                Opcode::Dup => "DUP",
                Opcode::Reverse => "REVERSE",
            },
            Dialect::Yohan => match self {
                Opcode::Push => "요한아",
                Opcode::Print => "요한아 출력해",
                Opcode::Add => "요한아 더해",
                Opcode::Sub => "요한아 빼",
                Opcode::Mul => "요한아 곱해",
                Opcode::Div => "요한아 나눠",
                Opcode::Store => "요한아 저장해",
                Opcode::Load => "요한아 불러와",
                Opcode::Eq => "요한아 같니",
                Opcode::Gt => "요한아 크니",
                Opcode::Lt => "요한아 작니",
                Opcode::If => "요한아 만약",
                Opcode::Repeat => "요한아 반복해",
                Opcode::Dup => "요한아 복사해",
                Opcode::Reverse => "요한아 거꾸로해",
            },
        }
    }

    /// Returns the argument shape of this opcode.
    pub fn form(&self) -> Form {
        match self {
            Opcode::Push | Opcode::Store | Opcode::Load | Opcode::Repeat => Form::Operand,
            _ => Form::Bare,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
