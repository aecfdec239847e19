//! Line dispatch, instruction handlers, and block execution.

use crate::error::RuntimeError;
use crate::machine::Machine;
use std::io::Write;
use ylang_common::{Instruction, Opcode, Value};
use ylang_syntax::{parse_command, split_lines};

/// If less than this much host stack remains, grow it before entering a block.
const RED_ZONE: usize = 100 * 1024;

/// Host stack allocated per growth step.
const STACK_PER_BLOCK: usize = 1024 * 1024;

impl<W: Write> Machine<W> {
    /// Run source text line by line until the end or the first error.
    pub fn run(&mut self, source: &str) -> Result<(), RuntimeError> {
        for line in split_lines(source) {
            self.dispatch(line)?;
        }
        Ok(())
    }

    /// Classify one command line and execute it.
    pub fn dispatch(&mut self, command: &str) -> Result<(), RuntimeError> {
        let instr = parse_command(command, self.config.dialect)?;
        self.execute(instr)
    }

    /// Execute one classified instruction.
    pub fn execute(&mut self, instr: Instruction) -> Result<(), RuntimeError> {
        tracing::trace!(depth = self.depth, instruction = %instr, "dispatch");

        match instr {
            Instruction::Push(value) => {
                self.push(value);
                Ok(())
            }
            Instruction::Print => self.exec_print(),

            Instruction::Add => self.exec_add(),
            Instruction::Sub => self.exec_binary_arith(Opcode::Sub, i64::checked_sub),
            Instruction::Mul => self.exec_binary_arith(Opcode::Mul, i64::checked_mul),
            Instruction::Div => self.exec_div(),

            Instruction::Store(name) => {
                let value = self.pop()?;
                self.set_variable(name, value);
                Ok(())
            }
            Instruction::Load(name) => {
                let value = self.get_variable(&name)?;
                self.push(value);
                Ok(())
            }

            Instruction::Eq => self.exec_comparison(|a, b| a == b),
            Instruction::Gt => self.exec_comparison(|a, b| a > b),
            Instruction::Lt => self.exec_comparison(|a, b| a < b),

            Instruction::If => self.exec_if(),
            Instruction::Repeat(count) => self.exec_repeat(count),

            Instruction::Dup => {
                let value = self.peek()?.clone();
                self.push(value);
                Ok(())
            }
            Instruction::Reverse => self.exec_reverse(),
        }
    }

    fn exec_print(&mut self) -> Result<(), RuntimeError> {
        let value = self.pop()?;
        writeln!(self.out, "{value}")?;
        Ok(())
    }

    /// Integer sum, otherwise concatenation of both textual forms (a then b).
    fn exec_add(&mut self) -> Result<(), RuntimeError> {
        let b = self.pop()?;
        let a = self.pop()?;
        let result = match (a, b) {
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(
                a.checked_add(b)
                    .ok_or(RuntimeError::IntegerOverflow {
                        opcode: Opcode::Add,
                    })?,
            ),
            (a, b) => Value::Text(format!("{a}{b}")),
        };
        self.push(result);
        Ok(())
    }

    fn exec_binary_arith(
        &mut self,
        opcode: Opcode,
        op: fn(i64, i64) -> Option<i64>,
    ) -> Result<(), RuntimeError> {
        let b = self.pop()?;
        let a = self.pop()?;
        match (a, b) {
            (Value::Integer(a), Value::Integer(b)) => {
                let result = op(a, b).ok_or(RuntimeError::IntegerOverflow { opcode })?;
                self.push(Value::Integer(result));
                Ok(())
            }
            _ => Err(RuntimeError::TypeMismatch { opcode }),
        }
    }

    fn exec_div(&mut self) -> Result<(), RuntimeError> {
        let b = self.pop()?;
        let a = self.pop()?;
        // Zero divisor wins over a type mismatch.
        if b == Value::Integer(0) {
            return Err(RuntimeError::DivisionByZero);
        }
        match (a, b) {
            (Value::Integer(a), Value::Integer(b)) => {
                let result = floor_div(a, b).ok_or(RuntimeError::IntegerOverflow {
                    opcode: Opcode::Div,
                })?;
                self.push(Value::Integer(result));
                Ok(())
            }
            _ => Err(RuntimeError::TypeMismatch {
                opcode: Opcode::Div,
            }),
        }
    }

    fn exec_comparison(&mut self, cmp: fn(&Value, &Value) -> bool) -> Result<(), RuntimeError> {
        let b = self.pop()?;
        let a = self.pop()?;
        self.push(Value::from_bool(cmp(&a, &b)));
        Ok(())
    }

    fn exec_reverse(&mut self) -> Result<(), RuntimeError> {
        match self.pop()? {
            Value::Text(s) => {
                self.push(Value::Text(s.chars().rev().collect()));
                Ok(())
            }
            Value::Integer(_) => Err(RuntimeError::TypeMismatch {
                opcode: Opcode::Reverse,
            }),
        }
    }

    // ---- Blocks ----

    /// Pop condition, pop block; run the block once if the condition is truthy.
    ///
    /// There is no else branch. A falsy condition discards both values
    /// without looking at the block.
    fn exec_if(&mut self) -> Result<(), RuntimeError> {
        let condition = self.pop()?;
        let block = self.pop()?;
        if !condition.is_truthy() {
            return Ok(());
        }
        match block {
            Value::Text(body) => self.run_block(&body, 1),
            Value::Integer(_) => Err(RuntimeError::TypeMismatch { opcode: Opcode::If }),
        }
    }

    /// Pop block; run it `count` times. Non-positive counts run nothing.
    fn exec_repeat(&mut self, count: i64) -> Result<(), RuntimeError> {
        match self.pop()? {
            Value::Text(body) => self.run_block(&body, count),
            Value::Integer(_) => Err(RuntimeError::TypeMismatch {
                opcode: Opcode::Repeat,
            }),
        }
    }

    /// Re-enter line dispatch for a block body, `times` times in a row.
    ///
    /// The body is split once and replayed. Nested IF/REPEAT inside the body
    /// recurse back into here through [`Machine::dispatch`].
    fn run_block(&mut self, body: &str, times: i64) -> Result<(), RuntimeError> {
        if times <= 0 {
            return Ok(());
        }
        let limit = self.config.max_block_depth;
        if self.depth >= limit {
            return Err(RuntimeError::BlockDepthExceeded { limit });
        }

        let lines = split_lines(body);
        if lines.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            depth = self.depth + 1,
            times,
            lines = lines.len(),
            "enter block"
        );

        self.depth += 1;
        let result = stacker::maybe_grow(RED_ZONE, STACK_PER_BLOCK, || -> Result<(), RuntimeError> {
            for _ in 0..times {
                for line in &lines {
                    self.dispatch(line)?;
                }
            }
            Ok(())
        });
        self.depth -= 1;

        tracing::debug!(depth = self.depth + 1, ok = result.is_ok(), "leave block");
        result
    }
}

/// Integer division rounding toward negative infinity.
///
/// `None` on a zero divisor or on `i64::MIN / -1`.
pub(crate) fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Some(q - 1)
    } else {
        Some(q)
    }
}
