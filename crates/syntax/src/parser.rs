//! Instruction grammar: command line → [`Instruction`].
//!
//! Rules are tried in [`ALL_OPCODES`] order and the first match wins. The
//! push rule comes first but is guarded so it never claims a line that
//! begins with another keyword of the dialect.

use crate::error::SyntaxError;
use ylang_common::opcode::ALL_OPCODES;
use ylang_common::{Dialect, Form, Instruction, Opcode, Value};

/// Classify one command line.
///
/// The line is expected to come from the line splitter (trimmed, non-empty,
/// not a comment), but surrounding whitespace is tolerated.
pub fn parse_command(command: &str, dialect: Dialect) -> Result<Instruction, SyntaxError> {
    let command = command.trim();

    for opcode in ALL_OPCODES {
        let keyword = opcode.keyword(dialect);
        let matched = match opcode.form() {
            Form::Bare if command == keyword => bare(opcode),
            Form::Bare => None,
            Form::Operand => match strip_keyword(command, keyword) {
                Some(operand) => with_operand(opcode, operand, command, dialect)?,
                None => None,
            },
        };
        if let Some(instr) = matched {
            return Ok(instr);
        }
    }

    Err(SyntaxError::UnknownInstruction {
        command: command.to_string(),
    })
}

/// Classify a push literal.
///
/// Only decimal digits, optionally preceded by a single `-`, make an
/// integer. Everything else (including `+5`, `1.5`, `-`) is text.
pub fn parse_literal(token: &str) -> Result<Value, SyntaxError> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Value::text(token));
    }
    token
        .parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| SyntaxError::IntegerLiteralOutOfRange {
            token: token.to_string(),
        })
}

fn bare(opcode: Opcode) -> Option<Instruction> {
    let instr = match opcode {
        Opcode::Print => Instruction::Print,
        Opcode::Add => Instruction::Add,
        Opcode::Sub => Instruction::Sub,
        Opcode::Mul => Instruction::Mul,
        Opcode::Div => Instruction::Div,
        Opcode::Eq => Instruction::Eq,
        Opcode::Gt => Instruction::Gt,
        Opcode::Lt => Instruction::Lt,
        Opcode::If => Instruction::If,
        Opcode::Dup => Instruction::Dup,
        Opcode::Reverse => Instruction::Reverse,
        Opcode::Push | Opcode::Store | Opcode::Load | Opcode::Repeat => return None,
    };
    Some(instr)
}

/// Build an operand instruction. `None` lets the next rule try the line.
fn with_operand(
    opcode: Opcode,
    operand: &str,
    command: &str,
    dialect: Dialect,
) -> Result<Option<Instruction>, SyntaxError> {
    let instr = match opcode {
        Opcode::Push if is_other_keyword(command, dialect) => return Ok(None),
        Opcode::Push => Instruction::Push(parse_literal(operand)?),
        Opcode::Store => Instruction::Store(operand.to_string()),
        Opcode::Load => Instruction::Load(operand.to_string()),
        Opcode::Repeat => {
            let count = operand
                .parse::<i64>()
                .map_err(|_| SyntaxError::InvalidRepeatCount {
                    count: operand.to_string(),
                })?;
            Instruction::Repeat(count)
        }
        _ => return Ok(None),
    };
    Ok(Some(instr))
}

/// `<keyword> <operand>` → trimmed operand.
fn strip_keyword<'a>(command: &'a str, keyword: &str) -> Option<&'a str> {
    let operand = command.strip_prefix(keyword)?.strip_prefix(' ')?.trim();
    (!operand.is_empty()).then_some(operand)
}

/// Whether the command begins with any non-push keyword or reserved word.
fn is_other_keyword(command: &str, dialect: Dialect) -> bool {
    ALL_OPCODES
        .iter()
        .filter(|op| **op != Opcode::Push)
        .map(|op| op.keyword(dialect))
        .chain(dialect.reserved_words().iter().copied())
        .any(|keyword| command.starts_with(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english(command: &str) -> Result<Instruction, SyntaxError> {
        parse_command(command, Dialect::English)
    }

    fn yohan(command: &str) -> Result<Instruction, SyntaxError> {
        parse_command(command, Dialect::Yohan)
    }

    #[test]
    fn push_integer() {
        assert_eq!(english("PUSH 42"), Ok(Instruction::Push(Value::Integer(42))));
        assert_eq!(english("PUSH -7"), Ok(Instruction::Push(Value::Integer(-7))));
        assert_eq!(english("PUSH 007"), Ok(Instruction::Push(Value::Integer(7))));
    }

    #[test]
    fn push_text() {
        assert_eq!(english("PUSH hello"), Ok(Instruction::Push(Value::text("hello"))));
        assert_eq!(english("PUSH +5"), Ok(Instruction::Push(Value::text("+5"))));
        assert_eq!(english("PUSH 1.5"), Ok(Instruction::Push(Value::text("1.5"))));
        assert_eq!(english("PUSH -"), Ok(Instruction::Push(Value::text("-"))));
        assert_eq!(english("PUSH --1"), Ok(Instruction::Push(Value::text("--1"))));
    }

    #[test]
    fn push_keeps_interior_spacing() {
        assert_eq!(
            english("PUSH   hello   world"),
            Ok(Instruction::Push(Value::text("hello   world")))
        );
    }

    #[test]
    fn push_keyword_as_text() {
        assert_eq!(english("PUSH PRINT"), Ok(Instruction::Push(Value::text("PRINT"))));
    }

    #[test]
    fn push_out_of_range() {
        assert_eq!(
            english("PUSH 9223372036854775808"),
            Err(SyntaxError::IntegerLiteralOutOfRange {
                token: "9223372036854775808".to_string()
            })
        );
        assert_eq!(
            english("PUSH -9223372036854775808"),
            Ok(Instruction::Push(Value::Integer(i64::MIN)))
        );
    }

    #[test]
    fn push_without_operand_is_unknown() {
        assert!(matches!(
            english("PUSH"),
            Err(SyntaxError::UnknownInstruction { .. })
        ));
    }

    #[test]
    fn bare_instructions() {
        let cases = [
            ("PRINT", Instruction::Print),
            ("ADD", Instruction::Add),
            ("SUB", Instruction::Sub),
            ("MUL", Instruction::Mul),
            ("DIV", Instruction::Div),
            ("EQ", Instruction::Eq),
            ("GT", Instruction::Gt),
            ("LT", Instruction::Lt),
            ("IF", Instruction::If),
            ("DUP", Instruction::Dup),
            ("REVERSE", Instruction::Reverse),
        ];
        for (text, expected) in cases {
            assert_eq!(english(text), Ok(expected), "{text}");
        }
    }

    #[test]
    fn bare_match_is_exact() {
        assert!(matches!(
            english("ADD 1"),
            Err(SyntaxError::UnknownInstruction { .. })
        ));
        assert!(matches!(
            english("print"),
            Err(SyntaxError::UnknownInstruction { .. })
        ));
    }

    #[test]
    fn store_and_load_names() {
        assert_eq!(english("STORE x"), Ok(Instruction::Store("x".to_string())));
        assert_eq!(
            english("LOAD  my var "),
            Ok(Instruction::Load("my var".to_string()))
        );
    }

    #[test]
    fn store_without_name_is_unknown() {
        assert_eq!(
            english("STORE"),
            Err(SyntaxError::UnknownInstruction {
                command: "STORE".to_string()
            })
        );
    }

    #[test]
    fn repeat_count() {
        assert_eq!(english("REPEAT 3"), Ok(Instruction::Repeat(3)));
        assert_eq!(english("REPEAT -2"), Ok(Instruction::Repeat(-2)));
        assert_eq!(english("REPEAT 0"), Ok(Instruction::Repeat(0)));
    }

    #[test]
    fn repeat_invalid_count() {
        assert_eq!(
            english("REPEAT many"),
            Err(SyntaxError::InvalidRepeatCount {
                count: "many".to_string()
            })
        );
    }

    #[test]
    fn unknown_instruction_names_command() {
        assert_eq!(
            english("FROBNICATE now"),
            Err(SyntaxError::UnknownInstruction {
                command: "FROBNICATE now".to_string()
            })
        );
    }

    #[test]
    fn yohan_push_and_print() {
        assert_eq!(yohan("요한아 5"), Ok(Instruction::Push(Value::Integer(5))));
        assert_eq!(yohan("요한아 안녕"), Ok(Instruction::Push(Value::text("안녕"))));
        assert_eq!(yohan("요한아 출력해"), Ok(Instruction::Print));
    }

    #[test]
    fn yohan_operand_forms() {
        assert_eq!(
            yohan("요한아 저장해 이름"),
            Ok(Instruction::Store("이름".to_string()))
        );
        assert_eq!(
            yohan("요한아 불러와 이름"),
            Ok(Instruction::Load("이름".to_string()))
        );
        assert_eq!(yohan("요한아 반복해 4"), Ok(Instruction::Repeat(4)));
    }

    #[test]
    fn yohan_guard_rejects_keyword_prefixes() {
        assert_eq!(
            yohan("요한아 더해요"),
            Err(SyntaxError::UnknownInstruction {
                command: "요한아 더해요".to_string()
            })
        );
        assert!(matches!(
            yohan("요한아 조건"),
            Err(SyntaxError::UnknownInstruction { .. })
        ));
    }

    #[test]
    fn dialects_do_not_mix() {
        assert!(matches!(
            yohan("PRINT"),
            Err(SyntaxError::UnknownInstruction { .. })
        ));
        assert!(matches!(
            english("요한아 출력해"),
            Err(SyntaxError::UnknownInstruction { .. })
        ));
    }

    #[test]
    fn form_mismatch_yields_no_instruction() {
        assert_eq!(bare(Opcode::Store), None);
        assert_eq!(
            with_operand(Opcode::Add, "1", "ADD 1", Dialect::English),
            Ok(None)
        );
    }

    #[test]
    fn render_then_parse() {
        let instrs = [
            Instruction::Push(Value::Integer(-3)),
            Instruction::Push(Value::text("abc")),
            Instruction::Store("v".to_string()),
            Instruction::Repeat(9),
            Instruction::Reverse,
        ];
        for dialect in ylang_common::dialect::ALL_DIALECTS {
            for instr in &instrs {
                let line = instr.render(dialect);
                assert_eq!(parse_command(&line, dialect).as_ref(), Ok(instr), "{line}");
            }
        }
    }
}
