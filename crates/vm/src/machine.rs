//! Machine state: operand stack, variable store, output stream.

use crate::config::Config;
use crate::error::RuntimeError;
use std::collections::HashMap;
use std::io::Write;
use ylang_common::Value;

/// The ylang machine.
///
/// Owns everything one run mutates. Instruction handlers and recursive block
/// execution all receive the same `&mut Machine`; there is no global state.
/// `PRINT` writes to `out`.
pub struct Machine<W: Write> {
    /// Limits and keyword dialect.
    pub(crate) config: Config,
    /// Operand stack, top at the end.
    pub(crate) stack: Vec<Value>,
    /// Variable store. One flat namespace for the whole run.
    pub(crate) variables: HashMap<String, Value>,
    /// Destination of PRINT.
    pub(crate) out: W,
    /// Current block nesting, 0 at top level.
    pub(crate) depth: usize,
}

impl<W: Write> Machine<W> {
    /// Create a machine with an empty stack and variable store.
    pub fn new(config: Config, out: W) -> Self {
        Self {
            config,
            stack: Vec::new(),
            variables: HashMap::new(),
            out,
            depth: 0,
        }
    }

    /// Push a value onto the stack. Never fails.
    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Pop a value from the stack.
    pub fn pop(&mut self) -> Result<Value, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow)
    }

    /// Borrow the top value without removing it.
    pub fn peek(&self) -> Result<&Value, RuntimeError> {
        self.stack.last().ok_or(RuntimeError::StackUnderflow)
    }

    /// Bind `name`, replacing any previous binding.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Copy of the value bound to `name`.
    pub fn get_variable(&self, name: &str) -> Result<Value, RuntimeError> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Current stack contents, bottom first.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Consume the machine and hand back its output stream.
    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> Machine<Vec<u8>> {
        Machine::new(Config::default(), Vec::new())
    }

    #[test]
    fn starts_empty() {
        let m = machine();
        assert!(m.stack().is_empty());
        assert_eq!(m.peek(), Err(RuntimeError::StackUnderflow));
    }

    #[test]
    fn push_pop_lifo() {
        let mut m = machine();
        m.push(Value::Integer(1));
        m.push(Value::text("two"));
        assert_eq!(m.peek(), Ok(&Value::text("two")));
        assert_eq!(m.pop(), Ok(Value::text("two")));
        assert_eq!(m.pop(), Ok(Value::Integer(1)));
        assert_eq!(m.pop(), Err(RuntimeError::StackUnderflow));
    }

    #[test]
    fn variables_overwrite() {
        let mut m = machine();
        m.set_variable("x", Value::Integer(1));
        m.set_variable("x", Value::text("one"));
        assert_eq!(m.get_variable("x"), Ok(Value::text("one")));
    }

    #[test]
    fn undefined_variable_names_it() {
        let m = machine();
        assert_eq!(
            m.get_variable("ghost"),
            Err(RuntimeError::UndefinedVariable {
                name: "ghost".to_string()
            })
        );
    }

    #[test]
    fn names_are_verbatim() {
        let mut m = machine();
        m.set_variable("my var", Value::Integer(2));
        assert!(m.get_variable("my var").is_ok());
        assert!(m.get_variable("myvar").is_err());
    }
}
