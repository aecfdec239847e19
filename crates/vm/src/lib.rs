//! ylang machine: executes source text one command line at a time.
//!
//! The machine has:
//! - An operand stack of [`Value`]s
//! - A flat variable store
//! - An output stream that `PRINT` writes to
//!
//! `IF` and `REPEAT` pop a text value and run its lines as a block by
//! re-entering the same dispatcher, so blocks nest freely up to
//! [`Config::max_block_depth`].
//!
//! # Usage
//!
//! ```
//! use ylang_vm::{run_with_output, Config};
//!
//! let mut out = Vec::new();
//! run_with_output("PUSH 3\nPUSH 4\nADD\nPRINT\n", &Config::default(), &mut out).unwrap();
//! assert_eq!(out, b"7\n");
//! ```

pub mod config;
pub mod error;
pub mod execute;
pub mod machine;

pub use config::Config;
pub use error::RuntimeError;
pub use machine::Machine;

use std::io::Write;
use ylang_common::Value;

/// Run source text, printing to stdout.
///
/// # Errors
///
/// Returns the first [`RuntimeError`]; nothing after it executes.
pub fn run(source: &str, config: &Config) -> Result<(), RuntimeError> {
    let stdout = std::io::stdout();
    run_with_output(source, config, stdout.lock()).map(|_| ())
}

/// Run source text on a fresh machine, printing to `out`.
///
/// Returns the final stack, bottom first.
///
/// # Errors
///
/// Returns the first [`RuntimeError`]; nothing after it executes.
pub fn run_with_output<W: Write>(
    source: &str,
    config: &Config,
    out: W,
) -> Result<Vec<Value>, RuntimeError> {
    let mut vm = Machine::new(config.clone(), out);
    vm.run(source)?;
    vm.out.flush()?;
    Ok(vm.stack)
}
