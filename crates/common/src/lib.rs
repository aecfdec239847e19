//! ylang common types.
//!
//! This crate provides the foundational data structures shared by the
//! syntax and vm crates:
//!
//! - [`Value`]: the two-variant runtime value (integer or text)
//! - [`Opcode`]: the fifteen instructions, with per-dialect keywords
//! - [`Dialect`]: English keywords or the Korean `요한아` call words
//! - [`Instruction`]: a classified command line
//! - [`DialectError`]: errors from parsing a dialect name

pub mod dialect;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod value;

// Re-export commonly used types at the crate root.
pub use dialect::Dialect;
pub use error::DialectError;
pub use instruction::Instruction;
pub use opcode::{Form, Opcode};
pub use value::Value;
