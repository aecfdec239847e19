//! Machine configuration.
//!
//! Configuration specifies limits and keyword spelling only; enforcement is
//! handled by the machine.

use ylang_common::Dialect;

/// Default maximum nesting of IF/REPEAT blocks.
pub const DEFAULT_MAX_BLOCK_DEPTH: usize = 256;

/// Machine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Keyword spelling used for top-level lines and for blocks.
    pub dialect: Dialect,

    /// Maximum nesting of block execution.
    pub max_block_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dialect: Dialect::English,
            max_block_depth: DEFAULT_MAX_BLOCK_DEPTH,
        }
    }
}

impl Config {
    /// Create a configuration with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Same configuration with a different dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Same configuration with a different block nesting limit.
    pub fn with_max_block_depth(mut self, max_block_depth: usize) -> Self {
        self.max_block_depth = max_block_depth;
        self
    }
}
