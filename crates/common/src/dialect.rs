//! Keyword dialects.
//!
//! The same instruction set can be spelled in canonical English keywords
//! or in the Korean call-word style (`요한아 출력해`).

use crate::error::DialectError;
use std::fmt;
use std::str::FromStr;

/// A keyword spelling for the instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// `PUSH`, `PRINT`, `ADD`, ...
    #[default]
    English,
    /// `요한아 <literal>`, `요한아 출력해`, `요한아 더해`, ...
    Yohan,
}

/// All dialects, in definition order.
pub const ALL_DIALECTS: [Dialect; 2] = [Dialect::English, Dialect::Yohan];

impl Dialect {
    /// Name accepted by [`FromStr`] and printed by [`Display`](fmt::Display).
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::English => "english",
            Dialect::Yohan => "yohan",
        }
    }

    /// Words that are not instructions but must never be read as a push.
    pub fn reserved_words(&self) -> &'static [&'static str] {
        match self {
            Dialect::English => &[],
            Dialect::Yohan => &["요한아 조건"],
        }
    }

    /// Line printed by the CLI before running, if the dialect has one.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Dialect::English => None,
            Dialect::Yohan => Some("요한랭 인터프리터 실행 중..."),
        }
    }

    /// Line printed by the CLI after a successful run.
    pub fn completion_marker(&self) -> &'static str {
        match self {
            Dialect::English => "Done.",
            Dialect::Yohan => "실행 완료!",
        }
    }

    /// Prefix of the message for a source file that cannot be read.
    pub fn read_error_prefix(&self) -> &'static str {
        match self {
            Dialect::English => "error: cannot read",
            Dialect::Yohan => "파일을 읽는 중 오류 발생:",
        }
    }

    /// Prefix of the message for an error that aborts a run.
    pub fn runtime_error_prefix(&self) -> &'static str {
        match self {
            Dialect::English => "runtime error:",
            Dialect::Yohan => "실행 오류:",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_DIALECTS
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| DialectError::Unknown(s.to_string()))
    }
}
