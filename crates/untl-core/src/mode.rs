//! Run modes and inference from the invocation name.
//!
//! The same binary is installed as `untl`, `whle` and `repeat`; the name it is
//! started under selects the default mode. Explicit flags always win.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// Invocation name that selects [`RunMode::While`].
pub const WHILE_ALIAS: &str = "whle";
/// Invocation name that selects [`RunMode::Repeat`].
pub const REPEAT_ALIAS: &str = "repeat";

/// Retry policy variant for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Stop once the child returns the target status.
    #[default]
    Until,
    /// Stop once the child returns anything but the target status.
    While,
    /// Ignore the status; only the attempt limit ends the loop.
    Repeat,
}

impl RunMode {
    /// Infer the mode from `argv[0]`. Only the basename is compared.
    pub fn from_program_name(name: &OsStr) -> RunMode {
        match Path::new(name).file_name().and_then(OsStr::to_str) {
            Some(WHILE_ALIAS) => RunMode::While,
            Some(REPEAT_ALIAS) => RunMode::Repeat,
            _ => RunMode::Until,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunMode::Until => "until",
            RunMode::While => "while",
            RunMode::Repeat => "repeat",
        };
        f.write_str(s)
    }
}
