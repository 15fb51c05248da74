use std::fmt;
use std::process;

use segtrie::TrieError;

pub const EXIT_ERROR: i32 = 1;
/// A lookup that completes but finds nothing (`match`, `has-prefix`),
/// distinct from [`EXIT_ERROR`] so scripts can tell the two apart.
pub const EXIT_NO_MATCH: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Error from the segtrie library (I/O, decode, key bounds).
    Trie(TrieError),
    /// Bad file path or unusable input.
    Input(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Trie(e) => write!(f, "error: {e}"),
            CliError::Input(msg) => write!(f, "error: {msg}"),
        }
    }
}

impl From<TrieError> for CliError {
    fn from(e: TrieError) -> Self {
        CliError::Trie(e)
    }
}

/// Print the error to stderr and exit non-zero.
pub fn exit_with_error(e: CliError) -> ! {
    eprintln!("{e}");
    process::exit(EXIT_ERROR);
}
