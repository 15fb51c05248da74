//! Error types for trie and dictionary operations.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrieError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("decode error: {0}")]
    Decode(String),

    /// Key exceeds the 256-code-point bound. The operation is a no-op.
    #[error("key too long: {len} code points (max {max})")]
    KeyTooLong { len: usize, max: usize },

    /// Code point falls outside the configured alphabet range.
    #[error("code point U+{codepoint:04X} outside the configured alphabet")]
    OutOfDomain { codepoint: u32 },
}

pub type Result<T> = std::result::Result<T, TrieError>;
