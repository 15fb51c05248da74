//! Dictionary-backed trie matcher for text segmentation.
//!
//! Stores a set of variable-length words in an arena trie, persists them in
//! a compact binary form (see [`format`] for the STR1 layout), and answers
//! four query families:
//!
//! - exact membership ([`DictMatcher::contains`])
//! - prefix enumeration ([`DictMatcher::prefixes`],
//!   [`DictMatcher::longest_prefix`], [`DictMatcher::has_keys_with_prefix`])
//! - exhaustive scanning ([`DictMatcher::search`])
//! - non-overlapping forward segmentation
//!   ([`DictMatcher::search_forward_shortest`],
//!   [`DictMatcher::search_forward_longest`])
//!
//! Matching is code-point-at-a-time: one trie edge per Unicode scalar, no
//! further Unicode awareness. Keys are bounded at [`MAX_KEY_LEN`] code
//! points.
//!
//! ```
//! use segtrie::DictMatcher;
//!
//! let mut dict = DictMatcher::new().unwrap();
//! dict.store("foo").unwrap();
//! dict.store("bar").unwrap();
//! dict.store("foobar").unwrap();
//!
//! assert_eq!(dict.search("foobar"), vec!["foo", "foobar", "bar"]);
//! assert_eq!(dict.search_forward_shortest("foobar"), vec!["foo", "bar"]);
//! assert_eq!(dict.search_forward_longest("foobar"), vec!["foobar"]);
//! ```

pub mod alpha;
pub mod cursor;
pub mod error;
pub mod format;
pub mod matcher;
pub mod trie;

pub use alpha::{AlphaMap, Symbol};
pub use cursor::TrieCursor;
pub use error::{Result, TrieError};
pub use matcher::DictMatcher;
pub use trie::{Trie, MAX_KEY_LEN};
