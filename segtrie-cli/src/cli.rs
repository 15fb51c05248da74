use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "segtrie", about = "Dictionary trie compiler and text segmenter", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a newline-separated word list into a binary dictionary
    Compile {
        /// Text word list, one key per line
        txt: PathBuf,

        /// Output path for the binary dictionary
        out: PathBuf,
    },

    /// Exact-match a word against a dictionary
    Match {
        /// Binary dictionary path
        #[arg(long)]
        dict: PathBuf,

        word: String,
    },

    /// List the stored keys that are prefixes of WORD
    Prefixes {
        #[arg(long)]
        dict: PathBuf,

        word: String,
    },

    /// Print the longest stored key that is a prefix of WORD
    LongestPrefix {
        #[arg(long)]
        dict: PathBuf,

        word: String,
    },

    /// Whether any stored key starts with WORD
    HasPrefix {
        #[arg(long)]
        dict: PathBuf,

        word: String,
    },

    /// Segment TEXT against a dictionary, one token per line
    Segment {
        #[arg(long)]
        dict: PathBuf,

        /// Scan variant
        #[arg(long, value_enum, default_value = "longest")]
        mode: ScanMode,

        text: String,
    },

    /// Show dictionary stats
    Stats {
        /// Binary dictionary path
        dict: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScanMode {
    /// Every occurrence of every key, overlaps included
    All,
    /// Forward shortest-match, non-overlapping
    Shortest,
    /// Forward longest-match, non-overlapping
    Longest,
}
