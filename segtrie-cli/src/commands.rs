use std::path::Path;

use segtrie::DictMatcher;

use crate::cli::ScanMode;
use crate::error::{CliError, EXIT_NO_MATCH};

pub fn compile(txt: &Path, out: &Path) -> Result<(), CliError> {
    let matcher = DictMatcher::from_txt_file(txt)?;
    matcher.save_to_file(out)?;
    println!(
        "compiled {} keys: {} -> {}",
        matcher.len(),
        txt.display(),
        out.display()
    );
    Ok(())
}

pub fn exact_match(dict: &Path, word: &str) -> Result<(), CliError> {
    let matcher = load(dict)?;
    if matcher.contains(word) {
        println!("match");
        Ok(())
    } else {
        println!("no match");
        std::process::exit(EXIT_NO_MATCH);
    }
}

pub fn prefixes(dict: &Path, word: &str) -> Result<(), CliError> {
    let matcher = load(dict)?;
    for p in matcher.prefixes(word) {
        println!("{p}");
    }
    Ok(())
}

pub fn longest_prefix(dict: &Path, word: &str) -> Result<(), CliError> {
    let matcher = load(dict)?;
    println!("{}", matcher.longest_prefix(word));
    Ok(())
}

pub fn has_prefix(dict: &Path, word: &str) -> Result<(), CliError> {
    let matcher = load(dict)?;
    if matcher.has_keys_with_prefix(word) {
        println!("yes");
        Ok(())
    } else {
        println!("no");
        std::process::exit(EXIT_NO_MATCH);
    }
}

pub fn segment(dict: &Path, mode: ScanMode, text: &str) -> Result<(), CliError> {
    let matcher = load(dict)?;
    let tokens = match mode {
        ScanMode::All => matcher.search(text),
        ScanMode::Shortest => matcher.search_forward_shortest(text),
        ScanMode::Longest => matcher.search_forward_longest(text),
    };
    for tok in tokens {
        println!("{tok}");
    }
    Ok(())
}

pub fn stats(dict: &Path) -> Result<(), CliError> {
    let matcher = load(dict)?;
    let bytes = std::fs::metadata(dict)
        .map_err(|e| CliError::Input(format!("{}: {e}", dict.display())))?
        .len();
    println!("keys:  {}", matcher.len());
    println!("bytes: {bytes}");
    Ok(())
}

fn load(dict: &Path) -> Result<DictMatcher, CliError> {
    DictMatcher::from_dict_file(dict).map_err(CliError::from)
}
