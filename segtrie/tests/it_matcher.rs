//! End-to-end matcher behavior through the public surface, driven by
//! text-file dictionaries.

use std::fs;

use segtrie::DictMatcher;

fn matcher_from_lines(lines: &[&str]) -> DictMatcher {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dict.txt");
    fs::write(&path, lines.join("\n")).unwrap();
    DictMatcher::from_txt_file(&path).unwrap()
}

#[test]
fn segmentation_scenarios_from_text_dictionary() {
    let m = matcher_from_lines(&["foo", "bar", "foobar"]);

    assert_eq!(m.search("foobar"), vec!["foo", "foobar", "bar"]);
    assert_eq!(m.search_forward_shortest("foobar"), vec!["foo", "bar"]);
    assert_eq!(m.search_forward_longest("foobar"), vec!["foobar"]);
    assert_eq!(
        m.search_forward_longest("foobar foobar"),
        vec!["foobar", "foobar"]
    );
}

#[test]
fn cjk_dictionary_segmentation() {
    let m = matcher_from_lines(&["赶集网", "啥都有", "赶集网，啥都有"]);

    assert_eq!(m.longest_prefix("赶集网，啥都有。"), "赶集网，啥都有");
    assert_eq!(
        m.search("赶集网，啥都有"),
        vec!["赶集网", "赶集网，啥都有", "啥都有"]
    );
    assert_eq!(
        m.search_forward_shortest("赶集网，啥都有"),
        vec!["赶集网", "啥都有"]
    );
}

#[test]
fn delete_then_scan_skips_removed_key() {
    let mut m = matcher_from_lines(&["foo", "bar", "foobar"]);
    assert!(m.delete("foobar").unwrap());

    assert_eq!(m.search("foobar"), vec!["foo", "bar"]);
    assert_eq!(m.search_forward_longest("foobar"), vec!["foo", "bar"]);
}

#[test]
fn forward_scans_never_overlap() {
    let m = matcher_from_lines(&["ab", "ba", "aba", "bab"]);
    let text = "abababab";

    for scan in [
        m.search_forward_shortest(text),
        m.search_forward_longest(text),
    ] {
        // Matches re-concatenate into a subsequence of non-overlapping
        // spans: replaying them left to right must consume the text in
        // order.
        let mut cursor = 0;
        for tok in &scan {
            let found = text[cursor..].find(tok.as_str()).unwrap();
            cursor += found + tok.len();
        }
        assert!(cursor <= text.len());
        for tok in &scan {
            assert!(m.contains(tok));
        }
    }
}

#[test]
fn mutation_after_load_is_visible_to_queries() {
    let mut m = matcher_from_lines(&["foo"]);
    m.store("food").unwrap();

    assert_eq!(m.prefixes("foodie"), vec!["foo", "food"]);
    assert_eq!(m.longest_prefix("foodie"), "food");
    assert!(m.has_keys_with_prefix("food"));
}
