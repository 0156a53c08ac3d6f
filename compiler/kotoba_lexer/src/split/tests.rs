use super::*;
use pretty_assertions::assert_eq;

fn texts<'a>(fragments: &[Fragment<'a>]) -> Vec<&'a str> {
    fragments.iter().map(|f| f.text).collect()
}

#[test]
fn keeps_keywords_as_fragments() {
    let fragments = split_on_keywords("aを1とする", &["を", "とする"]);
    assert_eq!(texts(&fragments), vec!["a", "を", "1", "とする"]);
    assert_eq!(
        fragments.iter().map(|f| f.keyword).collect::<Vec<_>>(),
        vec![false, true, false, true]
    );
}

#[test]
fn adjacent_keywords_leave_no_empty_fragments() {
    let fragments = split_on_keywords("「」", &["「", "」"]);
    assert_eq!(texts(&fragments), vec!["「", "」"]);
}

#[test]
fn earlier_keyword_fragments_are_not_resplit() {
    // "ならば" is split out first, so the later "な" needle cannot touch it.
    let fragments = split_on_keywords("xならばな", &["ならば", "な"]);
    assert_eq!(texts(&fragments), vec!["x", "ならば", "な"]);
}

#[test]
fn repeated_occurrences() {
    let fragments = split_on_keywords("aをbをc", &["を"]);
    assert_eq!(texts(&fragments), vec!["a", "を", "b", "を", "c"]);
}

#[test]
fn empty_input() {
    assert!(split_on_keywords("", &["を"]).is_empty());
}
