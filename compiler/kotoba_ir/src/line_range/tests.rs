use super::*;
use pretty_assertions::assert_eq;

#[test]
fn single_line_display() {
    assert_eq!(LineRange::single(3).to_string(), "line 3");
}

#[test]
fn multi_line_display() {
    assert_eq!(LineRange::new(2, 5).to_string(), "lines 2-5");
}

#[test]
fn new_reorders_backwards_bounds() {
    let range = LineRange::new(9, 4);
    assert_eq!(range.start, 4);
    assert_eq!(range.end, 9);
}

#[test]
fn merge_covers_both() {
    let merged = LineRange::single(7).merge(LineRange::new(2, 3));
    assert_eq!(merged, LineRange::new(2, 7));
    assert!(!merged.is_single_line());
}
