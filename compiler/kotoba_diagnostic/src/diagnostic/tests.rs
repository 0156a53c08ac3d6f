use super::*;
use pretty_assertions::assert_eq;

#[test]
fn render_with_path_and_single_line() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("`「` is never closed")
        .with_lines(LineRange::single(3));
    assert_eq!(
        diag.render(Some("hello.kt")),
        "error[E1003]: `「` is never closed\n  --> hello.kt: line 3\n"
    );
}

#[test]
fn render_line_range_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("cannot interpret `abc`")
        .with_lines(LineRange::new(2, 4))
        .with_note("syntax error");
    assert_eq!(
        diag.render(None),
        "error[E1001]: cannot interpret `abc`\n  --> lines 2-4\n  = note: syntax error\n"
    );
}

#[test]
fn display_is_one_line() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("count is not a number")
        .with_lines(LineRange::single(1));
    assert_eq!(diag.to_string(), "[E6001] line 1: count is not a number");
    assert!(diag.is_error());
}
