use super::*;
use pretty_assertions::assert_eq;

#[test]
fn codes_follow_category() {
    let syntax = [
        unclosed_enclosure("「", 1),
        no_production("x", None),
        malformed_conditional(None),
        malformed_loop(None),
        empty_statement(None),
        missing_argument("を", None),
    ];
    for error in &syntax {
        assert!(error.code().is_syntax_error(), "{error:?}");
        assert_eq!(error.kind.category(), ErrorPhase::Syntax);
    }

    let argument = [
        count_not_number(&Value::Bool(true), None),
        not_a_sink(&Value::Number(1.0)),
        missing_slot("に"),
        incomparable_values(&Value::Number(1.0), &Value::Str("a".into())),
        EvalError::new("boom"),
    ];
    for error in &argument {
        assert!(error.code().is_argument_error(), "{error:?}");
        assert_eq!(error.kind.category(), ErrorPhase::Argument);
    }
}

#[test]
fn message_matches_kind_display() {
    let error = count_not_number(&Value::Str("三".into()), None);
    assert_eq!(error.message, "count is not a number (got 文字列)");
    assert_eq!(error.message, error.kind.to_string());
}

#[test]
fn unclosed_points_at_opening_line() {
    let error = unclosed_enclosure("「", 4);
    assert_eq!(error.lines, Some(LineRange::single(4)));
    assert_eq!(error.to_string(), "line 4: `「` is never closed");
}

#[test]
fn or_lines_keeps_existing_range() {
    let error = missing_slot("を").or_lines(Some(LineRange::new(2, 3)));
    assert_eq!(error.lines, Some(LineRange::new(2, 3)));

    let error = error.or_lines(Some(LineRange::single(9)));
    assert_eq!(error.lines, Some(LineRange::new(2, 3)));
}

#[test]
fn no_production_escapes_newlines() {
    let error = no_production("a\nb", Some(LineRange::new(1, 2)));
    assert_eq!(error.message, "no statement form matches `a\\nb`");
}

#[test]
fn converts_to_diagnostic() {
    let diagnostic = malformed_loop(Some(LineRange::single(7))).to_diagnostic();
    assert_eq!(diagnostic.code, ErrorCode::E1005);
    assert_eq!(diagnostic.lines, Some(LineRange::single(7)));
    assert_eq!(diagnostic.notes, vec!["syntax error".to_string()]);
}
