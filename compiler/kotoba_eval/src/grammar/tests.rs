use super::*;
use crate::builtins::{standard, Arguments, Builtin};
use crate::errors::EvalErrorKind;
use crate::eval_mode::EvalMode;
use crate::sink::{buffer_sink, SharedSink};
use kotoba_diagnostic::ErrorCode;
use kotoba_ir::LineRange;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn context() -> (Context, SharedSink) {
    let console = buffer_sink();
    let ctx = Context::builder()
        .mode(EvalMode::Capture)
        .console(console.clone())
        .build();
    (ctx, console)
}

fn eval(src: &str) -> EvalResult {
    let (mut ctx, _) = context();
    run(&mut Code::from_source(src, 1), &mut ctx)
}

fn code_of(result: EvalResult) -> Option<ErrorCode> {
    result.err().map(|e| e.code())
}

// Literals

#[test]
fn string_literal() {
    assert_eq!(eval("「こんにちは」"), Ok(Value::from("こんにちは")));
    assert_eq!(eval("「」"), Ok(Value::from("")));
}

#[test]
fn string_literal_keeps_keywords_inside() {
    assert_eq!(eval("「もしここまで」"), Ok(Value::from("もしここまで")));
}

#[test]
fn two_strings_are_not_one_literal() {
    assert_eq!(code_of(eval("「a」と「b」")), Some(ErrorCode::E1001));
}

#[test]
fn number_literals() {
    assert_eq!(eval("42"), Ok(Value::Number(42.0)));
    assert_eq!(eval("-3.5"), Ok(Value::Number(-3.5)));
    assert_eq!(eval("+7"), Ok(Value::Number(7.0)));
    assert_eq!(eval("３．１４"), Ok(Value::Number(3.14)));
}

#[test]
fn parse_number_rejects_malformed() {
    for text in ["", "-", "1.", ".5", "1e5", "1.2.3", "--1", "1a", "inf", "NaN"] {
        assert_eq!(parse_number(text), None, "{text}");
    }
}

#[test]
fn boolean_and_empty_literals() {
    assert_eq!(eval("真"), Ok(Value::Bool(true)));
    assert_eq!(eval("偽"), Ok(Value::Bool(false)));
    assert_eq!(eval("空"), Ok(Value::Empty));
}

proptest! {
    #[test]
    fn numeric_literal_round_trip(n in -1.0e12f64..1.0e12) {
        let text = n.to_string();
        prop_assert_eq!(parse_literal(&Code::from_source(&text, 1)), Some(Value::Number(n)));
        prop_assert_eq!(Value::Number(n).to_string(), text);
    }

    #[test]
    fn integer_literal_round_trip(n in -1_000_000_000i64..1_000_000_000) {
        #[allow(clippy::cast_precision_loss)]
        let expected = n as f64;
        prop_assert_eq!(eval(&n.to_string()), Ok(Value::Number(expected)));
    }

    #[test]
    fn full_width_digits(digits in "[0-9]{1,6}") {
        let full: String = digits
            .chars()
            .filter_map(|c| char::from_u32(c as u32 + 0xFEE0))
            .collect();
        let expected: f64 = digits.parse().unwrap_or(f64::NAN);
        prop_assert_eq!(eval(&full), Ok(Value::Number(expected)));
    }
}

// Variables and bindings

#[test]
fn binding_defines_and_returns_value() {
    let (mut ctx, _) = context();
    let result = run(&mut Code::from_source("aを5とする", 1), &mut ctx);
    assert_eq!(result, Ok(Value::Number(5.0)));
    assert_eq!(ctx.lookup("a"), Some(&Value::Number(5.0)));
}

#[test]
fn binding_overwrites() {
    assert_eq!(eval("aを1とする\naを「二」とする\na"), Ok(Value::from("二")));
}

#[test]
fn binding_value_can_be_a_conditional_in_parens() {
    assert_eq!(
        eval("xを(もし偽ならば1違うなら2)とする\nx"),
        Ok(Value::Number(2.0))
    );
}

#[test]
fn variable_reference() {
    let (mut ctx, _) = context();
    ctx.define("名前", Value::from("太郎"));
    let result = run(&mut Code::from_source("名前", 1), &mut ctx);
    assert_eq!(result, Ok(Value::from("太郎")));
}

#[test]
fn unbound_name_is_no_production() {
    let error = eval("なにか").err();
    assert_eq!(
        error.as_ref().map(|e| &e.kind),
        Some(&EvalErrorKind::NoProduction {
            text: "なにか".into()
        })
    );
    assert_eq!(error.and_then(|e| e.lines), Some(LineRange::single(1)));
}

// Conditionals

#[test]
fn zero_is_truthy() {
    assert_eq!(eval("もし0ならば「yes」違うなら「no」"), Ok(Value::from("yes")));
}

#[test]
fn false_is_falsy() {
    assert_eq!(eval("もし偽ならば「yes」違うなら「no」"), Ok(Value::from("no")));
}

#[test]
fn empty_is_falsy_and_missing_else_is_empty() {
    assert_eq!(eval("もし空ならば1"), Ok(Value::Empty));
    assert_eq!(eval("もし真ならば1"), Ok(Value::Number(1.0)));
}

#[test]
fn conditional_with_comparison() {
    assert_eq!(
        eval("aを5とする\nもしaが3より大きいならば「大」違うなら「小」"),
        Ok(Value::from("大"))
    );
}

#[test]
fn conditional_branch_block() {
    let src = "もし真ならばここから\naを1とする\naを2とする\nここまで\na";
    assert_eq!(eval(src), Ok(Value::Number(2.0)));
}

#[test]
fn malformed_conditional_is_committed() {
    assert_eq!(code_of(eval("もしaならば")), Some(ErrorCode::E1004));
}

// Loops

#[test]
fn loop_runs_body_count_times() {
    let (mut ctx, console) = context();
    let src = "(「やあ」をコンソールに表示する)を3回繰り返す";
    assert_eq!(run_source_in(src, &mut ctx), Ok(Value::Empty));
    assert_eq!(console.output(), "やあ\nやあ\nやあ\n");
}

#[test]
fn loop_count_first_order() {
    let (mut ctx, console) = context();
    let src = "2回(「やあ」をコンソールに表示する)を繰り返す";
    assert_eq!(run_source_in(src, &mut ctx), Ok(Value::Empty));
    assert_eq!(console.output(), "やあ\nやあ\n");
}

#[test]
fn loop_zero_negative_and_fractional_counts() {
    let (mut ctx, console) = context();
    let src = "(「a」をコンソールに表示する)を0回繰り返す\n\
               (「b」をコンソールに表示する)を-2回繰り返す\n\
               (「c」をコンソールに表示する)を2.7回繰り返す";
    assert_eq!(run_source_in(src, &mut ctx), Ok(Value::Empty));
    assert_eq!(console.output(), "c\nc\n");
}

#[test]
fn loop_count_must_be_number() {
    let error = eval("(1)を「三」回繰り返す").err();
    assert_eq!(
        error.map(|e| e.kind),
        Some(EvalErrorKind::CountNotNumber {
            got: "文字列".into()
        })
    );
}

#[test]
fn malformed_loop_is_committed() {
    assert_eq!(code_of(eval("aを繰り返す")), Some(ErrorCode::E1005));
}

#[test]
fn loop_body_bindings_are_shared() {
    assert_eq!(
        eval("(xを「済」とする)を2回繰り返す\nx"),
        Ok(Value::from("済"))
    );
}

// Sub-expressions

#[test]
fn sub_expression_returns_last_value() {
    assert_eq!(eval("ここから\n1\n2\nここまで"), Ok(Value::Number(2.0)));
    assert_eq!(eval("(「a」)"), Ok(Value::from("a")));
}

#[test]
fn sub_expression_ignores_trailing_prose() {
    assert_eq!(eval("ここから\n1\nここまでを処理"), Ok(Value::Number(1.0)));
}

#[test]
fn sub_expression_defers_to_call() {
    let (mut ctx, console) = context();
    assert_eq!(
        run_source_in("(真)をコンソールに表示する", &mut ctx),
        Ok(Value::Empty)
    );
    assert_eq!(console.output(), "真\n");
}

#[test]
fn nested_sub_expressions() {
    assert_eq!(eval("((((「深い」))))"), Ok(Value::from("深い")));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 500;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&src), Ok(Value::Number(1.0)));
}

#[test]
fn error_inside_sub_expression_reports_inner_line() {
    let error = eval("(\nなにか\n)").err();
    assert_eq!(error.and_then(|e| e.lines), Some(LineRange::single(2)));
}

// Calls

#[test]
fn display_call() {
    let (mut ctx, console) = context();
    let src = "「ここまでを処理」をコンソールに表示する";
    assert_eq!(run_source_in(src, &mut ctx), Ok(Value::Empty));
    assert_eq!(console.output(), "ここまでを処理\n");
}

#[test]
fn particle_without_noun() {
    let error = eval("をコンソールに表示する").err();
    assert_eq!(
        error.map(|e| e.kind),
        Some(EvalErrorKind::MissingArgument {
            particle: "を".into()
        })
    );
}

#[test]
fn display_without_destination_matches_nothing() {
    assert_eq!(code_of(eval("1を表示する")), Some(ErrorCode::E1001));
}

#[test]
fn builtin_errors_get_statement_lines() {
    let error = eval("(\n1\n)を(\n2\n)に表示する").err();
    assert_eq!(error.as_ref().map(EvalError::code), Some(ErrorCode::E6002));
    assert_eq!(error.and_then(|e| e.lines), Some(LineRange::new(1, 3)));
}

#[test]
fn debug_display_wins_when_display_lacks_particles() {
    let diagnostics = buffer_sink();
    let mut ctx = Context::builder()
        .mode(EvalMode::Capture)
        .diagnostics(diagnostics.clone())
        .build();
    assert_eq!(
        run_source_in("1をデバッグ表示する", &mut ctx),
        Ok(Value::Number(1.0))
    );
    assert_eq!(diagnostics.output(), "数値: 1\n");
}

fn marker(_: &Arguments, _: &mut Context) -> EvalResult {
    Ok(Value::from("より小さい"))
}

#[test]
fn rightmost_name_wins() {
    // `より小さい` occurs further left than `小さい` in the same text.
    let mut ctx = Context::builder()
        .mode(EvalMode::Capture)
        .builtin(Builtin::new("より小さい", &["が"], marker))
        .build();
    assert_eq!(
        run_source_in("1が2より小さい", &mut ctx),
        Ok(Value::Bool(true))
    );
}

#[test]
fn tie_keeps_earlier_registration() {
    let mut ctx = Context::builder()
        .mode(EvalMode::Capture)
        .builtin(Builtin::new("小さい", &["が", "より"], marker))
        .build();
    assert_eq!(
        run_source_in("2が1より小さい", &mut ctx),
        Ok(Value::Bool(false))
    );
}

#[test]
fn select_builtin_requires_all_particles() {
    let table = standard();
    assert_eq!(select_builtin(&table, "aを表示する"), None);
    let text = "aをコンソールに表示する";
    let at = text.find("表示").unwrap_or_default();
    assert_eq!(select_builtin(&table, text), Some((0, at)));
}

#[test]
fn split_arguments_respects_enclosures() {
    let particles = vec!["を".to_string(), "に".to_string()];
    let region = "「aをb」をコンソールに";
    assert_eq!(
        split_arguments(region, &particles),
        vec![
            Piece::Noun("「aをb」", 0),
            Piece::Particle("を"),
            Piece::Noun("コンソール", "「aをb」を".len()),
            Piece::Particle("に"),
        ]
    );

    let region = "(xをy)を";
    assert_eq!(
        split_arguments(region, &particles),
        vec![Piece::Noun("(xをy)", 0), Piece::Particle("を")]
    );
}

#[test]
fn split_arguments_adjacent_particles() {
    let particles = vec!["が".to_string(), "より".to_string()];
    assert_eq!(
        split_arguments("がより", &particles),
        vec![Piece::Particle("が"), Piece::Particle("より")]
    );
}

// Statement sequences

#[test]
fn empty_statement_is_error() {
    let (mut ctx, _) = context();
    let result = evaluate(&mut Code::from_source("\n。\n", 1), &mut ctx);
    assert_eq!(code_of(result), Some(ErrorCode::E1002));
}

#[test]
fn run_skips_empty_lines() {
    assert_eq!(eval("\n\n1。。\n2\n\n"), Ok(Value::Number(2.0)));
    assert_eq!(eval(""), Ok(Value::Empty));
}

fn run_source_in(src: &str, ctx: &mut Context) -> EvalResult {
    run(&mut Code::from_source(src, ctx.first_line()), ctx)
}
