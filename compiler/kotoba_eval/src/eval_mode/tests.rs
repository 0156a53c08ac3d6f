use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_is_interpret() {
    assert_eq!(EvalMode::default(), EvalMode::Interpret);
}

#[test]
fn only_silent_forbids_output() {
    assert!(EvalMode::Interpret.allows_output());
    assert!(EvalMode::Capture.allows_output());
    assert!(!EvalMode::Silent.allows_output());
}

#[test]
fn default_sinks_per_mode() {
    assert_eq!(EvalMode::Interpret.console_sink().label(), "標準出力");
    assert_eq!(EvalMode::Interpret.alert_sink().label(), "標準エラー");
    assert_eq!(EvalMode::Capture.console_sink().label(), "バッファ");
    assert_eq!(EvalMode::Capture.diagnostic_sink().label(), "バッファ");
    assert_eq!(EvalMode::Silent.alert_sink().label(), "無効");
}

#[test]
fn capture_sinks_are_distinct() {
    let console = EvalMode::Capture.console_sink();
    let alert = EvalMode::Capture.alert_sink();
    console.println("a");
    assert_eq!(alert.output(), "");
}
