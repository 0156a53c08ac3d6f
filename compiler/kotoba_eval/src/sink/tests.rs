use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_captures_lines() {
    let sink = BufferSink::new();
    sink.println("一");
    sink.println("二");
    assert_eq!(sink.output(), "一\n二\n");
}

#[test]
fn buffer_clear() {
    let sink = buffer_sink();
    sink.println("x");
    sink.clear();
    assert_eq!(sink.output(), "");
}

#[test]
fn non_capturing_sinks_report_no_output() {
    for sink in [stdout_sink(), stderr_sink("警告: "), silent_sink()] {
        assert_eq!(sink.output(), "");
        sink.clear();
    }
}

#[test]
fn silent_discards() {
    let sink = silent_sink();
    sink.println("ignored");
    assert_eq!(sink.output(), "");
}

#[test]
fn shared_handle_sees_same_buffer() {
    let sink = buffer_sink();
    let alias = SharedSink::clone(&sink);
    alias.println("hello");
    assert_eq!(sink.output(), "hello\n");
}

#[test]
fn labels() {
    assert_eq!(stdout_sink().label(), "標準出力");
    assert_eq!(stderr_sink("").label(), "標準エラー");
    assert_eq!(buffer_sink().label(), "バッファ");
    assert_eq!(silent_sink().label(), "無効");
}
