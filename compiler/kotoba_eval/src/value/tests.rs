use super::*;
use crate::sink::{buffer_sink, silent_sink};
use pretty_assertions::assert_eq;

#[test]
fn truthiness() {
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::Str(String::new()).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Sink(silent_sink()).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(!Value::Empty.is_truthy());
}

#[test]
fn display() {
    assert_eq!(Value::Number(5.0).to_string(), "5");
    assert_eq!(Value::Number(-2.5).to_string(), "-2.5");
    assert_eq!(Value::from("こんにちは").to_string(), "こんにちは");
    assert_eq!(Value::Bool(true).to_string(), "真");
    assert_eq!(Value::Bool(false).to_string(), "偽");
    assert_eq!(Value::Empty.to_string(), "空");
    assert_eq!(Value::Sink(buffer_sink()).to_string(), "<出力先:バッファ>");
}

#[test]
fn type_names() {
    assert_eq!(Value::Number(1.0).type_name(), "数値");
    assert_eq!(Value::from("a").type_name(), "文字列");
    assert_eq!(Value::Bool(false).type_name(), "真偽値");
    assert_eq!(Value::Empty.type_name(), "空");
    assert_eq!(Value::Sink(silent_sink()).type_name(), "出力先");
}

#[test]
fn sinks_compare_by_identity() {
    let a = buffer_sink();
    let b = buffer_sink();
    assert_eq!(Value::Sink(a.clone()), Value::Sink(a.clone()));
    assert_ne!(Value::Sink(a), Value::Sink(b));
}

#[test]
fn mixed_types_are_unequal() {
    assert_ne!(Value::Number(1.0), Value::from("1"));
    assert_ne!(Value::Bool(false), Value::Empty);
}

#[test]
fn as_number_only_for_numbers() {
    assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
    assert_eq!(Value::from("3").as_number(), None);
    assert_eq!(Value::Empty.as_number(), None);
}
