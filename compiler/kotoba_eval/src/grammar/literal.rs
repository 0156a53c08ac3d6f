//! Literals: `「…」`, numbers, `真`/`偽`, `空`.

use kotoba_ir::{Token, WordClass};

use crate::code::Code;
use crate::context::Context;
use crate::errors::EvalError;
use crate::Value;

#[expect(
    clippy::unnecessary_wraps,
    reason = "shares the production signature"
)]
pub(super) fn literal(code: &mut Code, _ctx: &mut Context) -> Result<Option<Value>, EvalError> {
    Ok(parse_literal(code))
}

/// Recognize the whole cursor as a literal.
///
/// Tried in order: a single quoted string, a signed integer or decimal,
/// a boolean keyword, the empty keyword.
pub fn parse_literal(code: &Code) -> Option<Value> {
    if let Some(text) = quoted(code.tokens()) {
        return Some(Value::Str(text));
    }

    let text = code.render();
    if let Some(n) = parse_number(&text) {
        return Some(Value::Number(n));
    }
    if WordClass::True.contains(&text) {
        return Some(Value::Bool(true));
    }
    if WordClass::False.contains(&text) {
        return Some(Value::Bool(false));
    }
    if WordClass::Empty.contains(&text) {
        return Some(Value::Empty);
    }
    None
}

/// Interior text if `tokens` is exactly one `「…」`.
fn quoted(tokens: &[Token]) -> Option<String> {
    let [first, interior @ .., last] = tokens else {
        return None;
    };
    if !first.is(WordClass::StringStart) || !last.is(WordClass::StringEnd) {
        return None;
    }
    // `「a」と「b」` starts and ends with quotes but is two strings.
    if interior.iter().any(|token| token.is(WordClass::StringEnd)) {
        return None;
    }
    Some(interior.iter().map(Token::text).collect())
}

/// Parse `[+-]?digits[.digits]` (half-width only).
pub fn parse_number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !fraction.map_or(true, all_digits) {
        return None;
    }
    text.parse().ok()
}
