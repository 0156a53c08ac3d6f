//! `小さい` and `大きい`.

use std::cmp::Ordering;

use super::Arguments;
use crate::context::Context;
use crate::errors::{incomparable_values, EvalError, EvalResult};
use crate::Value;

/// Order `が` relative to `より`.
///
/// Numbers compare numerically and strings lexicographically; anything
/// else (including NaN) is an argument error.
fn compare(args: &Arguments) -> Result<Ordering, EvalError> {
    let subject = args.require("が")?;
    let bound = args.require("より")?;
    let ordering = match (subject, bound) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => None,
    };
    ordering.ok_or_else(|| incomparable_values(subject, bound))
}

/// `AがBより小さい`: A < B.
pub(super) fn less(args: &Arguments, _ctx: &mut Context) -> EvalResult {
    Ok(Value::Bool(compare(args)? == Ordering::Less))
}

/// `AがBより大きい`: A > B.
pub(super) fn greater(args: &Arguments, _ctx: &mut Context) -> EvalResult {
    Ok(Value::Bool(compare(args)? == Ordering::Greater))
}
