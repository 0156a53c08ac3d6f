//! `T を N 回繰り返す` and `N 回 T を繰り返す`.

use kotoba_ir::WordClass::{Object, Repeat, Times};
use tracing::debug;

use super::evaluate;
use crate::code::Code;
use crate::context::Context;
use crate::errors::{count_not_number, malformed_loop, EvalError};
use crate::matcher::{match_template, word, Captures, Part, CAPTURE};
use crate::Value;

/// Which capture holds the loop body.
#[derive(Copy, Clone)]
enum Order {
    TargetFirst,
    CountFirst,
}

const TEMPLATES: [(&[Part], Order); 2] = [
    (
        &[CAPTURE, word(Object), CAPTURE, word(Times), word(Repeat)],
        Order::TargetFirst,
    ),
    (
        &[CAPTURE, word(Times), CAPTURE, word(Object), word(Repeat)],
        Order::CountFirst,
    ),
];

pub(super) fn repeat(code: &mut Code, ctx: &mut Context) -> Result<Option<Value>, EvalError> {
    if !code.peek_last().is_some_and(|token| token.is(Repeat)) {
        return Ok(None);
    }

    let lines = code.line_range();
    for (template, order) in TEMPLATES {
        let matched = match_template(code, template, |captures| iterate(captures, order, ctx))?;
        if let Some(result) = matched {
            return result.map(Some);
        }
    }
    Err(malformed_loop(lines))
}

fn iterate(mut captures: Captures, order: Order, ctx: &mut Context) -> Result<Value, EvalError> {
    let (target, mut count) = match order {
        Order::TargetFirst => {
            let target = captures.take();
            (target, captures.take())
        }
        Order::CountFirst => {
            let count = captures.take();
            (captures.take(), count)
        }
    };

    let count_lines = count.line_range();
    let value = evaluate(&mut count, ctx)?;
    let Some(n) = value.as_number() else {
        return Err(count_not_number(&value, count_lines));
    };

    let iterations = iteration_count(n);
    debug!(iterations, "loop");
    for _ in 0..iterations {
        // Evaluation consumes the cursor, so each pass gets a fresh copy.
        let mut body = target.duplicate();
        evaluate(&mut body, ctx)?;
    }
    Ok(Value::Empty)
}

/// Truncate toward zero; zero, negative, and NaN counts run nothing.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "n is at least 1 and saturates at u64::MAX"
)]
fn iteration_count(n: f64) -> u64 {
    if n >= 1.0 {
        n.trunc() as u64
    } else {
        0
    }
}
