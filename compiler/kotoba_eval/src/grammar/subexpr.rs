//! `ここから … ここまで` and `( … )`.

use kotoba_ir::WordClass::{EvalEnd, EvalStart};

use super::{call, run};
use crate::code::Code;
use crate::context::Context;
use crate::errors::EvalError;
use crate::matcher::{match_template, word, Part, CAPTURE};
use crate::Value;

const TEMPLATE: &[Part] = &[word(EvalStart), CAPTURE, word(EvalEnd)];

/// Runs the body as a statement sequence and returns its last value.
///
/// Text after the closing keyword is prose (`ここまでを処理`) unless a
/// built-in name sits in it, as in `(…)をコンソールに表示する`; then this
/// production steps aside for the call. Built-in names inside the body
/// never count.
pub(super) fn sub_expression(
    code: &mut Code,
    ctx: &mut Context,
) -> Result<Option<Value>, EvalError> {
    if !code.peek().is_some_and(|token| token.is(EvalStart)) {
        return Ok(None);
    }
    if calls_after_body(code, ctx)? {
        return Ok(None);
    }

    let matched = match_template(code, TEMPLATE, |mut captures| {
        let mut body = captures.take();
        run(&mut body, ctx)
    })?;
    matched.transpose()
}

/// True if the statement resolves to a built-in whose name lies after the
/// enclosure that opens it.
fn calls_after_body(code: &Code, ctx: &Context) -> Result<bool, EvalError> {
    let mut tail = code.duplicate();
    tail.read_enclosed()?;
    if tail.is_empty() {
        return Ok(false);
    }
    let text = code.render();
    let body_len = text.len() - tail.render().len();
    Ok(call::select_builtin(ctx.builtins(), &text).is_some_and(|(_, at)| at >= body_len))
}
