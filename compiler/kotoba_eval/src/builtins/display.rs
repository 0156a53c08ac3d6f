//! `表示` and `デバッグ表示`.

use super::Arguments;
use crate::context::Context;
use crate::errors::{not_a_sink, EvalResult};
use crate::Value;

/// `XをYに表示する`: write X's display text to sink Y.
pub(super) fn display(args: &Arguments, ctx: &mut Context) -> EvalResult {
    let value = args.require("を")?;
    let target = args.require("に")?;
    let Value::Sink(sink) = target else {
        return Err(not_a_sink(target));
    };
    if ctx.mode().allows_output() {
        sink.println(&value.to_string());
    }
    Ok(Value::Empty)
}

/// `Xをデバッグ表示する`: write `<type>: <value>` to the diagnostic sink
/// and pass the value through.
pub(super) fn debug_display(args: &Arguments, ctx: &mut Context) -> EvalResult {
    let value = args.require("を")?;
    if ctx.mode().allows_output() {
        ctx.diagnostics()
            .println(&format!("{}: {value}", value.type_name()));
    }
    Ok(value.clone())
}
