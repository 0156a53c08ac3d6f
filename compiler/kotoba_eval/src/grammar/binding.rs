//! `名前 を 値 とする`.

use kotoba_ir::WordClass::{Bind, Object};
use tracing::debug;

use super::evaluate;
use crate::code::Code;
use crate::context::Context;
use crate::errors::EvalError;
use crate::matcher::{match_template, word, Part, CAPTURE};
use crate::Value;

const TEMPLATE: &[Part] = &[CAPTURE, word(Object), CAPTURE, word(Bind)];

/// Evaluates the value and binds it in the shared scope, overwriting any
/// earlier binding of the same name. The bound value is the result.
pub(super) fn binding(code: &mut Code, ctx: &mut Context) -> Result<Option<Value>, EvalError> {
    let matched = match_template(code, TEMPLATE, |mut captures| {
        let name = captures.take().render();
        let mut value = captures.take();
        evaluate(&mut value, ctx).map(|value| {
            debug!(%name, %value, "bind");
            ctx.define(name, value.clone());
            value
        })
    })?;
    matched.transpose()
}
