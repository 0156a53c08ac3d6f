//! `もし C ならば T [違うなら E]`.

use kotoba_ir::WordClass::{Delimiter, Else, If, Then};

use super::{evaluate, run};
use crate::code::Code;
use crate::context::Context;
use crate::errors::{malformed_conditional, EvalError, EvalResult};
use crate::matcher::{match_template, word, Captures, Part, CAPTURE};
use crate::Value;

const TEMPLATES: [&[Part]; 4] = [
    &[
        word(If),
        CAPTURE,
        word(Then),
        CAPTURE,
        word(Else),
        CAPTURE,
        word(Delimiter),
    ],
    &[word(If), CAPTURE, word(Then), CAPTURE, word(Else), CAPTURE],
    &[word(If), CAPTURE, word(Then), CAPTURE, word(Delimiter)],
    &[word(If), CAPTURE, word(Then), CAPTURE],
];

pub(super) fn conditional(code: &mut Code, ctx: &mut Context) -> Result<Option<Value>, EvalError> {
    if !code.peek().is_some_and(|token| token.is(If)) {
        return Ok(None);
    }

    let lines = code.line_range();
    for template in TEMPLATES {
        if let Some(result) = match_template(code, template, |captures| branch(captures, ctx))? {
            return result.map(Some);
        }
    }
    Err(malformed_conditional(lines))
}

fn branch(mut captures: Captures, ctx: &mut Context) -> EvalResult {
    let mut condition = captures.take();
    let mut then = captures.take();
    let otherwise = captures.take_optional();

    if evaluate(&mut condition, ctx)?.is_truthy() {
        run(&mut then, ctx)
    } else if let Some(mut otherwise) = otherwise {
        run(&mut otherwise, ctx)
    } else {
        Ok(Value::Empty)
    }
}
