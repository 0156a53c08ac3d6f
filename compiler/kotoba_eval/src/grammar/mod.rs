//! Grammar productions, fused with evaluation.
//!
//! There is no AST. Each production recognizes its form on the live cursor
//! (through the template matcher) and evaluates it on the spot. Productions
//! are tried in a fixed order; the first one that applies wins.
//!
//! Conditionals and loops are *committed* once their marker is seen: if
//! none of their templates fit, the statement is a syntax error rather than
//! falling through to later productions.

mod binding;
mod call;
mod conditional;
mod literal;
mod repeat;
mod subexpr;

use kotoba_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::code::Code;
use crate::context::Context;
use crate::errors::{empty_statement, no_production, EvalError, EvalResult};
use crate::Value;

pub use call::{select_builtin, split_arguments, Piece};
pub use literal::{parse_literal, parse_number};

/// A production: `Ok(None)` means "not this form", leaving the cursor
/// untouched.
type Production = fn(&mut Code, &mut Context) -> Result<Option<Value>, EvalError>;

/// Productions in priority order.
const PRODUCTIONS: &[(&str, Production)] = &[
    ("conditional", conditional::conditional),
    ("loop", repeat::repeat),
    ("binding", binding::binding),
    ("sub-expression", subexpr::sub_expression),
    ("call", call::call),
    ("variable", variable),
    ("literal", literal::literal),
];

/// Evaluate one statement or expression.
///
/// The cursor is trimmed first; an empty cursor is a syntax error, as is a
/// statement no production accepts.
#[tracing::instrument(level = "trace", skip_all)]
pub fn evaluate(code: &mut Code, ctx: &mut Context) -> EvalResult {
    ensure_sufficient_stack(|| evaluate_inner(code, ctx))
}

fn evaluate_inner(code: &mut Code, ctx: &mut Context) -> EvalResult {
    let lines = code.line_range();
    code.trim();
    if code.is_empty() {
        return Err(empty_statement(lines));
    }

    for (name, production) in PRODUCTIONS {
        if let Some(value) = production(code, ctx)? {
            debug!(production = *name, "matched");
            return Ok(value);
        }
    }

    Err(no_production(&code.render(), code.line_range()))
}

/// Run a statement sequence: each line in turn, skipping empty ones.
///
/// Returns the value of the last statement, or `空` if there was none.
#[tracing::instrument(level = "trace", skip_all)]
pub fn run(code: &mut Code, ctx: &mut Context) -> EvalResult {
    let mut last = Value::Empty;
    while !code.is_empty() {
        let mut line = code.read_line()?;
        line.trim();
        if line.is_empty() {
            continue;
        }
        last = evaluate(&mut line, ctx)?;
    }
    Ok(last)
}

/// The whole rendered text names a bound variable.
#[expect(
    clippy::unnecessary_wraps,
    reason = "shares the production signature"
)]
fn variable(code: &mut Code, ctx: &mut Context) -> Result<Option<Value>, EvalError> {
    Ok(ctx.lookup(&code.render()).cloned())
}

#[cfg(test)]
mod tests;
