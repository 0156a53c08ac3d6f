//! Built-in calls.
//!
//! Resolution works on the rendered statement text, not on tokens:
//!
//! 1. For each built-in take the rightmost occurrence of its name. It is a
//!    candidate if every one of its particles appears before that
//!    occurrence.
//! 2. The candidate whose name occurs furthest right wins; on a tie the
//!    earlier-registered built-in is kept.
//! 3. The text before the name is split on the winner's particles (only
//!    outside `「…」` and `(…)`/`ここから…ここまで`). Each noun is
//!    tokenized and evaluated on its own and bound under the particle that
//!    follows it.
//!
//! Anything after the name (`する`, `します`) is ignored.

use kotoba_ir::WordClass;
use tracing::debug;

use super::evaluate;
use crate::builtins::{Arguments, Builtin};
use crate::code::Code;
use crate::context::Context;
use crate::errors::{missing_argument, EvalError};
use crate::Value;

/// A piece of a call's argument region.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Piece<'a> {
    /// Argument text, with its byte offset in the statement.
    Noun(&'a str, usize),
    /// One of the built-in's particles.
    Particle(&'a str),
}

/// Pick the built-in a statement calls.
///
/// Returns the built-in's index in `builtins` and the byte offset of its
/// name in `text`.
pub fn select_builtin(builtins: &[Builtin], text: &str) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for (index, builtin) in builtins.iter().enumerate() {
        if builtin.name().is_empty() {
            continue;
        }
        let Some(at) = text.rfind(builtin.name()) else {
            continue;
        };
        let before = &text[..at];
        if !builtin
            .particles()
            .iter()
            .all(|particle| before.contains(particle.as_str()))
        {
            continue;
        }
        if best.map_or(true, |(_, best_at)| at > best_at) {
            best = Some((index, at));
        }
    }
    best
}

/// Split `region` on `particles` outside enclosures.
///
/// Nouns are never empty; two particles in a row produce two adjacent
/// `Particle` pieces.
pub fn split_arguments<'a>(region: &'a str, particles: &[String]) -> Vec<Piece<'a>> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut in_quote = false;
    let mut noun_start = 0;
    let mut i = 0;

    while i < region.len() {
        let rest = &region[i..];
        let step = if in_quote {
            if let Some(len) = starts_with_class(rest, WordClass::StringEnd) {
                in_quote = false;
                len
            } else {
                next_char_len(rest)
            }
        } else if let Some(len) = starts_with_class(rest, WordClass::StringStart) {
            in_quote = true;
            len
        } else if let Some(len) = starts_with_class(rest, WordClass::EvalStart) {
            depth += 1;
            len
        } else if let Some(len) = starts_with_class(rest, WordClass::EvalEnd) {
            depth = depth.saturating_sub(1);
            len
        } else if let Some(particle) = particles
            .iter()
            .find(|p| depth == 0 && !p.is_empty() && rest.starts_with(p.as_str()))
        {
            if noun_start < i {
                pieces.push(Piece::Noun(&region[noun_start..i], noun_start));
            }
            let end = i + particle.len();
            pieces.push(Piece::Particle(&region[i..end]));
            noun_start = end;
            i = end;
            continue;
        } else {
            next_char_len(rest)
        };
        i += step;
    }

    if noun_start < region.len() {
        pieces.push(Piece::Noun(&region[noun_start..], noun_start));
    }
    pieces
}

fn starts_with_class(text: &str, class: WordClass) -> Option<usize> {
    class
        .words()
        .iter()
        .find(|word| text.starts_with(**word))
        .map(|word| word.len())
}

fn next_char_len(text: &str) -> usize {
    text.chars().next().map_or(1, char::len_utf8)
}

pub(super) fn call(code: &mut Code, ctx: &mut Context) -> Result<Option<Value>, EvalError> {
    let text = code.render();
    let Some((index, at)) = select_builtin(ctx.builtins(), &text) else {
        return Ok(None);
    };
    let builtin = ctx.builtins()[index].clone();
    let lines = code.line_range();
    let first_line = code.peek().map_or(ctx.first_line(), |token| token.line());
    debug!(builtin = builtin.name(), "call");

    let mut arguments = Arguments::new();
    let mut noun: Option<(&str, usize)> = None;
    for piece in split_arguments(&text[..at], builtin.particles()) {
        match piece {
            Piece::Noun(noun_text, offset) => noun = Some((noun_text, offset)),
            Piece::Particle(particle) => {
                let Some((noun_text, offset)) = noun.take() else {
                    return Err(missing_argument(particle, lines));
                };
                let line = first_line.saturating_add(newlines_before(&text, offset));
                let mut argument = Code::from_source(noun_text, line);
                let value = evaluate(&mut argument, ctx)?;
                arguments.insert(particle, value);
            }
        }
    }
    if let Some((trailing, _)) = noun {
        debug!(trailing, "ignoring noun with no particle");
    }

    let procedure = builtin.procedure();
    procedure(&arguments, ctx)
        .map(Some)
        .map_err(|error| error.or_lines(lines))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "a statement never spans u32::MAX lines"
)]
fn newlines_before(text: &str, offset: usize) -> u32 {
    text[..offset].matches('\n').count() as u32
}
