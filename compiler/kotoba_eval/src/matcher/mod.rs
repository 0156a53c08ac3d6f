//! Template matching with backtracking.
//!
//! A template alternates keyword steps and capture slots. A keyword step
//! consumes exactly one raw token of the given class. A capture runs to the
//! next keyword step's class via the cursor's enclosure-aware scan (the
//! keyword itself is not captured), or, when it is the last part, takes
//! the rest of the cursor.
//!
//! The attempt runs under a [`Checkpoint`](crate::code::Checkpoint): any
//! failed step leaves the cursor exactly where it was. Tokens left after the
//! final keyword step are not part of the match.

use kotoba_ir::WordClass;
use tracing::trace;

use crate::code::Code;
use crate::errors::EvalError;

/// One step of a template.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Part {
    /// Consume one token belonging to this class.
    Word(WordClass),
    /// Capture a non-empty run of tokens.
    Capture,
}

/// Shorthand for template literals.
pub const CAPTURE: Part = Part::Capture;

/// Shorthand for template literals.
#[inline]
pub const fn word(class: WordClass) -> Part {
    Part::Word(class)
}

/// Captured sub-cursors, in template order.
#[derive(Debug, Default)]
pub struct Captures {
    codes: std::vec::IntoIter<Code>,
}

impl Captures {
    fn new(codes: Vec<Code>) -> Self {
        Captures {
            codes: codes.into_iter(),
        }
    }

    /// Next capture, or an empty cursor if the template had fewer slots.
    pub fn take(&mut self) -> Code {
        self.codes.next().unwrap_or_default()
    }

    /// Next capture if the template had one.
    pub fn take_optional(&mut self) -> Option<Code> {
        self.codes.next()
    }

    /// Number of captures not yet taken.
    pub fn remaining(&self) -> usize {
        self.codes.len()
    }
}

/// Try `template` against `code`.
///
/// On success the cursor stays advanced past the last matched part and
/// `on_match` receives the captures; its result is returned as `Some`. On
/// failure the cursor is restored and `Ok(None)` is returned. Errors from
/// the scan (an enclosure with no terminator) are fatal and propagate.
pub fn match_template<R>(
    code: &mut Code,
    template: &[Part],
    on_match: impl FnOnce(Captures) -> R,
) -> Result<Option<R>, EvalError> {
    let mut attempt = code.checkpoint();
    let mut captures = Vec::new();
    let mut parts = template.iter().peekable();

    while let Some(part) = parts.next() {
        match part {
            Part::Word(class) => match attempt.read_one() {
                Some(token) if token.is(*class) => {}
                other => {
                    trace!(?class, found = ?other, "template keyword mismatch");
                    return Ok(None);
                }
            },
            Part::Capture => {
                let captured = match parts.peek() {
                    Some(Part::Word(terminator)) => attempt.scan_until(*terminator)?,
                    Some(Part::Capture) => None,
                    None => Some(attempt.read_rest()),
                };
                match captured {
                    Some(capture) if !capture.is_empty() => captures.push(capture),
                    _ => {
                        trace!(?template, "template capture failed");
                        return Ok(None);
                    }
                }
            }
        }
    }

    attempt.commit();
    Ok(Some(on_match(Captures::new(captures))))
}
