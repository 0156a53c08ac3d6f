//! Enclosure consumption.
//!
//! Quotes are scanned raw: the first `」` closes the string whatever comes
//! before it. Sub-expressions and if-blocks honor nested enclosures while
//! looking for their own terminator.
//!
//! An if-block runs from `もし` through `ならば` and then on to the next
//! statement delimiter, which is left unread. It also stops before a
//! `ここまで`/`)` it did not open, so a conditional can sit inside
//! parentheses on one line.

use kotoba_ir::{EnclosureKind, Token, WordClass};
use tracing::trace;

use super::Code;
use crate::errors::{unclosed_enclosure, EvalError};

const OPENERS: [EnclosureKind; 3] = [
    EnclosureKind::Quote,
    EnclosureKind::Evaluate,
    EnclosureKind::IfBlock,
];

/// The enclosure `token` opens, if any.
pub(super) fn opened_by(token: &Token) -> Option<EnclosureKind> {
    OPENERS.into_iter().find(|kind| token.is(kind.start()))
}

impl Code {
    /// Consume an enclosure whose opening token is next, appending every
    /// token from the opener through the terminator to `out`.
    pub(super) fn read_enclosure(
        &mut self,
        kind: EnclosureKind,
        out: &mut Vec<Token>,
    ) -> Result<(), EvalError> {
        let opener_at = self.pos;
        let Some(opener) = self.read_one() else {
            return Ok(());
        };
        trace!(?kind, line = opener.line(), "enter enclosure");
        out.push(opener);

        match kind {
            EnclosureKind::Quote => {
                while let Some(token) = self.read_one() {
                    let closes = token.is(WordClass::StringEnd);
                    out.push(token);
                    if closes {
                        return Ok(());
                    }
                }
                Err(self.unclosed_at(opener_at))
            }
            EnclosureKind::Evaluate => {
                if self.read_nested_until(kind.end(), out)? {
                    out.extend(self.read_one());
                    Ok(())
                } else {
                    Err(self.unclosed_at(opener_at))
                }
            }
            EnclosureKind::IfBlock => {
                if !self.read_nested_until(kind.end(), out)? {
                    return Err(self.unclosed_at(opener_at));
                }
                out.extend(self.read_one());
                while let Some(token) = self.peek() {
                    if token.is_delimiter() || token.is(WordClass::EvalEnd) {
                        break;
                    }
                    self.read_unit(out)?;
                }
                Ok(())
            }
        }
    }

    #[cold]
    fn unclosed_at(&self, opener_at: usize) -> EvalError {
        match self.tokens.get(opener_at) {
            Some(opener) => unclosed_enclosure(opener.text(), opener.line()),
            None => unclosed_enclosure("", 0),
        }
    }

    /// Escaping scan: append units to `out` until the next token of `end`
    /// (left unread). Returns false if input ran out first.
    fn read_nested_until(&mut self, end: WordClass, out: &mut Vec<Token>) -> Result<bool, EvalError> {
        while let Some(token) = self.peek() {
            if token.is(end) {
                return Ok(true);
            }
            self.read_unit(out)?;
        }
        Ok(false)
    }
}
