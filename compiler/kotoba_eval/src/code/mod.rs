//! Token cursor.
//!
//! `Code` is a re-seekable view over an owned token sequence. It gives the
//! grammar single-token and single-line lookahead, a saved-position stack
//! for backtracking, and an enclosure-aware scan: whenever a scan meets a
//! token that opens an enclosure (`「`, `ここから`/`(`, `もし`), the whole
//! enclosure is consumed as one unit so its interior is never seen by
//! outer-level keyword matching.

mod checkpoint;
mod enclosure;

use std::fmt;

use kotoba_ir::{LineRange, Token, WordClass};
use kotoba_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::EvalError;

pub use checkpoint::Checkpoint;

/// A cursor over tokens.
///
/// Invariants: `pos <= tokens.len()`, and every saved position is `<= pos`
/// at the time it was pushed. Cloning duplicates the tokens and the saved
/// stack, so a clone can be consumed without touching the original.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Code {
    tokens: Vec<Token>,
    pos: usize,
    saved: Vec<usize>,
}

impl Code {
    /// Create a cursor at the start of `tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Code {
            tokens,
            pos: 0,
            saved: Vec::new(),
        }
    }

    /// Normalize and tokenize `raw`, numbering lines from `first_line`.
    pub fn from_source(raw: &str, first_line: u32) -> Self {
        Code::new(kotoba_lexer::tokenize(raw, first_line))
    }

    /// Number of unread tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// True when every token has been read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Unread tokens.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens[self.pos..]
    }

    /// Current position (number of tokens consumed).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Depth of the saved-position stack.
    #[inline]
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    /// Next unread token.
    #[inline]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Last unread token.
    #[inline]
    pub fn peek_last(&self) -> Option<&Token> {
        self.tokens().last()
    }

    /// Consume one raw token. Enclosures are not honored.
    pub fn read_one(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.clone();
        trace!(pos = self.pos, token = ?token, "read_one");
        self.pos += 1;
        Some(token)
    }

    /// Consume one statement: tokens up to and including the next outer
    /// delimiter, or to the end. Enclosures are spliced whole.
    pub fn read_line(&mut self) -> Result<Code, EvalError> {
        let mut out = Vec::new();
        while let Some(token) = self.peek() {
            if token.is_delimiter() {
                out.extend(self.read_one());
                break;
            }
            self.read_unit(&mut out)?;
        }
        trace!(tokens = out.len(), "read_line");
        Ok(Code::new(out))
    }

    /// Consume the next token, or the whole enclosure it opens, as a cursor.
    pub fn read_enclosed(&mut self) -> Result<Code, EvalError> {
        let mut out = Vec::new();
        self.read_unit(&mut out)?;
        Ok(Code::new(out))
    }

    /// Consume every unread token.
    pub fn read_rest(&mut self) -> Code {
        let rest = self.tokens[self.pos..].to_vec();
        self.pos = self.tokens.len();
        Code::new(rest)
    }

    /// Consume tokens up to (not including) the next outer-level token of
    /// `class`, splicing enclosures whole.
    ///
    /// Returns `Ok(None)` with the position unchanged if no such token is
    /// found. An enclosure without its terminator is a fatal error.
    pub fn scan_until(&mut self, class: WordClass) -> Result<Option<Code>, EvalError> {
        let start = self.pos;
        let mut out = Vec::new();
        while let Some(token) = self.peek() {
            if token.is(class) {
                trace!(?class, tokens = out.len(), "scan_until hit");
                return Ok(Some(Code::new(out)));
            }
            self.read_unit(&mut out)?;
        }
        self.pos = start;
        Ok(None)
    }

    /// Push the current position on the saved stack.
    pub fn save_position(&mut self) {
        self.saved.push(self.pos);
    }

    /// Pop the saved stack and move back to that position.
    pub fn restore_position(&mut self) {
        if let Some(pos) = self.saved.pop() {
            trace!(from = self.pos, to = pos, "restore_position");
            self.pos = pos;
        }
    }

    /// Pop the saved stack, keeping the current position.
    pub fn commit_position(&mut self) {
        self.saved.pop();
    }

    /// Save the position and return a guard that restores it on drop
    /// unless [`Checkpoint::commit`] is called.
    pub fn checkpoint(&mut self) -> Checkpoint<'_> {
        Checkpoint::new(self)
    }

    /// Drop leading and trailing delimiter tokens.
    pub fn trim(&mut self) {
        while self.peek().is_some_and(Token::is_delimiter) {
            self.pos += 1;
        }
        while self.tokens.len() > self.pos && self.tokens.last().is_some_and(Token::is_delimiter) {
            self.tokens.pop();
        }
    }

    /// Independent copy for re-evaluation (e.g. each loop iteration).
    #[must_use]
    pub fn duplicate(&self) -> Code {
        self.clone()
    }

    /// Concatenated text of the unread tokens.
    pub fn render(&self) -> String {
        self.tokens().iter().map(Token::text).collect()
    }

    /// Lines spanned by the unread tokens.
    pub fn line_range(&self) -> Option<LineRange> {
        let tokens = self.tokens();
        let first = tokens.first()?;
        let last = tokens.last()?;
        Some(LineRange::new(first.line(), last.line()))
    }

    /// Consume the next token, or the whole enclosure it opens.
    fn read_unit(&mut self, out: &mut Vec<Token>) -> Result<(), EvalError> {
        match self.peek().and_then(enclosure::opened_by) {
            Some(kind) => ensure_sufficient_stack(|| self.read_enclosure(kind, out)),
            None => {
                out.extend(self.read_one());
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Code")
            .field("tokens", &self.tokens())
            .field("pos", &self.pos)
            .field("saved", &self.saved)
            .finish()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Vec<Token>> for Code {
    fn from(tokens: Vec<Token>) -> Self {
        Code::new(tokens)
    }
}
