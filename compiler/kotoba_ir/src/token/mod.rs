//! Lexical tokens.

use std::fmt;

use crate::{LineRange, WordClass};

/// A fragment of normalized source text and the line it came from.
///
/// Tokens are immutable once produced by the tokenizer. Keyword tokens are
/// not tagged with their class: a surface word such as `を` belongs to more
/// than one class, so grammar productions classify by position instead.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    text: String,
    line: u32,
}

impl Token {
    /// Create a token.
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Token {
            text: text.into(),
            line,
        }
    }

    /// The token's text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line the token originated on (1-based unless the caller chose
    /// another starting line).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Line range covering just this token.
    #[inline]
    pub fn lines(&self) -> LineRange {
        LineRange::single(self.line)
    }

    /// True if the token's text is one of the words of `class`.
    #[inline]
    pub fn is(&self, class: WordClass) -> bool {
        class.contains(&self.text)
    }

    /// True if the token is a statement delimiter (newline or `。`).
    #[inline]
    pub fn is_delimiter(&self) -> bool {
        self.is(WordClass::Delimiter)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.text, self.line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
