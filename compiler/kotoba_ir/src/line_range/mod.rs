//! Line ranges for diagnostics.
//!
//! Kotoba reports positions by line only: statements are sentence-shaped and
//! full-width text makes column numbers meaningless to most readers.

use std::fmt;

/// Inclusive range of source lines covered by a span of tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    /// Create a range. `start` and `end` are reordered if given backwards.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        if start <= end {
            LineRange { start, end }
        } else {
            LineRange {
                start: end,
                end: start,
            }
        }
    }

    /// A range covering exactly one line.
    #[inline]
    pub const fn single(line: u32) -> Self {
        LineRange {
            start: line,
            end: line,
        }
    }

    /// True if the range covers a single line.
    #[inline]
    pub const fn is_single_line(&self) -> bool {
        self.start == self.end
    }

    /// Smallest range covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: LineRange) -> LineRange {
        LineRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_line() {
            write!(f, "line {}", self.start)
        } else {
            write!(f, "lines {}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests;
