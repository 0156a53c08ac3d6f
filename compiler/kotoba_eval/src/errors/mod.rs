//! Evaluation errors.
//!
//! Every error is fatal: it unwinds through every production to the top
//! level, where the driver turns it into a [`Diagnostic`].
//!
//! `EvalErrorKind` carries the structured category. The constructor
//! functions below are the public API; they fill in both `kind` and
//! `message` so callers never build messages by hand.

use std::fmt;

use kotoba_diagnostic::{Diagnostic, ErrorCode, ErrorPhase};
use kotoba_ir::LineRange;

use crate::Value;

/// Result of evaluating a statement or expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Syntax
    UnclosedEnclosure { opener: String },
    NoProduction { text: String },
    MalformedConditional,
    MalformedLoop,
    EmptyStatement,
    MissingArgument { particle: String },

    // Argument
    CountNotNumber { got: String },
    NotASink { got: String },
    MissingSlot { particle: String },
    IncomparableValues { left: String, right: String },

    /// Raised by host-registered built-ins with their own message.
    Custom { message: String },
}

impl EvalErrorKind {
    /// Stable error code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoProduction { .. } => ErrorCode::E1001,
            Self::EmptyStatement => ErrorCode::E1002,
            Self::UnclosedEnclosure { .. } => ErrorCode::E1003,
            Self::MalformedConditional => ErrorCode::E1004,
            Self::MalformedLoop => ErrorCode::E1005,
            Self::MissingArgument { .. } => ErrorCode::E1006,
            Self::CountNotNumber { .. } => ErrorCode::E6001,
            Self::NotASink { .. } => ErrorCode::E6002,
            Self::MissingSlot { .. } => ErrorCode::E6003,
            Self::IncomparableValues { .. } => ErrorCode::E6004,
            Self::Custom { .. } => ErrorCode::E6099,
        }
    }

    /// Syntax or argument error.
    pub fn category(&self) -> ErrorPhase {
        self.code().phase()
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedEnclosure { opener } => write!(f, "`{opener}` is never closed"),
            Self::NoProduction { text } => {
                write!(f, "no statement form matches `{}`", text.replace('\n', "\\n"))
            }
            Self::MalformedConditional => {
                write!(f, "malformed conditional: expected `もし…ならば…[違うなら…]`")
            }
            Self::MalformedLoop => {
                write!(f, "malformed loop: expected `…を…回繰り返す` or `…回…を繰り返す`")
            }
            Self::EmptyStatement => write!(f, "empty statement"),
            Self::MissingArgument { particle } => {
                write!(f, "argument missing before `{particle}`")
            }
            Self::CountNotNumber { got } => write!(f, "count is not a number (got {got})"),
            Self::NotASink { got } => {
                write!(f, "display target is not an output sink (got {got})")
            }
            Self::MissingSlot { particle } => {
                write!(f, "required argument `{particle}` was not given")
            }
            Self::IncomparableValues { left, right } => {
                write!(f, "cannot compare {left} with {right}")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
    /// Line or line range of the span being processed when the error was
    /// raised.
    pub lines: Option<LineRange>,
}

impl EvalError {
    /// Create an error with just a message (`Custom` kind).
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            lines: None,
        }
    }

    /// Attach a line range.
    #[must_use]
    pub fn with_lines(mut self, lines: Option<LineRange>) -> Self {
        self.lines = lines;
        self
    }

    /// Attach a line range unless one is already present.
    #[must_use]
    pub fn or_lines(mut self, lines: Option<LineRange>) -> Self {
        if self.lines.is_none() {
            self.lines = lines;
        }
        self
    }

    /// The error's code.
    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a user-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code())
            .with_message(self.message.clone())
            .with_note(self.kind.category().to_string());
        match self.lines {
            Some(lines) => diagnostic.with_lines(lines),
            None => diagnostic,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lines {
            Some(lines) => write!(f, "{lines}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for EvalError {}

// Syntax Errors

/// An enclosure's terminator was never found.
#[cold]
pub fn unclosed_enclosure(opener: &str, line: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnclosedEnclosure {
        opener: opener.to_string(),
    })
    .with_lines(Some(LineRange::single(line)))
}

/// No grammar production matched.
#[cold]
pub fn no_production(text: &str, lines: Option<LineRange>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoProduction {
        text: text.to_string(),
    })
    .with_lines(lines)
}

/// A committed conditional matched none of its templates.
#[cold]
pub fn malformed_conditional(lines: Option<LineRange>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedConditional).with_lines(lines)
}

/// A committed loop matched none of its templates.
#[cold]
pub fn malformed_loop(lines: Option<LineRange>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedLoop).with_lines(lines)
}

/// Nothing left to evaluate.
#[cold]
pub fn empty_statement(lines: Option<LineRange>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyStatement).with_lines(lines)
}

/// A case particle with no noun in front of it.
#[cold]
pub fn missing_argument(particle: &str, lines: Option<LineRange>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingArgument {
        particle: particle.to_string(),
    })
    .with_lines(lines)
}

// Argument Errors

/// Loop count evaluated to something other than a number.
#[cold]
pub fn count_not_number(got: &Value, lines: Option<LineRange>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CountNotNumber {
        got: got.type_name().to_string(),
    })
    .with_lines(lines)
}

/// `に` slot of 表示 is not an output sink.
#[cold]
pub fn not_a_sink(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotASink {
        got: got.type_name().to_string(),
    })
}

/// A built-in asked for an argument slot that was not filled.
#[cold]
pub fn missing_slot(particle: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingSlot {
        particle: particle.to_string(),
    })
}

/// Comparison between values of unrelated types.
#[cold]
pub fn incomparable_values(left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncomparableValues {
        left: left.type_name().to_string(),
        right: right.type_name().to_string(),
    })
}

#[cfg(test)]
mod tests;
