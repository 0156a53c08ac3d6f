//! Core diagnostic type.
//!
//! Defines [`Diagnostic`] and [`Severity`], the user-facing form of every
//! fatal interpreter error.

use kotoba_ir::LineRange;
use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A rendered-on-demand error report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Where the error was raised. `None` only for errors that happen
    /// before any token exists (e.g. reading the script file).
    pub lines: Option<LineRange>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Start an error diagnostic with the given code and no message.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: String::new(),
            lines: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_lines(mut self, lines: LineRange) -> Self {
        self.lines = Some(lines);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// True for error severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render the diagnostic as terminal text.
    ///
    /// ```text
    /// error[E1003]: `「` is never closed
    ///   --> hello.kt: line 3
    ///   = note: syntax error
    /// ```
    pub fn render(&self, path: Option<&str>) -> String {
        let mut out = format!("{}[{}]: {}\n", self.severity, self.code, self.message);
        match (path, self.lines) {
            (Some(path), Some(lines)) => out.push_str(&format!("  --> {path}: {lines}\n")),
            (Some(path), None) => out.push_str(&format!("  --> {path}\n")),
            (None, Some(lines)) => out.push_str(&format!("  --> {lines}\n")),
            (None, None) => {}
        }
        for note in &self.notes {
            out.push_str(&format!("  = note: {note}\n"));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lines {
            Some(lines) => write!(f, "[{}] {}: {}", self.code, lines, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

#[cfg(test)]
mod tests;
