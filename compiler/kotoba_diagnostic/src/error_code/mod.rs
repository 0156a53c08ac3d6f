//! Error codes for all interpreter diagnostics.
//!
//! The first digit gives the error kind:
//! - E1xxx: syntax errors (no production matched, unclosed enclosures)
//! - E6xxx: argument errors (a runtime value broke a built-in's precondition)

use std::fmt;
use std::str::FromStr;

/// Error codes for all interpreter diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Syntax Errors (E1xxx)
    /// No grammar production matched the statement
    E1001,
    /// Empty statement where an expression was required
    E1002,
    /// Enclosure opened but never closed
    E1003,
    /// Conditional did not fit any conditional form
    E1004,
    /// Loop did not fit any loop form
    E1005,
    /// Case particle with no argument before it
    E1006,

    // Argument Errors (E6xxx)
    /// Loop count is not a number
    E6001,
    /// Display destination is not an output sink
    E6002,
    /// Required argument slot was not filled
    E6003,
    /// Values cannot be compared
    E6004,
    /// Uncategorized runtime error raised by a built-in
    E6099,
}

/// The two kinds of fatal error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorPhase {
    Syntax,
    Argument,
}

impl fmt::Display for ErrorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPhase::Syntax => write!(f, "syntax error"),
            ErrorPhase::Argument => write!(f, "argument error"),
        }
    }
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        // Syntax
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        // Argument
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6099,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6099 => "E6099",
        }
    }

    /// One-line summary used by `kotoba explain` when listing codes.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "statement could not be interpreted",
            ErrorCode::E1002 => "empty statement",
            ErrorCode::E1003 => "unclosed enclosure",
            ErrorCode::E1004 => "malformed conditional",
            ErrorCode::E1005 => "malformed loop",
            ErrorCode::E1006 => "argument missing before particle",
            ErrorCode::E6001 => "loop count is not a number",
            ErrorCode::E6002 => "destination is not an output sink",
            ErrorCode::E6003 => "required argument not given",
            ErrorCode::E6004 => "values cannot be compared",
            ErrorCode::E6099 => "runtime error",
        }
    }

    /// Which kind of fatal error this code reports.
    pub fn phase(&self) -> ErrorPhase {
        if self.is_syntax_error() {
            ErrorPhase::Syntax
        } else {
            ErrorPhase::Argument
        }
    }

    /// Check if this is a syntax error (E1xxx range).
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
        )
    }

    /// Check if this is an argument error (E6xxx range).
    pub fn is_argument_error(&self) -> bool {
        !self.is_syntax_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known error code.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Accepts `E1003` as well as lowercase `e1003`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}
