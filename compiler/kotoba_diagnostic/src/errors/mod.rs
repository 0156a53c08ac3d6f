//! Long-form error documentation for `kotoba explain`.
//!
//! One markdown file per code, embedded at compile time. The catch-all
//! `E6099` has none.

use crate::ErrorCode;

/// Embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Documentation for `code`, if it has any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        let doc = match code {
            ErrorCode::E1001 => include_str!("E1001.md"),
            ErrorCode::E1002 => include_str!("E1002.md"),
            ErrorCode::E1003 => include_str!("E1003.md"),
            ErrorCode::E1004 => include_str!("E1004.md"),
            ErrorCode::E1005 => include_str!("E1005.md"),
            ErrorCode::E1006 => include_str!("E1006.md"),
            ErrorCode::E6001 => include_str!("E6001.md"),
            ErrorCode::E6002 => include_str!("E6002.md"),
            ErrorCode::E6003 => include_str!("E6003.md"),
            ErrorCode::E6004 => include_str!("E6004.md"),
            ErrorCode::E6099 => return None,
        };
        Some(doc)
    }

    /// Codes with documentation, in catalogue order.
    pub fn documented() -> impl Iterator<Item = ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .filter(|code| Self::get(*code).is_some())
    }
}
