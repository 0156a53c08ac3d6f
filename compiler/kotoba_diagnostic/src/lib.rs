//! Diagnostic system for Kotoba error reporting.
//!
//! Every fatal error the interpreter raises maps to an [`ErrorCode`] so it
//! can be searched for and explained (`kotoba explain E1003`). A
//! [`Diagnostic`] pairs the code with a message and the line range the error
//! was raised at; only the top-level driver turns it into text.

mod diagnostic;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCode, ErrorPhase};
pub use errors::ErrorDocs;
