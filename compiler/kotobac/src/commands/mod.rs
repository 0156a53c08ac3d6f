//! Command handlers for the Kotoba CLI.
//!
//! Each handler returns the process exit code instead of exiting, so the
//! binary stays a thin dispatcher.

mod explain;
mod lex;
mod run;

pub use explain::{explain_error, explanation};
pub use lex::{format_tokens, lex_file};
pub use run::{parse_run_args, run_file, run_script, RunOptions};

/// Exit code for success.
pub const EXIT_OK: i32 = 0;

/// Exit code for any failure (read error, syntax error, argument error).
pub const EXIT_FAILURE: i32 = 1;

/// Read a script, or report why not.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("error: cannot read '{path}': {e}"))
}
