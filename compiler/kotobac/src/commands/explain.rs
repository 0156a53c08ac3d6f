//! `kotoba explain`: documentation for error codes.

use kotoba_diagnostic::{ErrorCode, ErrorDocs};

use super::{EXIT_FAILURE, EXIT_OK};

/// The documentation for `code_str`, or a message saying why there is none.
///
/// Failures end with the list of codes that do have documentation.
pub fn explanation(code_str: &str) -> Result<&'static str, String> {
    let code = code_str
        .parse::<ErrorCode>()
        .map_err(|e| format!("{e}\n\n{}", documented_list()))?;
    ErrorDocs::get(code).ok_or_else(|| {
        format!(
            "no documentation available for {code} ({})\n\n{}",
            code.summary(),
            documented_list()
        )
    })
}

fn documented_list() -> String {
    let codes: Vec<String> = ErrorDocs::documented().map(|code| code.to_string()).collect();
    format!("Documented codes: {}", codes.join(", "))
}

/// Print the documentation for an error code. Returns the exit code.
pub fn explain_error(code_str: &str) -> i32 {
    match explanation(code_str) {
        Ok(doc) => {
            println!("{doc}");
            EXIT_OK
        }
        Err(message) => {
            eprintln!("{message}");
            EXIT_FAILURE
        }
    }
}
