//! `kotoba lex`: dump the token stream.

use kotoba_ir::Token;

use super::{read_file, EXIT_FAILURE, EXIT_OK};

/// One `line<TAB>token` row per token. Newline tokens are shown as `\n`.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let text = if token.is_delimiter() && token.text() == "\n" {
            "\\n"
        } else {
            token.text()
        };
        out.push_str(&format!("{}\t{text}\n", token.line()));
    }
    out
}

/// Tokenize a file and print its tokens. Returns the exit code.
pub fn lex_file(path: &str, first_line: u32) -> i32 {
    match read_file(path) {
        Ok(source) => {
            print!("{}", format_tokens(&kotoba_lexer::tokenize(&source, first_line)));
            EXIT_OK
        }
        Err(message) => {
            eprintln!("{message}");
            EXIT_FAILURE
        }
    }
}
