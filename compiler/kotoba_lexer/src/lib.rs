//! Lexer for Kotoba.
//!
//! Two passes over raw script text:
//! 1. [`normalize`] folds full-width alphanumerics to half-width and strips
//!    spacing characters (Kotoba statements are not whitespace-sensitive).
//! 2. [`tokenize`] splits the normalized text on every keyword in the
//!    keyword table and tags each fragment with its line.
//!
//! The tokenizer knows nothing about nesting. A `ここまで` inside `「…」` is
//! still split out as its own token; the token cursor in `kotoba_eval` is
//! what treats enclosure interiors as opaque.

mod normalize;
mod split;

use kotoba_ir::{all_keywords, Token};

pub use normalize::{fold_width, normalize};

/// Normalize and tokenize `raw`, numbering lines from `first_line`.
///
/// Only a newline token advances the line counter; the newline itself is
/// tagged with the line it ends. Empty fragments (between adjacent
/// keywords) never become tokens.
pub fn tokenize(raw: &str, first_line: u32) -> Vec<Token> {
    let text = normalize(raw);
    let keywords = all_keywords();
    let fragments = split::split_on_keywords(&text, &keywords);

    let mut line = first_line;
    let mut tokens = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        tokens.push(Token::new(fragment.text, line));
        if fragment.keyword && fragment.text == "\n" {
            line = line.saturating_add(1);
        }
    }
    tokens
}
