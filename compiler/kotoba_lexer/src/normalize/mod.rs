//! Width folding and spacing removal.

/// Offset between a full-width ASCII variant (U+FF01..U+FF5E) and its
/// half-width counterpart.
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Fold a full-width letter, digit, or number sign to half-width.
///
/// The decimal point and signs are folded too so that `－３．５` reads as a
/// numeric literal. Every other character is returned unchanged.
#[inline]
pub fn fold_width(c: char) -> char {
    match c {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' | '．' | '－' | '＋' => {
            char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}

/// True for characters dropped before tokenizing.
#[inline]
fn is_stripped(c: char) -> bool {
    matches!(c, '\u{3000}' | '、' | '，' | '\t' | ' ' | '\r')
}

/// Fold widths and strip ideographic spaces, commas, tabs, spaces, and
/// carriage returns.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !is_stripped(*c))
        .map(fold_width)
        .collect()
}
