//! Multi-needle keyword split.
//!
//! The working set of fragments is split on each keyword in turn (table
//! order). A fragment produced by an earlier split that *is* a keyword is
//! never split again, so `ならば` survives later needles.

use memchr::memmem::Finder;

/// A piece of normalized text and whether it is a keyword occurrence.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Fragment<'a> {
    pub text: &'a str,
    pub keyword: bool,
}

/// Split `text` on every string in `keywords`, keeping the keywords.
///
/// Leftmost-first within each needle pass; empty fragments are dropped.
pub(crate) fn split_on_keywords<'a>(text: &'a str, keywords: &[&str]) -> Vec<Fragment<'a>> {
    let mut fragments = Vec::new();
    if !text.is_empty() {
        fragments.push(Fragment {
            text,
            keyword: false,
        });
    }

    for keyword in keywords {
        if keyword.is_empty() {
            continue;
        }
        let finder = Finder::new(keyword.as_bytes());
        let mut next = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            if fragment.keyword {
                next.push(fragment);
            } else {
                split_one(fragment.text, keyword.len(), &finder, &mut next);
            }
        }
        fragments = next;
    }
    fragments
}

/// Split a single plain fragment on one needle.
///
/// Match offsets from a UTF-8 needle always land on char boundaries, so
/// the slicing below cannot split a character.
fn split_one<'a>(text: &'a str, needle_len: usize, finder: &Finder<'_>, out: &mut Vec<Fragment<'a>>) {
    let mut rest = text;
    while let Some(at) = finder.find(rest.as_bytes()) {
        if at > 0 {
            out.push(Fragment {
                text: &rest[..at],
                keyword: false,
            });
        }
        let end = at + needle_len;
        out.push(Fragment {
            text: &rest[at..end],
            keyword: true,
        });
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        out.push(Fragment {
            text: rest,
            keyword: false,
        });
    }
}

#[cfg(test)]
mod tests;
