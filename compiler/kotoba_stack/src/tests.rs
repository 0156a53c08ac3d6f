use super::*;

#[test]
fn nested_depth_count() {
    // Mirrors how nested parentheses recurse: one frame per level.
    fn depth(text: &str) -> usize {
        ensure_sufficient_stack(|| match text.strip_prefix('(') {
            Some(rest) => 1 + depth(rest.strip_suffix(')').unwrap_or(rest)),
            None => 0,
        })
    }

    assert_eq!(depth("((()))"), 3);
}

#[test]
fn deep_recursion_does_not_overflow() {
    fn deep_recurse(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { deep_recurse(n - 1) + 1 })
    }

    // 100k frames would overflow a typical 8MB main-thread stack.
    assert_eq!(deep_recurse(100_000), 100_000);
}

#[test]
fn passes_results_through() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
    assert_eq!(result, Ok(123));
}
