//! Stack safety for the fused parser/evaluator.
//!
//! Kotoba evaluates nested `ここから…ここまで` blocks, parenthesized
//! sub-expressions, and conditional branches by plain recursion, so the
//! native stack depth follows the script's nesting depth. Wrapping each
//! recursive `evaluate` in [`ensure_sufficient_stack`] grows the stack on
//! demand instead of overflowing on pathological input.
//!
//! - **Native targets**: `stacker` grows the stack.
//! - **WASM targets**: passthrough.

/// Grow when less than this remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
