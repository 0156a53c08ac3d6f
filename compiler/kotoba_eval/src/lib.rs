//! Kotoba Eval - fused parser and evaluator for Kotoba scripts.
//!
//! Kotoba statements read like simplified Japanese sentences: particles
//! mark arguments and trailing keywords mark the operation.
//!
//! ```text
//! aを5とする
//! もしaが3より大きいならばaをコンソールに表示する
//! ```
//!
//! # Architecture
//!
//! - [`Code`]: token cursor with enclosure-aware scanning and a saved
//!   position stack ([`Checkpoint`] guards it)
//! - [`match_template`]: keyword/capture templates with backtracking
//! - [`evaluate`] / [`run`]: grammar productions, each recognized and
//!   evaluated in one step
//! - [`Context`]: the single shared scope and the built-in table
//!
//! Errors are fatal and carry the line range they were raised at; see
//! [`EvalError`].

pub mod builtins;
pub mod code;
pub mod context;
pub mod errors;
mod eval_mode;
pub mod grammar;
pub mod matcher;
mod sink;
mod value;

pub use builtins::{Arguments, Builtin, BuiltinFn};
pub use code::{Checkpoint, Code};
pub use context::{Context, ContextBuilder, Scope, ALERT, CONSOLE};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use eval_mode::{EvalMode, ALERT_PREFIX};
pub use grammar::{evaluate, run};
pub use matcher::{match_template, Captures, Part};
pub use sink::{
    buffer_sink, silent_sink, stderr_sink, stdout_sink, BufferSink, SharedSink, SinkImpl,
    StderrSink, StdoutSink,
};
pub use value::Value;

use tracing::debug;

/// Run a whole script in `ctx`.
///
/// The source is normalized and tokenized with line numbers starting at
/// the context's first line, then run as a statement sequence. Returns the
/// value of the last statement.
pub fn run_source(source: &str, ctx: &mut Context) -> EvalResult {
    let mut code = Code::from_source(source, ctx.first_line());
    debug!(tokens = code.len(), "run_source");
    run(&mut code, ctx)
}

#[cfg(test)]
mod tests;
