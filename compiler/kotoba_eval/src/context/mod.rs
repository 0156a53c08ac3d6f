//! Execution context.
//!
//! The context owns the shared scope, the built-in table, and the
//! diagnostic sink. It is created once per run and threaded by `&mut`
//! through every production, which is what makes the scope shared.

mod builder;
mod scope;

use crate::builtins::Builtin;
use crate::eval_mode::EvalMode;
use crate::sink::SharedSink;
use crate::Value;

pub use builder::ContextBuilder;
pub use scope::Scope;

/// Name the console sink is bound under.
pub const CONSOLE: &str = "コンソール";

/// Name the alert sink is bound under.
pub const ALERT: &str = "警告";

/// State for one interpreter run.
pub struct Context {
    scope: Scope,
    builtins: Vec<Builtin>,
    diagnostics: SharedSink,
    mode: EvalMode,
    first_line: u32,
}

impl Context {
    /// Start building a context.
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.scope.lookup(name)
    }

    /// Bind `name`, overwriting any existing binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.scope.define(name, value);
    }

    #[inline]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Registered built-ins in registration order.
    #[inline]
    pub fn builtins(&self) -> &[Builtin] {
        &self.builtins
    }

    /// Destination of `デバッグ表示`.
    #[inline]
    pub fn diagnostics(&self) -> &SharedSink {
        &self.diagnostics
    }

    #[inline]
    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    /// Line number the first line of a script is given.
    #[inline]
    pub fn first_line(&self) -> u32 {
        self.first_line
    }
}

impl Default for Context {
    fn default() -> Self {
        ContextBuilder::new().build()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("scope", &self.scope)
            .field(
                "builtins",
                &self.builtins.iter().map(Builtin::name).collect::<Vec<_>>(),
            )
            .field("mode", &self.mode)
            .field("first_line", &self.first_line)
            .finish_non_exhaustive()
    }
}
