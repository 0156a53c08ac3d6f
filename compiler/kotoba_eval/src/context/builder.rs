//! `ContextBuilder` for creating contexts with various configurations.

use crate::builtins::{self, Builtin};
use crate::eval_mode::EvalMode;
use crate::sink::SharedSink;
use crate::Value;

use super::{Context, Scope, ALERT, CONSOLE};

/// Builder for [`Context`].
///
/// Sinks not set explicitly come from the mode. The standard built-ins are
/// always registered first; extra built-ins follow in the order given and
/// the table is fixed once `build()` returns.
pub struct ContextBuilder {
    mode: EvalMode,
    console: Option<SharedSink>,
    alert: Option<SharedSink>,
    diagnostics: Option<SharedSink>,
    host_sinks: bool,
    builtins: Vec<Builtin>,
    bindings: Vec<(String, Value)>,
    first_line: u32,
}

impl ContextBuilder {
    /// Create a builder with `Interpret` mode and line numbering from 1.
    pub fn new() -> Self {
        ContextBuilder {
            mode: EvalMode::default(),
            console: None,
            alert: None,
            diagnostics: None,
            host_sinks: true,
            builtins: Vec::new(),
            bindings: Vec::new(),
            first_line: 1,
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sink bound as `コンソール`.
    #[must_use]
    pub fn console(mut self, sink: SharedSink) -> Self {
        self.console = Some(sink);
        self
    }

    /// Sink bound as `警告`.
    #[must_use]
    pub fn alert(mut self, sink: SharedSink) -> Self {
        self.alert = Some(sink);
        self
    }

    /// Destination of `デバッグ表示`.
    #[must_use]
    pub fn diagnostics(mut self, sink: SharedSink) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Do not bind `コンソール` and `警告`.
    #[must_use]
    pub fn without_host_sinks(mut self) -> Self {
        self.host_sinks = false;
        self
    }

    /// Register an extra built-in after the standard ones.
    #[must_use]
    pub fn builtin(mut self, builtin: Builtin) -> Self {
        self.builtins.push(builtin);
        self
    }

    /// Bind a host value before the script runs.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: Value) -> Self {
        self.bindings.push((name.into(), value));
        self
    }

    /// Line number given to the first line of a script.
    #[must_use]
    pub fn first_line(mut self, line: u32) -> Self {
        self.first_line = line;
        self
    }

    pub fn build(self) -> Context {
        let mode = self.mode;
        let mut scope = Scope::new();
        if self.host_sinks {
            let console = self.console.unwrap_or_else(|| mode.console_sink());
            let alert = self.alert.unwrap_or_else(|| mode.alert_sink());
            scope.define(CONSOLE, Value::Sink(console));
            scope.define(ALERT, Value::Sink(alert));
        }
        for (name, value) in self.bindings {
            scope.define(name, value);
        }

        let mut table = builtins::standard();
        table.extend(self.builtins);

        Context {
            scope,
            builtins: table,
            diagnostics: self.diagnostics.unwrap_or_else(|| mode.diagnostic_sink()),
            mode,
            first_line: self.first_line,
        }
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
