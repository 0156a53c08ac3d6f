//! Evaluation modes.
//!
//! The mode picks the default sinks a context is built with and whether
//! built-ins may produce output at all.

use crate::sink::{buffer_sink, silent_sink, stderr_sink, stdout_sink, SharedSink};

/// Prefix for lines written to the alert sink in `Interpret` mode.
pub const ALERT_PREFIX: &str = "警告: ";

/// How a run treats output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// `kotoba run`: console to stdout, alerts and debug output to stderr.
    #[default]
    Interpret,
    /// Every sink is an in-memory buffer (tests, embedders).
    Capture,
    /// All output is discarded.
    Silent,
}

impl EvalMode {
    /// Whether output built-ins write anything.
    #[inline]
    pub fn allows_output(self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Default sink bound as `コンソール`.
    pub fn console_sink(self) -> SharedSink {
        match self {
            Self::Interpret => stdout_sink(),
            Self::Capture => buffer_sink(),
            Self::Silent => silent_sink(),
        }
    }

    /// Default sink bound as `警告`.
    pub fn alert_sink(self) -> SharedSink {
        match self {
            Self::Interpret => stderr_sink(ALERT_PREFIX),
            Self::Capture => buffer_sink(),
            Self::Silent => silent_sink(),
        }
    }

    /// Default destination of `デバッグ表示`.
    pub fn diagnostic_sink(self) -> SharedSink {
        match self {
            Self::Interpret => stderr_sink(""),
            Self::Capture => buffer_sink(),
            Self::Silent => silent_sink(),
        }
    }
}

#[cfg(test)]
mod tests;
