//! Output sinks.
//!
//! A sink is the opaque output capability a host binds into scope
//! (`コンソール`, `警告`) and the destination of the `表示` built-in. The
//! context also keeps one for `デバッグ表示`.
//!
//! Enum dispatch keeps the per-line call static: no vtable on the output
//! path.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes lines to stdout.
#[derive(Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Writes lines to stderr, each prefixed (alert-style output).
pub struct StderrSink {
    prefix: String,
}

impl StderrSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        StderrSink {
            prefix: prefix.into(),
        }
    }

    pub fn println(&self, msg: &str) {
        eprintln!("{}{msg}", self.prefix);
    }
}

/// Captures lines in memory.
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        BufferSink {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink implementation using enum dispatch.
pub enum SinkImpl {
    Stdout(StdoutSink),
    Stderr(StderrSink),
    Buffer(BufferSink),
    /// Discards everything.
    Silent,
}

impl SinkImpl {
    /// Write one line.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(s) => s.println(msg),
            Self::Stderr(s) => s.println(msg),
            Self::Buffer(s) => s.println(msg),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for sinks that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(s) => s.output(),
            Self::Stdout(_) | Self::Stderr(_) | Self::Silent => String::new(),
        }
    }

    /// Clear captured output. No-op for sinks that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(s) = self {
            s.clear();
        }
    }

    /// Name shown when a sink value is displayed.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stdout(_) => "標準出力",
            Self::Stderr(_) => "標準エラー",
            Self::Buffer(_) => "バッファ",
            Self::Silent => "無効",
        }
    }
}

impl std::fmt::Debug for SinkImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SinkImpl({})", self.label())
    }
}

/// Shared sink handle. Values holding the same handle compare equal.
pub type SharedSink = Arc<SinkImpl>;

pub fn stdout_sink() -> SharedSink {
    Arc::new(SinkImpl::Stdout(StdoutSink))
}

/// Stderr sink with a line prefix (e.g. `"警告: "`).
pub fn stderr_sink(prefix: impl Into<String>) -> SharedSink {
    Arc::new(SinkImpl::Stderr(StderrSink::new(prefix)))
}

pub fn buffer_sink() -> SharedSink {
    Arc::new(SinkImpl::Buffer(BufferSink::new()))
}

pub fn silent_sink() -> SharedSink {
    Arc::new(SinkImpl::Silent)
}

#[cfg(test)]
mod tests;
