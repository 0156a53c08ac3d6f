//! `kotoba run`.

use kotoba_eval::{run_source, Context, EvalMode, Value};
use tracing::debug;

use super::{read_file, EXIT_FAILURE, EXIT_OK};

/// Options for `kotoba run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub path: String,
    /// Discard all output.
    pub silent: bool,
    /// Do not bind `コンソール` and `警告`.
    pub no_console: bool,
    pub first_line: u32,
}

impl RunOptions {
    pub fn new(path: impl Into<String>) -> Self {
        RunOptions {
            path: path.into(),
            silent: false,
            no_console: false,
            first_line: 1,
        }
    }

    fn mode(&self) -> EvalMode {
        if self.silent {
            EvalMode::Silent
        } else {
            EvalMode::Interpret
        }
    }
}

/// Parse the arguments after `run`.
///
/// Flags may come before or after the path.
pub fn parse_run_args(args: &[String]) -> Result<RunOptions, String> {
    let mut path = None;
    let mut options = RunOptions::new("");

    for arg in args {
        if arg == "--silent" || arg == "-s" {
            options.silent = true;
        } else if arg == "--no-console" {
            options.no_console = true;
        } else if let Some(line) = arg.strip_prefix("--first-line=") {
            options.first_line = line
                .parse()
                .map_err(|_| format!("error: invalid line number '{line}'"))?;
        } else if arg.starts_with('-') {
            return Err(format!("error: unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("error: unexpected argument '{arg}'"));
        }
    }

    options.path = path.ok_or_else(|| "error: missing file path".to_string())?;
    Ok(options)
}

/// Run `source` in a context built for `options`.
///
/// Errors come back rendered, ready for stderr.
pub fn run_script(source: &str, options: &RunOptions, mut ctx: Context) -> Result<Value, String> {
    run_source(source, &mut ctx).map_err(|error| {
        error
            .to_diagnostic()
            .render(Some(options.path.as_str()))
    })
}

/// Read and run a script file. Returns the exit code.
pub fn run_file(options: &RunOptions) -> i32 {
    let source = match read_file(&options.path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("{message}");
            return EXIT_FAILURE;
        }
    };

    let mut builder = Context::builder()
        .mode(options.mode())
        .first_line(options.first_line);
    if options.no_console {
        builder = builder.without_host_sinks();
    }

    match run_script(&source, options, builder.build()) {
        Ok(value) => {
            debug!(%value, "script finished");
            EXIT_OK
        }
        Err(rendered) => {
            eprint!("{rendered}");
            EXIT_FAILURE
        }
    }
}
