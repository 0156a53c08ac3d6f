//! Kotoba CLI support.
//!
//! The binary (`kotoba`) only parses arguments and maps results to exit
//! codes; everything it calls lives here so it can be tested without
//! spawning a process.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber if `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call does anything.
///
/// ```text
/// RUST_LOG=kotoba_eval=debug kotoba run hello.kt
/// RUST_LOG=kotoba_eval::code=trace kotoba run hello.kt
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
