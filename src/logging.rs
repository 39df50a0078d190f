use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with both console and file output.
///
/// The returned guard must stay alive for the duration of the process
/// so buffered file logs are flushed on exit.
pub fn init_logging() -> WorkerGuard {
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "shootmap.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    // JSON to the rolling file, human-readable to the console
    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("shootmap=info".parse().unwrap()))
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
