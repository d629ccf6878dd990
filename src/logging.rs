use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes tracing for the CLI.
///
/// Filter precedence: `RUST_LOG` when set, otherwise `sprout=debug` with
/// `verbose` and `sprout=info` without. Log output goes to stderr so
/// reports on stdout stay machine-readable; an optional rotating JSON
/// log file can be added on top.
pub fn init(verbose: bool, log_file: Option<&Path>) {
    let fallback = if verbose { "sprout=debug" } else { "sprout=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match log_file {
        Some(path) => {
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let _ = std::fs::create_dir_all(directory);
            let file_name = path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("sprout.log"));
            let appender = tracing_appender::rolling::daily(directory, file_name);
            let file_layer = fmt::layer().with_writer(appender).with_ansi(false).json();
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }
}
