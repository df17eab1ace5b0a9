//! Tracing subscriber initialization

use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber
///
/// `RUST_LOG` wins when set. Otherwise the level follows the `-v` count:
/// warn, then debug, then trace.
pub fn init_logging(verbosity: u8, use_color: bool) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_color)
        .compact()
        .init();
}
