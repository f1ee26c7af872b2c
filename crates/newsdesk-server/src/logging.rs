//! Structured logging setup with `tracing`.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Initialize the global tracing subscriber.
///
/// Informational output goes to stdout; warnings and errors go to stderr.
/// `RUST_LOG` overrides the default level when set. Call once at
/// application startup; subsequent calls are no-ops.
///
/// # Arguments
///
/// * `level` - Minimum log level when `RUST_LOG` is unset.
pub fn init_subscriber(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(writer)
        .compact();

    // try_init is a no-op if a subscriber is already installed
    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_subscriber_does_not_panic() {
        // Repeated calls should be safe (no-op after the first)
        init_subscriber("info");
        init_subscriber("debug");
    }
}
