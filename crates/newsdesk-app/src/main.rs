//! # newsdesk-app
//!
//! Newsdesk server binary — wires the storage backend to the HTTP server
//! and starts listening.

#![deny(unsafe_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use newsdesk_server::{ServerConfig, logging, router};
use newsdesk_store::{ConnectionConfig, Store, new_file, run_migrations};

/// Newsdesk web server.
#[derive(Parser, Debug)]
#[command(name = "newsdesk", about = "Newsdesk web server")]
struct Cli {
    /// Host to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind.
    #[arg(long, default_value = "3111")]
    port: u16,

    /// Path to the `SQLite` database file.
    #[arg(long, default_value = "newsdesk.db")]
    db_path: PathBuf,

    /// Minimum log level when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_subscriber(&cli.log_level);

    ensure_parent_dir(&cli.db_path)?;
    let pool = new_file(&cli.db_path, &ConnectionConfig::default())
        .with_context(|| format!("failed to open database at {}", cli.db_path.display()))?;
    {
        let conn = pool.get()?;
        let applied = run_migrations(&conn)?;
        if applied > 0 {
            info!(applied, "database migrations applied");
        }
    }
    let store = Arc::new(Store::new(pool));

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
    };
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(addr = %listener.local_addr()?, db = %cli.db_path.display(), "newsdesk listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["newsdesk"]);
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 3111);
        assert_eq!(cli.db_path, PathBuf::from("newsdesk.db"));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn cli_overrides() {
        let cli = Cli::parse_from([
            "newsdesk",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--db-path",
            "/tmp/nd/posts.db",
        ]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.db_path, PathBuf::from("/tmp/nd/posts.db"));
    }

    #[test]
    fn ensure_parent_dir_handles_bare_filename() {
        // A bare filename has an empty parent; nothing to create.
        ensure_parent_dir(Path::new("newsdesk.db")).unwrap();
    }
}
