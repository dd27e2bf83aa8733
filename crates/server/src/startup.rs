use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use configs::AppConfig;
use models::db::{connect_with_config, test_connection, DatabaseConfig};

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file at `CONFIG_PATH` (default `config.toml`), or environment
/// variables when that file does not exist.
pub fn load_config() -> anyhow::Result<AppConfig> {
    load_config_at(&configs::config_path())
}

/// A present but broken file is an error; only a missing file falls back to
/// the environment.
pub fn load_config_at(path: &str) -> anyhow::Result<AppConfig> {
    match configs::load_if_present(path)? {
        Some(cfg) => {
            info!(path, "loaded config file");
            Ok(cfg)
        }
        None => {
            info!(path, "no config file; using environment");
            AppConfig::from_env().context("invalid configuration from environment")
        }
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect the pool and apply pending migrations when enabled.
pub async fn connect_database(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::from(cfg)).await?;
    test_connection(&db).await.context("database ping failed")?;
    if cfg.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    }
    Ok(db)
}

pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received; draining in-flight requests");
}

/// Serve until Ctrl+C or SIGTERM, letting in-flight requests finish.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_database(&cfg.database).await?;
    let app = build_app(db);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting song server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("song server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 9090;
        assert_eq!(bind_addr(&cfg).unwrap().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn broken_config_file_is_reported_not_replaced() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"[server]\nhost = \"10.0.0.1\"\nport = 0\n\n[database]\nurl = \"sqlite::memory:\"\n")
            .unwrap();
        let err = load_config_at(f.path().to_str().unwrap()).unwrap_err();
        assert!(format!("{err:#}").contains("server.port"));
    }

    #[test]
    fn config_file_values_are_used() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"[server]\nhost = \"10.0.0.1\"\nport = 9001\nworker_threads = 2\n\n")
            .unwrap();
        f.write_all(b"[database]\nurl = \"sqlite::memory:\"\n").unwrap();
        let cfg = load_config_at(f.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.host, "10.0.0.1");
        assert_eq!(cfg.server.port, 9001);
        // the binary sizes its runtime from this value
        assert_eq!(cfg.server.worker_threads, Some(2));
    }

    #[tokio::test]
    async fn connect_database_runs_migrations() -> anyhow::Result<()> {
        let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        let db = connect_database(&cfg).await?;
        let svc = ServerState::new(db);
        assert!(svc.query.songs(5).await?.is_empty());
        Ok(())
    }
}
