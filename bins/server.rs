use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    // .env first so RUST_LOG, LOG_FORMAT and DATABASE_URL take effect
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance_id = Uuid::new_v4();
    std::panic::set_hook(Box::new(move |info| {
        error!(service = "song-server", event = "panic", %instance_id, message = %info, "unhandled panic");
    }));

    let cfg = match server::startup::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            let error = format!("{e:#}");
            error!(service = "song-server", event = "config_failed", %error, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = cfg.server.worker_threads {
        builder.worker_threads(threads);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "song-server",
                event = "runtime_build_failed",
                error = %e,
                "cannot build tokio runtime"
            );
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "song-server",
        event = "start",
        %instance_id,
        version = env!("CARGO_PKG_VERSION"),
        threads = ?cfg.server.worker_threads,
        "song server starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "song-server", event = "stop", %instance_id, "song server exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error = format!("{e:#}");
            error!(service = "song-server", event = "run_failed", %error, "song server failed");
            ExitCode::FAILURE
        }
    }
}
