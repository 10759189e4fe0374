use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // Load env files first so RUST_LOG / LOG_FORMAT and DB_* credentials are visible
    dotenvy::dotenv().ok();
    dotenvy::from_filename("passwords.env").ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "order-service", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "order-service",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "order-service", event = "config_invalid", error = %e, "cannot load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "order-service", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "order-service",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "order service starting"
    );

    // server::run_with_config owns graceful shutdown on Ctrl+C / SIGTERM
    match rt.block_on(server::run_with_config(cfg)) {
        Ok(()) => {
            info!(service = "order-service", event = "stop", %service_id, pid, "order service stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "order-service", event = "run_failed", error = %e, "order service exited with error");
            std::process::ExitCode::FAILURE
        }
    }
}
