use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::sync::Notify;

use yarcs::config::{AppState, Config};
use yarcs::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_from("config")?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(AppState::new(&cfg));

    // Seed the default `main` page on first run; no-op afterwards
    state.pages.ensure_initialized().await?;
    logger::log_pages_initialized(state.pages.registry_path());

    let shutdown = Arc::new(Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown), Arc::clone(&state));

    logger::log_server_start(&addr, &cfg);

    let connections = Arc::new(AtomicUsize::new(0));

    // LocalSet so connection tasks can be spawned with spawn_local
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(
            listener,
            state,
            connections,
            shutdown,
        ))
        .await
}
