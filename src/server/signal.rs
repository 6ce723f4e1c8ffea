// Signal handling module (nginx-style)
//
// Supported signals:
// - SIGHUP:  Re-check page initialization (recreates a deleted default page)
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::logger;

/// Start signal handlers (Unix)
///
/// Spawns a background task that listens for Unix signals:
///
/// | Signal  | Action                        |
/// |---------|-------------------------------|
/// | SIGHUP  | Re-run page initialization    |
/// | SIGTERM | Graceful stop                 |
/// | SIGINT  | Graceful stop (Ctrl+C)        |
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>, state: Arc<AppState>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sighup = match signal(SignalKind::hangup()) {
            Ok(s) => s,
            Err(e) => {
                logger::log_error(&format!("Failed to register SIGHUP handler: {e}"));
                return;
            }
        };
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                return;
            }
        };
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
                return;
            }
        };

        loop {
            tokio::select! {
                _ = sighup.recv() => {
                    logger::log_warning("SIGHUP received, re-checking page initialization");
                    match state.pages.ensure_initialized().await {
                        Ok(()) => logger::log_pages_initialized(state.pages.registry_path()),
                        Err(e) => logger::log_error(&format!("Page re-initialization failed: {e}")),
                    }
                }

                _ = sigterm.recv() => {
                    logger::log_warning("SIGTERM received, initiating graceful shutdown");
                    shutdown.notify_one();
                    break;
                }

                _ = sigint.recv() => {
                    logger::log_warning("SIGINT received, initiating graceful shutdown");
                    shutdown.notify_one();
                    break;
                }
            }
        }
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>, _state: Arc<AppState>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            logger::log_warning("Ctrl+C received, initiating graceful shutdown");
            shutdown.notify_one();
        }
    });
}
