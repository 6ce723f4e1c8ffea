// Server loop module
// Accept loop with signal-driven graceful shutdown

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// How long shutdown waits for in-flight connections before giving up
const DRAIN_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Accept connections until the shutdown signal fires, then drain.
///
/// In-flight connections run in their own tasks; shutdown stops accepting,
/// waits up to `DRAIN_TIMEOUT` for the active-connection counter to reach
/// zero, and returns.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown_begin();
                break;
            }
        }
    }

    drop(listener);

    let deadline = tokio::time::Instant::now() + DRAIN_TIMEOUT;
    while active_connections.load(Ordering::SeqCst) > 0 {
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown drain timed out with {} connection(s) still active",
                active_connections.load(Ordering::SeqCst)
            ));
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    logger::log_shutdown_complete();
    Ok(())
}
