// Server module entry
// Listener setup, connection handling, accept loop, and signal handling

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module file keeps the name but mounts as server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used functions
pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
