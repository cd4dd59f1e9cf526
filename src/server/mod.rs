// Server module entry point
// Listener setup and the accept loop.

pub mod connection;
pub mod listener;

pub use listener::create_listener;

use crate::config::AppState;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections forever, one spawned task per connection.
///
/// Accept errors are transient (the peer may have reset before the
/// accept completed); they are logged and the loop continues. The only
/// way out of this function is process termination.
pub async fn run(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::spawn_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
