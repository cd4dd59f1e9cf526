use servedir::config::{AppState, ServerConfig};
use servedir::logger;
use servedir::server;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ServerConfig::default();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind failure (port in use, insufficient privilege) is fatal
    let listener = server::create_listener(addr)?;

    logger::log_server_start(&addr, &cfg.root);

    let state = Arc::new(AppState::new(cfg));
    server::run(listener, state).await.map_err(Into::into)
}
