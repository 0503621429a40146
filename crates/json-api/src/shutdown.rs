//! Graceful shutdown signal handling.

use std::io;

use salvo::server::ServerHandle;
use tokio::signal;
use tracing::info;

/// Wait for ctrl-c and stop the server gracefully.
pub(crate) async fn listen(handle: ServerHandle) -> io::Result<()> {
    signal::ctrl_c().await?;

    info!("shutdown signal received, stopping server");

    handle.stop_graceful(None);

    Ok(())
}
