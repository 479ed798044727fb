use tracing::{info, warn};

/// Graceful shutdown for a play session
pub struct ShutdownCoordinator {}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {}
    }

    /// Resolves on Ctrl-C. If the handler cannot be installed this never
    /// resolves, and the session ends through `q` or EOF instead.
    pub async fn wait_for_shutdown(self) {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Ctrl-C received, ending session"),
            Err(e) => {
                warn!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    }
}
