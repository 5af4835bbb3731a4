use crate::Result;
use async_trait::async_trait;

/// Common trait for file transfer servers
///
/// This trait defines the common interface that both transfer servers
/// (TCP, UDP) implement.
#[async_trait]
pub trait FileServer {
    /// Starts the server and serves transfer requests until shutdown
    async fn run(&self) -> Result<()>;

    /// Returns a shutdown signal sender that can be used to gracefully shutdown the server
    fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()>;
}
