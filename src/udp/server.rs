use super::UdpConfig;
use crate::common::FileServer;
use crate::common::wire::{CHUNK_SIZE, REQUEST, SENTINEL, SENTINEL_REPEATS};
use crate::transfer;
use crate::{Result, TransferError};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::signal;
use tracing::{error, info, warn};

/// UDP file server that answers each request datagram with the configured file
///
/// One socket serves every client. Requests are handled serially: a transfer
/// runs to completion before the next inbound datagram is read, so a large
/// transfer delays later requesters.
///
/// # Examples
///
/// Basic server setup and running:
///
/// ```no_run
/// use imgsrv::udp::{UdpConfig, UdpFileServer};
/// use imgsrv::common::FileServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = UdpConfig {
///         bind_addr: "127.0.0.1:11000".parse()?,
///         file_path: "image.jpg".into(),
///     };
///
///     let server = UdpFileServer::new(config);
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct UdpFileServer {
    config: UdpConfig,
    shutdown_signal: Arc<tokio::sync::broadcast::Sender<()>>,
}

impl UdpFileServer {
    /// Creates a new UDP file server with the given configuration
    pub fn new(config: UdpConfig) -> Self {
        let (shutdown_signal, _) = tokio::sync::broadcast::channel(1);
        Self {
            config,
            shutdown_signal: Arc::new(shutdown_signal),
        }
    }

    /// Sends the configured file to `addr` as chunk datagrams, then the sentinel
    async fn serve_request(socket: &UdpSocket, addr: SocketAddr, config: &UdpConfig) -> Result<()> {
        let bytes = transfer::send_file_chunks(socket, addr, &config.file_path, CHUNK_SIZE).await?;

        // Redundant completion marker; no acknowledgment is expected, the
        // duplicates only raise the odds that one survives datagram loss.
        for _ in 0..SENTINEL_REPEATS {
            socket
                .send_to(SENTINEL, addr)
                .await
                .map_err(TransferError::Udp)?;
        }

        info!(%addr, bytes, "Sent file");
        Ok(())
    }
}

#[async_trait]
impl FileServer for UdpFileServer {
    /// Starts the UDP file server and listens for request datagrams
    async fn run(&self) -> Result<()> {
        let socket = UdpSocket::bind(self.config.bind_addr).await.map_err(|e| {
            TransferError::Config(format!(
                "Failed to bind to {}: {}",
                self.config.bind_addr, e
            ))
        })?;

        info!(address = %self.config.bind_addr, file = %self.config.file_path.display(), "UDP file server listening");

        let mut buffer = vec![0; CHUNK_SIZE];
        let mut shutdown_rx = self.shutdown_signal.subscribe();

        loop {
            tokio::select! {
                recv_result = socket.recv_from(&mut buffer) => {
                    match recv_result {
                        Ok((n, addr)) => {
                            if &buffer[..n] == REQUEST.as_bytes() {
                                info!(%addr, "Received transfer request");
                                if let Err(e) = Self::serve_request(&socket, addr, &self.config).await {
                                    error!(%addr, error = %e, "Failed to serve request");
                                }
                            } else {
                                let preview = String::from_utf8_lossy(&buffer[..n]);
                                warn!(%addr, size = n, preview = %preview, "Ignoring unknown datagram");
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "Failed to receive datagram");
                        }
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("Received shutdown signal, stopping server");
                    break;
                }
                _ = shutdown_rx.recv() => {
                    info!("Received internal shutdown signal, stopping server");
                    break;
                }
            }
        }

        info!("UDP file server stopped");
        Ok(())
    }

    /// Returns a shutdown signal sender that can be used to gracefully shutdown the server
    fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()> {
        self.shutdown_signal.as_ref().clone()
    }
}
