use super::TcpConfig;
use crate::common::FileServer;
use crate::common::wire::{REJECTION_LINE, REQUEST_LINE};
use crate::transfer;
use crate::{Result, TransferError};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tracing::{Instrument, error, info, warn};

/// TCP file server that streams one configured file to each requester
///
/// Each accepted connection is handled in its own task, so a slow client
/// never blocks the accept loop or other transfers.
///
/// # Examples
///
/// Basic server setup and running:
///
/// ```no_run
/// use imgsrv::tcp::{TcpConfig, TcpFileServer};
/// use imgsrv::common::FileServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = TcpConfig {
///         bind_addr: "127.0.0.1:11000".parse()?,
///         file_path: "image.jpg".into(),
///     };
///
///     let server = TcpFileServer::new(config);
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct TcpFileServer {
    config: TcpConfig,
    shutdown_signal: Arc<tokio::sync::broadcast::Sender<()>>,
}

impl TcpFileServer {
    /// Creates a new TCP file server with the given configuration
    pub fn new(config: TcpConfig) -> Self {
        let (shutdown_signal, _) = tokio::sync::broadcast::channel(1);
        Self {
            config,
            shutdown_signal: Arc::new(shutdown_signal),
        }
    }

    /// Handles a single connection: one request line, one transfer
    async fn handle_connection(
        stream: TcpStream,
        addr: SocketAddr,
        config: TcpConfig,
    ) -> Result<()> {
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);

        let mut line = String::new();
        let n = reader
            .read_line(&mut line)
            .await
            .map_err(TransferError::Tcp)?;
        if n == 0 {
            info!(%addr, "Client closed connection before sending a request");
            return Ok(());
        }

        if line == REQUEST_LINE {
            let bytes = transfer::copy_file_to_stream(&config.file_path, &mut write_half).await?;
            info!(%addr, bytes, "Sent file");
        } else {
            warn!(%addr, request = %line.trim_end(), "Rejected unknown command");
            write_half
                .write_all(REJECTION_LINE.as_bytes())
                .await
                .map_err(TransferError::Tcp)?;
        }

        // Dropping both halves closes the connection, which is the
        // completion signal on the stream side.
        Ok(())
    }
}

#[async_trait]
impl FileServer for TcpFileServer {
    /// Starts the TCP file server and listens for connections
    async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await.map_err(|e| {
            TransferError::Config(format!(
                "Failed to bind TCP listener to {}: {}",
                self.config.bind_addr, e
            ))
        })?;

        info!(address = %self.config.bind_addr, file = %self.config.file_path.display(), "TCP file server listening");

        let mut shutdown_rx = self.shutdown_signal.subscribe();

        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((stream, addr)) => {
                            info!(%addr, "Accepted connection");

                            let config = self.config.clone();
                            let span = tracing::info_span!("connection", %addr);

                            tokio::spawn(async move {
                                let result = Self::handle_connection(stream, addr, config).instrument(span).await;
                                if let Err(e) = result {
                                    error!(%addr, error = %e, "Error handling connection");
                                }
                            });
                        }
                        Err(e) => {
                            error!(error = %e, "Failed to accept connection");
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

        info!("TCP file server stopped");
        Ok(())
    }

    /// Returns a shutdown signal sender that can be used to gracefully shutdown the server
    fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()> {
        self.shutdown_signal.as_ref().clone()
    }
}
