use crate::common::wire::{RECV_BUFFER_SIZE, REQUEST, SENTINEL};
use crate::transfer::TransferSummary;
use crate::{Result, TransferError};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::net::UdpSocket;
use tokio::time::{Instant, timeout_at};

/// Inactivity deadline for the receive loop
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// UDP file client: requests the remote file and writes arriving chunks to disk
///
/// The receive loop ends on the first sentinel datagram, on a read error, or
/// when the inactivity deadline expires. The deadline is armed once before
/// the loop, not per datagram, so it bounds the whole transfer; data received
/// by then is kept either way.
///
/// # Examples
///
/// ```no_run
/// use imgsrv::udp::UdpFileClient;
/// use std::path::Path;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let addr = "127.0.0.1:11000".parse()?;
///     let client = UdpFileClient::connect(addr).await?;
///     let summary = client.fetch(Path::new("received_udp.jpg")).await?;
///     println!("received {} bytes in {:?}", summary.bytes, summary.elapsed);
///     Ok(())
/// }
/// ```
pub struct UdpFileClient {
    socket: UdpSocket,
    read_timeout: Duration,
}

impl UdpFileClient {
    /// Connects to a file server at the given address with the default deadline
    pub async fn connect(server_addr: SocketAddr) -> Result<Self> {
        Self::connect_with_timeout(server_addr, DEFAULT_READ_TIMEOUT).await
    }

    /// Connects with a custom inactivity deadline for the receive loop
    ///
    /// Connecting the socket fixes the destination for sends and filters
    /// inbound datagrams to the server's address; no handshake happens.
    pub async fn connect_with_timeout(
        server_addr: SocketAddr,
        read_timeout: Duration,
    ) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| TransferError::Config(format!("Failed to bind UDP socket: {e}")))?;
        socket
            .connect(server_addr)
            .await
            .map_err(TransferError::Udp)?;

        Ok(Self {
            socket,
            read_timeout,
        })
    }

    /// Requests the file and writes arriving chunks into `output`
    ///
    /// Consumes the client; the socket carries exactly one exchange.
    pub async fn fetch(self, output: &Path) -> Result<TransferSummary> {
        self.socket
            .send(REQUEST.as_bytes())
            .await
            .map_err(TransferError::Udp)?;

        let mut file = File::create(output).await.map_err(TransferError::File)?;

        let start = Instant::now();
        let deadline = start + self.read_timeout;
        let mut buffer = vec![0u8; RECV_BUFFER_SIZE];
        let mut total = 0u64;

        loop {
            let n = match timeout_at(deadline, self.socket.recv(&mut buffer)).await {
                Ok(Ok(n)) => n,
                // Deadline or read error both just end the transfer; whatever
                // arrived so far is kept.
                Ok(Err(_)) | Err(_) => break,
            };

            if &buffer[..n] == SENTINEL {
                break;
            }

            file.write_all(&buffer[..n])
                .await
                .map_err(TransferError::File)?;
            total += n as u64;
        }
        let elapsed = start.elapsed();

        file.flush().await.map_err(TransferError::File)?;

        Ok(TransferSummary {
            bytes: total,
            elapsed,
        })
    }
}
