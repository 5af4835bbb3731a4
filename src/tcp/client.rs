use crate::common::wire::REQUEST_LINE;
use crate::transfer::TransferSummary;
use crate::{Result, TransferError};
use std::net::SocketAddr;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::Instant;

/// TCP file client: requests the remote file and writes it to disk
///
/// Completion is implicit: the transfer is over when the server closes the
/// connection. There is no read timeout on this path.
///
/// # Examples
///
/// ```no_run
/// use imgsrv::tcp::TcpFileClient;
/// use std::path::Path;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let addr = "127.0.0.1:11000".parse()?;
///     let client = TcpFileClient::connect(addr).await?;
///     let summary = client.fetch(Path::new("received_tcp.jpg")).await?;
///     println!("received {} bytes in {:?}", summary.bytes, summary.elapsed);
///     Ok(())
/// }
/// ```
pub struct TcpFileClient {
    stream: TcpStream,
}

impl TcpFileClient {
    /// Connects to a file server at the given address
    pub async fn connect(server_addr: SocketAddr) -> Result<Self> {
        let stream = TcpStream::connect(server_addr)
            .await
            .map_err(TransferError::Tcp)?;
        Ok(Self { stream })
    }

    /// Requests the file and copies it into `output`, created or truncated
    ///
    /// Consumes the client; one connection carries exactly one transfer.
    pub async fn fetch(mut self, output: &Path) -> Result<TransferSummary> {
        self.stream
            .write_all(REQUEST_LINE.as_bytes())
            .await
            .map_err(TransferError::Tcp)?;
        self.stream.flush().await.map_err(TransferError::Tcp)?;

        let mut file = File::create(output).await.map_err(TransferError::File)?;

        let start = Instant::now();
        let bytes = tokio::io::copy(&mut self.stream, &mut file)
            .await
            .map_err(TransferError::Tcp)?;
        let elapsed = start.elapsed();

        file.flush().await.map_err(TransferError::File)?;

        Ok(TransferSummary { bytes, elapsed })
    }
}
