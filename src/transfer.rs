//! Shared file-streaming helpers
//!
//! Both servers read the served file on demand and push its bytes out; the
//! helpers here do the file-to-transport byte movement, leaving request
//! handling and completion signaling to the transport modules.

use crate::{Result, TransferError};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::UdpSocket;

/// Outcome of a completed client-side transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSummary {
    /// Total payload bytes written to the output file
    pub bytes: u64,
    /// Wall-clock time from just before the first read to just after the last
    pub elapsed: Duration,
}

/// Copies the entire contents of `path` into `writer`
///
/// Returns the number of bytes copied. The writer is flushed but not shut
/// down; on a stream connection the caller closes it to signal completion.
pub async fn copy_file_to_stream<W>(path: &Path, writer: &mut W) -> Result<u64>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut file = File::open(path).await.map_err(TransferError::File)?;
    let bytes = tokio::io::copy(&mut file, writer)
        .await
        .map_err(TransferError::Tcp)?;
    writer.flush().await.map_err(TransferError::Tcp)?;
    Ok(bytes)
}

/// Sends the contents of `path` to `addr` as a sequence of datagrams
///
/// The file is read in `chunk_size` slices and each slice becomes one
/// datagram, emitted in file order. Delivery is whatever the transport
/// provides; no completion marker is sent here.
pub async fn send_file_chunks(
    socket: &UdpSocket,
    addr: SocketAddr,
    path: &Path,
    chunk_size: usize,
) -> Result<u64> {
    let mut file = File::open(path).await.map_err(TransferError::File)?;
    let mut buffer = vec![0u8; chunk_size];
    let mut total = 0u64;

    loop {
        let n = file.read(&mut buffer).await.map_err(TransferError::File)?;
        if n == 0 {
            break;
        }
        socket
            .send_to(&buffer[..n], addr)
            .await
            .map_err(TransferError::Udp)?;
        total += n as u64;
    }

    Ok(total)
}
