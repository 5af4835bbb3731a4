use crate::common::FileServer;
use crate::{Result, TransferError};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::task::JoinHandle;

/// Spawns a TCP file server on an ephemeral port for integration tests
///
/// Returns both the server handle and the address it is bound to.
pub async fn spawn_tcp_file_server(
    file_path: PathBuf,
) -> Result<(JoinHandle<Result<()>>, SocketAddr)> {
    use crate::tcp::{TcpConfig, TcpFileServer};
    use tokio::net::TcpListener;

    // First bind to get the actual address
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|e| TransferError::Config(format!("Failed to bind listener: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| TransferError::Config(format!("Failed to get local address: {e}")))?;
    drop(listener); // Close the listener so the server can bind to the same address

    let config = TcpConfig {
        bind_addr: addr,
        file_path,
    };

    let server = TcpFileServer::new(config);
    let server_handle = tokio::spawn(async move { server.run().await });

    Ok((server_handle, addr))
}

/// Spawns a UDP file server on an ephemeral port for integration tests
///
/// Returns both the server handle and the address it is bound to.
pub async fn spawn_udp_file_server(
    file_path: PathBuf,
) -> Result<(JoinHandle<Result<()>>, SocketAddr)> {
    use crate::udp::{UdpConfig, UdpFileServer};
    use tokio::net::UdpSocket;

    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .map_err(|e| TransferError::Config(format!("Failed to bind socket: {e}")))?;
    let addr = socket
        .local_addr()
        .map_err(|e| TransferError::Config(format!("Failed to get local address: {e}")))?;
    drop(socket); // Close the socket so the server can bind to the same address

    let config = UdpConfig {
        bind_addr: addr,
        file_path,
    };

    let server = UdpFileServer::new(config);
    let server_handle = tokio::spawn(async move { server.run().await });

    Ok((server_handle, addr))
}
