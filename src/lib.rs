use thiserror::Error;

/// Error types for the imgsrv library
#[derive(Error, Debug)]
pub enum TransferError {
    /// TCP-related errors (connect, read, write)
    #[error("TCP error: {0}")]
    Tcp(std::io::Error),

    /// UDP-related errors (send, receive)
    #[error("UDP error: {0}")]
    Udp(std::io::Error),

    /// Filesystem errors on the served or received file
    #[error("file error: {0}")]
    File(std::io::Error),

    /// Configuration errors, including bind failures at startup
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the imgsrv library
pub type Result<T> = std::result::Result<T, TransferError>;

pub mod common;
pub mod tcp;
pub mod transfer;
pub mod udp;

// Re-export main types for convenience
pub use common::FileServer;
pub use tcp::{TcpConfig, TcpFileClient, TcpFileServer};
pub use transfer::TransferSummary;
pub use udp::{UdpConfig, UdpFileClient, UdpFileServer};
