use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the TCP file server
///
/// # Examples
///
/// ```
/// use imgsrv::tcp::TcpConfig;
///
/// let config = TcpConfig {
///     bind_addr: "127.0.0.1:11000".parse().unwrap(),
///     file_path: "image.jpg".into(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct TcpConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Path of the file served to every client
    pub file_path: PathBuf,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:11000".parse().unwrap(),
            file_path: "image.jpg".into(),
        }
    }
}
