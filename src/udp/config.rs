use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the UDP file server
///
/// # Examples
///
/// ```
/// use imgsrv::udp::UdpConfig;
///
/// let config = UdpConfig {
///     bind_addr: "127.0.0.1:11000".parse().unwrap(),
///     file_path: "image.jpg".into(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct UdpConfig {
    /// Address to bind the server socket to
    pub bind_addr: SocketAddr,
    /// Path of the file served to every client
    pub file_path: PathBuf,
}

impl Default for UdpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:11000".parse().unwrap(),
            file_path: "image.jpg".into(),
        }
    }
}
