//! Datagram transfer over UDP
//!
//! There is no connection to close, so completion is signaled in-band: after
//! the last file chunk the server sends a short sentinel datagram several
//! times, and the client additionally arms an inactivity deadline in case
//! every sentinel is lost.

pub mod client;
pub mod config;
pub mod server;
pub mod tests;

pub use client::UdpFileClient;
pub use config::UdpConfig;
pub use server::UdpFileServer;
