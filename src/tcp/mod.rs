//! Stream transfer over TCP
//!
//! One accepted connection carries one transfer: the client sends a single
//! request line, the server streams the configured file back and closes the
//! connection to signal completion.

pub mod client;
pub mod config;
pub mod server;
pub mod tests;

pub use client::TcpFileClient;
pub use config::TcpConfig;
pub use server::TcpFileServer;
