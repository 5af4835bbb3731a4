//! Common traits and types used across the imgsrv library
//!
//! This module contains the server trait shared by both transports and the
//! wire-level constants of the transfer protocol.

pub mod test_utils;
pub mod traits;
pub mod wire;

pub use test_utils::{spawn_tcp_file_server, spawn_udp_file_server};
pub use traits::FileServer;
