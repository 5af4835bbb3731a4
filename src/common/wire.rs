//! Wire-level constants of the transfer protocol
//!
//! Both transports share one request command. The stream side terminates it
//! with a newline and signals completion by closing the connection; the
//! datagram side sends the bare command and signals completion with a
//! redundant sentinel datagram.

/// Request command recognized by both servers
pub const REQUEST: &str = "GET IMAGE";

/// Request command as sent on a stream connection, newline terminated
pub const REQUEST_LINE: &str = "GET IMAGE\n";

/// Reply written to a stream connection for any other request line
pub const REJECTION_LINE: &str = "Unknown command\n";

/// End-of-transfer sentinel datagram payload
pub const SENTINEL: &[u8] = b"EOF";

/// Number of duplicate sentinel datagrams sent after the last chunk
pub const SENTINEL_REPEATS: usize = 5;

/// Payload size of one file-chunk datagram
pub const CHUNK_SIZE: usize = 1024;

/// Receive buffer size on the datagram client, larger than any chunk
pub const RECV_BUFFER_SIZE: usize = 2048;

/// Fixed output path written by the TCP client
pub const TCP_OUTPUT_FILE: &str = "received_tcp.jpg";

/// Fixed output path written by the UDP client
pub const UDP_OUTPUT_FILE: &str = "received_udp.jpg";
