#[cfg(test)]
mod tests {
    use crate::common::FileServer;
    use crate::tcp::{TcpConfig, TcpFileServer};

    #[tokio::test]
    async fn test_config_default() {
        let config = TcpConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:11000".parse().unwrap());
        assert_eq!(config.file_path, std::path::PathBuf::from("image.jpg"));
    }

    #[tokio::test]
    async fn test_file_server_new() {
        let server = TcpFileServer::new(TcpConfig::default());
        assert!(server.shutdown_signal().receiver_count() == 0);
    }
}
