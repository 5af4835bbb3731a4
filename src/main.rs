use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use imgsrv::common::{FileServer, wire};
use imgsrv::tcp::{TcpConfig, TcpFileClient, TcpFileServer};
use imgsrv::udp::{UdpConfig, UdpFileClient, UdpFileServer};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tracing::info;

/// Transfer a single file from a server to a client over TCP or UDP
#[derive(Parser)]
#[command(name = "imgsrv")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Side to run
    #[arg(long, value_enum, default_value_t = Mode::Server)]
    mode: Mode,

    /// Transport protocol
    #[arg(long, value_enum, default_value_t = Proto::Tcp)]
    proto: Proto,

    /// Address to listen on (server) or connect to (client)
    #[arg(long, default_value = "127.0.0.1:11000")]
    addr: SocketAddr,

    /// File to serve; the client's output path is fixed per transport
    #[arg(long, default_value = "image.jpg")]
    file: PathBuf,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    Server,
    Client,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Proto {
    Tcp,
    Udp,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("imgsrv=info")
        .init();

    let cli = Cli::parse();

    match (cli.proto, cli.mode) {
        (Proto::Tcp, Mode::Server) => {
            let config = TcpConfig {
                bind_addr: cli.addr,
                file_path: cli.file,
            };

            info!(address = %config.bind_addr, file = %config.file_path.display(), "Starting TCP file server");

            let server = TcpFileServer::new(config);
            server.run().await.wrap_err("Failed to run TCP file server")?;
        }
        (Proto::Tcp, Mode::Client) => {
            let client = TcpFileClient::connect(cli.addr)
                .await
                .wrap_err_with(|| format!("Failed to connect to {}", cli.addr))?;
            let summary = client
                .fetch(Path::new(wire::TCP_OUTPUT_FILE))
                .await
                .wrap_err("TCP transfer failed")?;

            info!(
                bytes = summary.bytes,
                elapsed = ?summary.elapsed,
                output = wire::TCP_OUTPUT_FILE,
                "Transfer complete"
            );
        }
        (Proto::Udp, Mode::Server) => {
            let config = UdpConfig {
                bind_addr: cli.addr,
                file_path: cli.file,
            };

            info!(address = %config.bind_addr, file = %config.file_path.display(), "Starting UDP file server");

            let server = UdpFileServer::new(config);
            server.run().await.wrap_err("Failed to run UDP file server")?;
        }
        (Proto::Udp, Mode::Client) => {
            let client = UdpFileClient::connect(cli.addr)
                .await
                .wrap_err_with(|| format!("Failed to reach {}", cli.addr))?;
            let summary = client
                .fetch(Path::new(wire::UDP_OUTPUT_FILE))
                .await
                .wrap_err("UDP transfer failed")?;

            info!(
                bytes = summary.bytes,
                elapsed = ?summary.elapsed,
                output = wire::UDP_OUTPUT_FILE,
                "Transfer complete"
            );
        }
    }

    Ok(())
}
