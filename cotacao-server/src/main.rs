//! cotacao-server binary entry point

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cotacao_server::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cotacao-server", about = "USD-BRL quote service")]
struct ServerArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// SQLite quote ledger path
    #[arg(long, default_value = "cotacao.db")]
    db_path: PathBuf,

    /// Upstream quote provider base URL
    #[arg(long, default_value = "https://economia.awesomeapi.com.br")]
    upstream_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = ServerArgs::parse();
    let bind_addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;

    run_server(ServerConfig {
        bind_addr,
        db_path: args.db_path,
        upstream_url: args.upstream_url,
    })
    .await
}
