//! cotacao-client binary entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cotacao_client::{run, ClientConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cotacao-client", about = "Fetch the current USD-BRL quote")]
struct ClientArgs {
    /// Quote service base URL
    #[arg(long, default_value = "http://localhost:8080")]
    endpoint: String,

    /// Artifact path, overwritten on every run
    #[arg(long, default_value = "cotacao.txt")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = ClientArgs::parse();
    run(&ClientConfig {
        endpoint: args.endpoint,
        output: args.output,
    })
    .await
}
