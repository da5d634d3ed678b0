// Standalone MCP server binary for the Runn API.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use runn_mcp::server::McpServer;
use runn_mcp::tools::default_registry;
use runn_sdk::RunnClient;

#[derive(Parser, Debug)]
#[command(name = "runn-mcp")]
#[command(about = "MCP server exposing the Runn resource-planning API", long_about = None)]
struct Args {
    /// Transport to serve MCP over
    #[arg(long, value_enum, default_value = "stdio")]
    transport: TransportKind,

    /// Host to bind the HTTP transport to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for the HTTP transport
    #[arg(short, long, default_value = "8000")]
    port: u16,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TransportKind {
    Stdio,
    Http,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the stdio transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("Runn MCP server starting");

    let client = RunnClient::from_env()?;
    let strict_aggregation = std::env::var("RUNN_STRICT_AGGREGATION")
        .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let registry = default_registry(client, strict_aggregation);
    tracing::info!("registered {} tools", registry.list_schemas().len());

    let server = McpServer::new(registry);
    match args.transport {
        TransportKind::Stdio => server.serve_stdio().await?,
        TransportKind::Http => {
            let addr = format!("{}:{}", args.host, args.port);
            runn_mcp::http::serve(server, &addr).await?;
        }
    }

    Ok(())
}
