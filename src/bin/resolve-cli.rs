use std::path::PathBuf;
use std::process::ExitCode;

use axum::http::{Method, Request};
use clap::Parser;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use service_gateway::config::{load_config, GatewayConfig};
use service_gateway::{ResolveOptions, WebResolver};

#[derive(Parser)]
#[command(name = "resolve-cli")]
#[command(about = "Resolve a request path against a gateway configuration", long_about = None)]
struct Cli {
    /// Gateway configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Network filter; overrides the configured default.
    #[arg(short, long)]
    network: Option<String>,

    /// HTTP method of the simulated request.
    #[arg(short, long, default_value = "GET")]
    method: Method,

    /// Request path, e.g. /greeter/say/hello
    path: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    let resolver = WebResolver::from_config(&config);
    let options = ResolveOptions::new()
        .with_network(cli.network.unwrap_or_else(|| config.resolver.network.clone()));

    let (parts, ()) = Request::builder()
        .method(cli.method)
        .uri(&cli.path)
        .body(())?
        .into_parts();

    match resolver.resolve(&parts, &options, &CancellationToken::new()).await {
        Ok(endpoint) => {
            let out = json!({
                "name": endpoint.name,
                "method": endpoint.method.as_str(),
                "host": endpoint.host,
                "path": endpoint.path,
                "network": endpoint.network,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error ({}): {}", e.kind(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}
