use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "demo-cli")]
#[command(about = "Query a running demo-caller instance", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Show service name, targets and intervals
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let path = match cli.command {
        Commands::Health => "/health",
        Commands::Info => "/",
    };

    let res = client.get(format!("{}{}", base, path)).send().await?;
    print_response(res).await?;

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if status.is_success() {
        let body: Value = res.json().await?;
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        let text = res.text().await?;
        eprintln!("Error ({}): {}", status, text);
    }
    Ok(())
}
