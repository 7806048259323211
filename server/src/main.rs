//! RAG Load CLI
//!
//! ```bash
//! ragload serve                          # Dev server on port 3000
//! ragload submit notes.txt report.pdf    # Send documents for processing
//! ```

use clap::{Parser, Subcommand};
use ragload_server::{
    cmd_submit, init_tracing, start_server, ServeArgs, ServerConfig, ServerResult, SubmitArgs,
};

#[derive(Parser)]
#[command(name = "ragload")]
#[command(about = "Upload documents to a RAG processing service", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dev server (frontend + upload relay)
    Serve(ServeArgs),

    /// Submit local files to the processing endpoint
    Submit(SubmitArgs),
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => cmd_serve(args).await,
        Commands::Submit(args) => cmd_submit(args).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(args: ServeArgs) -> ServerResult<()> {
    let config = ServerConfig::from_args(args)?;
    start_server(config).await
}
