use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unionboard_core::Tab;

mod commands;

#[derive(Parser)]
#[command(name = "unionboard")]
#[command(about = "Negotiation issue board: API server, issue viewer and what's-new tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the issue API server
    Serve {
        /// Overrides the port of UNIONBOARD_BIND_ADDR
        #[arg(short, long)]
        port: Option<u16>,
        /// Overrides the host of UNIONBOARD_BIND_ADDR
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Refresh and print the issue list for a tab
    Issues {
        #[arg(short, long, default_value = "all")]
        tab: Tab,
        #[arg(short, long, default_value = "")]
        keyword: String,
    },
    /// Report whether newer content has been published
    CheckUpdates,
    /// Print the version history and mark it as seen
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Issues { tab, keyword } => commands::issues::run(tab, &keyword).await?,
        Commands::CheckUpdates => commands::updates::run_check().await?,
        Commands::History => commands::updates::run_history().await?,
    }

    Ok(())
}
