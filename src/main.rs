use anyhow::Result;
use clap::{Parser, Subcommand};

/// frontier - Frontier Web Development site
#[derive(Parser)]
#[command(name = "frontier")]
#[command(about = "Frontier Web Development website and contact relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Print the owner contact card messages for a chat
    OwnerCard {
        /// JID the messages are addressed to
        #[arg(long)]
        from: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = frontier::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    frontier::observability::init_observability(
        "frontier",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => frontier::cli::serve(config, host, port).await,
        Commands::Migrate => frontier::cli::migrate(config).await,
        Commands::Reset => frontier::cli::reset(config).await,
        Commands::OwnerCard { from } => frontier::cli::owner_card(&config.owner, &from).await,
    }
}
