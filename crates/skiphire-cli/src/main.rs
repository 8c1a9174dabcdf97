mod permit;
mod skips;


use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "skiphire-cli")]
#[command(about = "Skip hire pricing command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and normalize the skip listing for a location.
    Skips {
        /// Postcode to query, overriding the configured default.
        #[arg(long)]
        postcode: Option<String>,
        /// Area name to query, overriding the configured default.
        #[arg(long)]
        area: Option<String>,
        /// Print the normalized listing as pretty JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Report whether a skip of the given size needs a road permit.
    Permit {
        /// Skip size label, e.g. "10" or "10 Yard Skip".
        #[arg(value_name = "SIZE")]
        size: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Skips {
            postcode,
            area,
            json,
        }) => {
            let config = skiphire_core::load_app_config()?;
            skips::run_skips(&config, postcode.as_deref(), area.as_deref(), json).await?;
        }
        Some(Commands::Permit { size }) => permit::run_permit(&size)?,
        None => println!("no command given; run with --help to see available commands"),
    }

    Ok(())
}
