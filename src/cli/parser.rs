use clap::{Parser, Subcommand};

/// Command-line interface definition for rcafes
#[derive(Parser)]
#[command(
    name = "rcafes",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small web catalogue of work-friendly cafes, backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Start the web server
    Serve {
        /// Address to bind (overrides the configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the configuration)
        #[arg(long, short)]
        port: Option<u16>,
    },
}
