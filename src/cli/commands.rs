use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "promptlab", version, about = "Prompt design course server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the config file path globally
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve,

    /// Resolve a single message and print the reply
    Ask {
        message: String,
        /// Reply language ("es" or anything else for English)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Practice chat in the terminal
    Chat {
        #[arg(short, long)]
        language: Option<String>,
        /// Only use the predefined responses
        #[arg(long)]
        offline: bool,
    },

    /// Check that the configured API key is accepted
    Validate,
}
