//! CLI module for Nexora.
//!
//! Provides command-line parsing for the nexora-server binary. Uses clap
//! for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};

/// Nexora - Multi-Source Research Engine
///
/// Queries encyclopedia, news, web search, community and quick-facts
/// providers concurrently and synthesizes a single cited report.
#[derive(Parser, Debug)]
#[command(
    name = "nexora-server",
    author = "Nexora <build@nexora.dev>",
    version,
    about = "Nexora - Multi-Source Research Engine",
    long_about = "Queries encyclopedia, news, web search, community and quick-facts providers\n\
                  concurrently, tolerates partial failure, and synthesizes a single report\n\
                  with grouped citations.\n\n\
                  Run without arguments to start the HTTP server, or use 'research' for a\n\
                  one-shot lookup from the terminal.",
    after_help = "EXAMPLES:\n    \
                  nexora-server research \"quantum computing\"   # One-shot research report\n    \
                  nexora-server research --json rust           # Machine-readable report\n    \
                  nexora-server                                # Start the HTTP server\n    \
                  nexora-server serve --port 8080              # Serve on a custom port"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP research server (the default with no subcommand)
    Serve {
        /// Host address to bind, overriding configuration
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding configuration
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one research pass and print the report
    Research {
        /// Topic to research
        topic: String,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}
