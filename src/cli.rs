use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "everdell scoreboard backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 8181)
        #[arg(short, long, default_value_t = 8181)]
        port: u16,
    },
    /// Create the SQLite schema without starting the server
    InitDb,
}
