use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve catalog searches over the unix socket
    Serve,
    /// Run one search against the catalog and print the matches
    Search {
        query: String,
        /// Print the matching entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every catalog entry
    Catalog,
    /// Render the email request for a contact form submission (JSON file) without sending it
    Contact {
        submission: PathBuf,
    },
}
