use clap::{ArgAction, Parser};
use live_search::Surface;

/// Type a query per line. `:clear`, `:go <id>`, `:open`, `:close` and `:quit`
/// act on the search box instead.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Which search surface to drive: header, widget or results
    #[arg(long, default_value = "widget")]
    pub surface: Surface,

    /// Search the catalog in-process instead of asking the server
    #[arg(long)]
    pub local: bool,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
