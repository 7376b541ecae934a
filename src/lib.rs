pub mod commands;
pub mod config;
pub mod state;
pub mod store;
pub mod utils;

use clap::Parser;
use commands::Commands;

use crate::config::DEFAULT_TIMEOUT_SECS;

#[derive(Debug, Parser)]
#[clap(
    name = "flare",
    about = "Inspect your Cloudflare account from the command line",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,

    #[clap(
        long = "timeout",
        help = "Seconds to wait for the API before giving up",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        global = true
    )]
    pub timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli() {
        use clap::CommandFactory;

        CLI::command().debug_assert();
    }

    #[test]
    fn test_parse_subscriptions_list() {
        let cli = CLI::parse_from(["flare", "subs", "ls", "--json", "--timeout", "5"]);

        assert_eq!(cli.timeout, 5);
        assert!(matches!(cli.commands, Commands::Subscriptions(_)));
    }

    #[test]
    fn test_default_timeout() {
        let cli = CLI::parse_from(["flare", "subscriptions", "list"]);

        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(!cli.verbose);
    }
}
