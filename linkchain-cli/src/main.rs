//! Main entry point for the linkchain CLI.
//!
//! Commands:
//! - `scan`: resolve every link under a directory
//! - `resolve`: resolve explicitly named links
//! - `show-config`: print the effective configuration
//! - `completions`: generate shell completion scripts

use clap::Parser;
use linkchain_cli::cli::{Cli, Command};
use linkchain_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    linkchain::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        quiet: cli.quiet,
        config_file: cli.config,
    };

    let result = match cli.command {
        Command::Scan(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::ShowConfig(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
