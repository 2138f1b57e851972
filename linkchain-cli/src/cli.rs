//! CLI structure and command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{CompletionsCommand, ResolveCommand, ScanCommand, ShowConfigCommand};

/// Find symbolic links and follow their chains to the end.
#[derive(Parser)]
#[command(name = "linkchain")]
#[command(version, about = "Follow symbolic link chains and report where they end", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file on top of discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "LINKCHAIN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Scan a directory tree and resolve every link in it
    Scan(ScanCommand),

    /// Resolve specific links
    Resolve(ResolveCommand),

    /// Print the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_flags() {
        let cli = Cli::try_parse_from([
            "linkchain", "--quiet", "scan", "/tmp", "--format", "csv", "--max-hops", "5",
            "--follow-dirs", "--check",
        ])
        .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Command::Scan(cmd) => {
                assert_eq!(cmd.path, PathBuf::from("/tmp"));
                assert_eq!(cmd.max_hops, Some(5));
                assert!(cmd.follow_dirs);
                assert!(cmd.check);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_scan_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["linkchain", "scan"]).unwrap();
        match cli.command {
            Command::Scan(cmd) => assert_eq!(cmd.path, PathBuf::from(".")),
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_resolve_requires_a_link() {
        assert!(Cli::try_parse_from(["linkchain", "resolve"]).is_err());
    }
}
