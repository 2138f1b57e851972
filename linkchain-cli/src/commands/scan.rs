//! Scan command implementation.
//!
//! Walks a directory tree, resolves every symbolic link found, and prints
//! one record per link.

use std::io;
use std::path::PathBuf;

use clap::Args;
use linkchain::Config;

use crate::error::CliError;
use crate::output::{write_report, ReportFormat};
use crate::utils::{
    check_all_resolved, check_max_hops, load_configuration, print_summary, GlobalOptions,
};

/// Scan a directory tree and resolve every link in it.
#[derive(Args)]
pub struct ScanCommand {
    /// Directory to scan, or a single link
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ReportFormat>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_dirs: bool,

    /// Maximum link-to-link hops per chain
    #[arg(long, value_name = "N")]
    pub max_hops: Option<usize>,

    /// Exit with status 1 if any link does not resolve
    #[arg(long)]
    pub check: bool,
}

impl ScanCommand {
    /// Execute the scan command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        check_max_hops(self.max_hops)?;

        let config = load_configuration(
            global,
            Config {
                max_hops: self.max_hops,
                follow_dir_links: self.follow_dirs.then_some(true),
                output_format: None,
            },
        )?;

        let results = config.walker().scan(&self.path)?;

        let format = self
            .format
            .unwrap_or_else(|| config.effective_output_format().into());
        write_report(&mut io::stdout().lock(), &results, format)?;
        print_summary(&results, global);

        if self.check {
            check_all_resolved(&results)?;
        }

        Ok(())
    }
}
