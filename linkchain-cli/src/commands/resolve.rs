//! Resolve command implementation.

use std::io;
use std::path::PathBuf;

use clap::Args;
use linkchain::Config;

use crate::error::CliError;
use crate::output::{write_report, ReportFormat};
use crate::utils::{
    check_all_resolved, check_max_hops, load_configuration, print_summary, GlobalOptions,
};

/// Resolve specific links.
///
/// Paths that are not links are reported with a `read_error` status.
#[derive(Args)]
pub struct ResolveCommand {
    /// Links to resolve
    #[arg(value_name = "LINK", required = true)]
    pub links: Vec<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ReportFormat>,

    /// Maximum link-to-link hops per chain
    #[arg(long, value_name = "N")]
    pub max_hops: Option<usize>,

    /// Exit with status 1 if any link does not resolve
    #[arg(long)]
    pub check: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        check_max_hops(self.max_hops)?;

        let config = load_configuration(
            global,
            Config {
                max_hops: self.max_hops,
                ..Default::default()
            },
        )?;

        let results = config.walker().resolve_paths(&self.links)?;

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
