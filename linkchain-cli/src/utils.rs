//! Utility functions shared by CLI commands.

use std::path::PathBuf;

use linkchain::config::MAX_HOPS_LIMIT;
use linkchain::{Config, ConfigBuilder, Resolution, Summary};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config_file: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Precedence, highest first:
/// 1. Command-line flags (`overrides`)
/// 2. Environment variables
/// 3. `--config` file
/// 4. Discovered configuration files
/// 5. Built-in defaults
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);
    if let Some(path) = &global.config_file {
        builder = builder.with_config_file(path);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Reject a `--max-hops` value outside the accepted range.
pub fn check_max_hops(max_hops: Option<usize>) -> Result<(), CliError> {
    match max_hops {
        Some(n) if n == 0 || n > MAX_HOPS_LIMIT => Err(CliError::InvalidArguments(format!(
            "--max-hops must be between 1 and {MAX_HOPS_LIMIT}, got {n}"
        ))),
        _ => Ok(()),
    }
}

/// Print the per-status summary line to stderr unless quiet.
pub fn print_summary(results: &[Resolution], global: &GlobalOptions) {
    if !global.quiet {
        eprintln!("{}", Summary::from_results(results));
    }
}

/// Fail with a semantic error if any link did not resolve.
pub fn check_all_resolved(results: &[Resolution]) -> Result<(), CliError> {
    let unhealthy = results
        .iter()
        .filter(|res| !res.status().is_healthy())
        .count();
    if unhealthy == 0 {
        return Ok(());
    }
    Err(CliError::SemanticFailure(format!(
        "{unhealthy} of {} links did not resolve",
        results.len()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_max_hops() {
        assert!(check_max_hops(None).is_ok());
        assert!(check_max_hops(Some(1)).is_ok());
        assert!(check_max_hops(Some(MAX_HOPS_LIMIT)).is_ok());

        let err = check_max_hops(Some(0)).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(check_max_hops(Some(MAX_HOPS_LIMIT + 1)).is_err());
    }

    #[test]
    fn test_check_all_resolved_empty() {
        assert!(check_all_resolved(&[]).is_ok());
    }

    #[test]
    fn test_check_all_resolved_counts_failures() {
        use linkchain::chain::{ChainResolver, MockFs};
        use std::path::Path;

        let fs = MockFs::new()
            .with_file("/t")
            .with_link("/ok", "/t")
            .with_link("/dangling", "/gone");
        let resolver = ChainResolver::with_fs(fs);
        let ok = resolver.resolve(Path::new("/ok"));
        let broken = resolver.resolve(Path::new("/dangling"));

        assert!(check_all_resolved(std::slice::from_ref(&ok)).is_ok());

        let err = check_all_resolved(&[ok, broken]).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("1 of 2 links did not resolve"));
    }
}
