//! Reporter implementations.

use crate::{Resolution, Result};

use super::Reporter;

/// Aligned text table, one row per link with its chain indented below.
///
/// Links that carry an error detail get a trailing `    !! <detail>` line.
///
/// # Examples
///
/// ```
/// use linkchain::report::{Reporter, TableReporter};
///
/// let text = TableReporter.render(&[]).unwrap();
/// assert!(text.starts_with("SYMLINK"));
/// ```
pub struct TableReporter;

impl Reporter for TableReporter {
    fn render(&self, results: &[Resolution]) -> Result<String> {
        let header = format!(
            "{:<60}  {:<8}  {:<60}",
            "SYMLINK", "STATUS", "RESOLVED (final)"
        );
        let mut lines = vec![header.clone(), "-".repeat(header.len() + 10)];

        for res in results {
            let target = res
                .resolved_target()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            lines.push(format!(
                "{:<60}  {:<8}  {:<60}",
                res.start().display().to_string(),
                res.status().legacy_label(),
                target
            ));
            for hop in res.chain() {
                lines.push(format!("    -> {}", hop.path().display()));
            }
            if let Some(detail) = res.error_detail() {
                lines.push(format!("    !! {detail}"));
            }
        }

        Ok(lines.join("\n"))
    }
}

/// Pretty-printed JSON array of full records.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn render(&self, results: &[Resolution]) -> Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }
}
