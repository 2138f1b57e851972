//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Upper bound accepted for `max_hops`.
pub const MAX_HOPS_LIMIT: usize = 10_000;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use linkchain::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::defaults()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `max_hops` is zero or above
    /// [`MAX_HOPS_LIMIT`].
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(max_hops) = config.max_hops {
            Self::validate_max_hops(max_hops)?;
        }
        Ok(())
    }

    fn validate_max_hops(max_hops: usize) -> Result<()> {
        if max_hops == 0 {
            return Err(Error::Validation {
                field: "max_hops".into(),
                message: "must be greater than 0".into(),
            });
        }
        if max_hops > MAX_HOPS_LIMIT {
            return Err(Error::Validation {
                field: "max_hops".into(),
                message: format!("must be at most {MAX_HOPS_LIMIT}"),
            });
        }
        Ok(())
    }
}
