//! Ledger configuration.

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

/// Environment variable overriding [`LedgerConfig::export_date_format`].
pub const EXPORT_DATE_FORMAT_ENV: &str = "STOCKBOOK_EXPORT_DATE_FORMAT";

/// Default timestamp rendering for the restocking export (`2024-01-31 09:15:00`).
///
/// While this default is in use, receipts with a non-zero sub-second part
/// render with [`DEFAULT_EXPORT_DATE_FORMAT_MICROS`] instead.
pub const DEFAULT_EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default rendering for sub-second receipts (`2024-01-31 09:15:00.250000`).
pub const DEFAULT_EXPORT_DATE_FORMAT_MICROS: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// `strftime` pattern for the `Date:` column of the text export, rendered in local time.
    pub export_date_format: String,
}

impl LedgerConfig {
    /// Pattern for one receipt whose sub-second part is `subsec_micros`.
    pub fn export_date_format_for(&self, subsec_micros: u32) -> &str {
        if self.export_date_format == DEFAULT_EXPORT_DATE_FORMAT && subsec_micros != 0 {
            DEFAULT_EXPORT_DATE_FORMAT_MICROS
        } else {
            &self.export_date_format
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            export_date_format: DEFAULT_EXPORT_DATE_FORMAT.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Build from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup(EXPORT_DATE_FORMAT_ENV) {
            Some(format) if is_valid_format(&format) => config.export_date_format = format,
            Some(format) => {
                tracing::warn!(
                    %format,
                    "{EXPORT_DATE_FORMAT_ENV} is not a valid strftime pattern; using default"
                );
            }
            None => {
                tracing::debug!("{EXPORT_DATE_FORMAT_ENV} not set; using default");
            }
        }

        config
    }
}

fn is_valid_format(format: &str) -> bool {
    !format.trim().is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
