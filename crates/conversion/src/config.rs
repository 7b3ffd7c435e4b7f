//! Conversion options.
//!
//! Library callers build `ConversionOptions` directly; the binary reads them
//! from the environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::ConversionError;

/// Environment variable selecting the conversion mode
pub const MODE_ENV: &str = "RW_CONVERSION_MODE";

/// Environment variable overriding the log level written into components
pub const LOG_LEVEL_ENV: &str = "RW_CONVERSION_LOG_LEVEL";

/// Log level written into every converted component unless overridden
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// How input that the old schema accepts but cannot be converted
/// unambiguously is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// Reject ambiguous or contradictory input with a validation error
    #[default]
    Strict,

    /// Legacy behavior: the last populated backend branch wins, contradictory
    /// flags are dropped, group names are not checked
    Compatible,
}

impl ConversionMode {
    /// Whether validation failures are errors.
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

impl FromStr for ConversionMode {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "compatible" | "compat" => Ok(Self::Compatible),
            other => Err(ConversionError::InvalidConfig(format!(
                "{MODE_ENV} must be \"strict\" or \"compatible\", got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Compatible => f.write_str("compatible"),
        }
    }
}

/// Options of a forward conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Treatment of ambiguous input
    pub mode: ConversionMode,

    /// Log level written into every converted component
    pub log_level: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            mode: ConversionMode::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ConversionOptions {
    /// Options in compatible mode.
    pub fn compatible() -> Self {
        Self {
            mode: ConversionMode::Compatible,
            ..Self::default()
        }
    }

    /// Load options from the process environment.
    pub fn from_env() -> Result<Self, ConversionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load options through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConversionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup(MODE_ENV) {
            Some(raw) => raw.parse()?,
            None => ConversionMode::default(),
        };
        let log_level = lookup(LOG_LEVEL_ENV)
            .map(|level| level.trim().to_ascii_uppercase())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        if log_level.is_empty() {
            return Err(ConversionError::InvalidConfig(format!(
                "{LOG_LEVEL_ENV} must not be empty"
            )));
        }

        Ok(Self { mode, log_level })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
