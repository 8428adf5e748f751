//! Engine configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default ceiling on the N-Queens board size.
pub const DEFAULT_MAX_QUEENS: usize = 10;

/// Environment variable overriding [`EngineConfig::max_queens`].
pub const ENV_MAX_QUEENS: &str = "ALGOTRACE_MAX_QUEENS";
/// Environment variable overriding [`EngineConfig::queens_detail`].
pub const ENV_QUEENS_DETAIL: &str = "ALGOTRACE_QUEENS_DETAIL";
/// Environment variable overriding [`EngineConfig::strict_inputs`].
pub const ENV_STRICT_INPUTS: &str = "ALGOTRACE_STRICT_INPUTS";

/// How much of the N-Queens search is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceDetail {
    /// Place, remove and success steps only
    #[default]
    Compact,
    /// Also a try and a check step for every candidate cell
    Detailed,
}

impl FromStr for TraceDetail {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(TraceDetail::Compact),
            "detailed" => Ok(TraceDetail::Detailed),
            other => Err(Error::Config(format!(
                "unknown trace detail '{other}', expected 'compact' or 'detailed'"
            ))),
        }
    }
}

/// Configuration shared by all engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Largest N-Queens board accepted
    pub max_queens: usize,

    /// N-Queens trace detail level
    pub queens_detail: TraceDetail,

    /// Reject empty search and sort arrays instead of producing an empty trace
    pub strict_inputs: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_queens: DEFAULT_MAX_QUEENS,
            queens_detail: TraceDetail::Compact,
            strict_inputs: false,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables with defaults for unset ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_QUEENS) {
            config.max_queens = raw
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("invalid {ENV_MAX_QUEENS} '{raw}': {e}")))?;
        }

        if let Some(raw) = lookup(ENV_QUEENS_DETAIL) {
            config.queens_detail = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_STRICT_INPUTS) {
            config.strict_inputs = parse_flag(&raw)
                .ok_or_else(|| Error::Config(format!("invalid {ENV_STRICT_INPUTS} '{raw}'")))?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
