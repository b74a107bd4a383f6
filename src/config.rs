use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::error::OctileResult;

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "OCTILE_";

/// Default filter directive when neither `RUST_LOG` nor `OCTILE_LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = concat!("warn,", env!("CARGO_CRATE_NAME"), "=info");

/// How log events are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Runtime configuration, read from `OCTILE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Loads the configuration from the process environment.
pub fn load_config() -> OctileResult<Config> {
    Ok(Figment::new().merge(Env::prefixed(ENV_PREFIX)).extract()?)
}
