//! Configuration module for the timeline-users command line tool.
//!
//! This module contains the output configuration and environment variable
//! handling. The library itself never reads the environment; the config value
//! is forwarded untouched to whatever sink receives user records.

use log::{debug, info, warn};
use std::env;

/// Default number of bytes of JSON context kept in a log line.
pub const DEFAULT_LOG_CONTEXT: usize = 512;

/// Output settings for the command line tool.
///
/// This is also the opaque configuration handed to the record sink along with
/// every extracted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Pretty-print each record instead of one JSON object per line
    pub pretty: bool,
    /// Truncation length for JSON context in log lines
    pub max_log_context: usize,
    /// Exit with a failure status when any recoverable condition was reported
    pub fail_on_report: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            pretty: false,
            max_log_context: DEFAULT_LOG_CONTEXT,
            fail_on_report: false,
        }
    }
}

impl OutputConfig {
    /// Creates a new `OutputConfig` from environment variables.
    ///
    /// # Optional Environment Variables
    ///
    /// - `TIMELINE_USERS_PRETTY`: pretty-print records (`1`/`true`/`yes`/`on`)
    /// - `TIMELINE_USERS_LOG_CONTEXT`: bytes of JSON context kept in log lines (defaults to 512)
    /// - `TIMELINE_USERS_FAIL_ON_REPORT`: exit non-zero if anything was reported
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_env() -> Self {
        info!("Loading output configuration from environment variables");

        let defaults = OutputConfig::default();
        let config = OutputConfig {
            pretty: read_flag("TIMELINE_USERS_PRETTY", defaults.pretty),
            max_log_context: read_usize("TIMELINE_USERS_LOG_CONTEXT", defaults.max_log_context),
            fail_on_report: read_flag("TIMELINE_USERS_FAIL_ON_REPORT", defaults.fail_on_report),
        };

        debug!("Output configuration: {:?}", config);
        config
    }
}

/// Parses a boolean flag value. Returns `None` for anything unrecognised.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn read_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => match parse_flag(&value) {
            Some(flag) => {
                info!("Found {} environment variable: {}", name, flag);
                flag
            }
            None => {
                warn!(
                    "{} has unrecognised value '{}', using default {}",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn read_usize(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(value) => match value.trim().parse() {
            Ok(parsed) => {
                info!("Found {} environment variable: {}", name, parsed);
                parsed
            }
            Err(e) => {
                warn!(
                    "{} is not a valid number ('{}': {}), using default {}",
                    name, value, e, default
                );
                default
            }
        },
        Err(_) => default,
    }
}
