//! Environment-driven configuration.

use std::path::PathBuf;

pub const WORDLIST_ENV: &str = "PWD_CRACK_WORDLIST";
pub const MODE_ENV: &str = "PWD_CRACK_MODE";
pub const WORKERS_ENV: &str = "PWD_CRACK_WORKERS";
pub const LOG_ENV: &str = "PWD_CRACK_LOG";

pub const DEFAULT_WORDLIST: &str = "./rockyou.txt";
pub const DEFAULT_WORKERS: usize = 6;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// How the search is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One thread: dictionary pass, then every rule on every seed.
    #[default]
    Sequential,
    /// One worker per activity, racing to the first match.
    Distributed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub wordlist_path: PathBuf,
    pub mode: Mode,
    pub workers: usize,
    pub log_level: String,
}

impl Config {
    /// Reads every setting from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            wordlist_path: get_wordlist_path(),
            mode: get_mode(),
            workers: get_workers(),
            log_level: std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_CRACK_WORDLIST`
/// 2. Default path `./rockyou.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var(WORDLIST_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORDLIST))
}

fn get_mode() -> Mode {
    match std::env::var(MODE_ENV) {
        Err(_) => Mode::Sequential,
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "sequential" | "" => Mode::Sequential,
            "distributed" => Mode::Distributed,
            _other => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Unknown {} '{}', running sequentially", MODE_ENV, _other);
                Mode::Sequential
            }
        },
    }
}

/// Pool size, clamped to the number of worker slots.
fn get_workers() -> usize {
    std::env::var(WORKERS_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_WORKERS)
        .clamp(1, DEFAULT_WORKERS)
}
