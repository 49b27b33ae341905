use anyhow::{Context, Result};

pub const DEFAULT_DATA_PATH: &str = "public/data/resume-data.json";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Tool configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Document location used when no source is given on the command line.
    pub data_path: String,
    pub fetch_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let fetch_timeout_secs = match lookup("FOLIO_FETCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("FOLIO_FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Ok(Config {
            data_path: lookup("FOLIO_DATA_PATH").unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
            fetch_timeout_secs,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
