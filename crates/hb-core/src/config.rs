use std::{env, path::Path, time::Duration};

use crate::{errors::Error, Result};

const DEFAULT_TRANSLATE_PATH: &str = "/translate";

/// Typed configuration, read from the environment (and an optional `.env`).
#[derive(Clone, Debug)]
pub struct Config {
    // Gateway
    pub telegram_bot_token: String,

    // Azure Translator
    pub azure_sub_key: String,
    pub azure_endpoint: String,
    pub azure_translate_path: String,
    pub azure_region: Option<String>,
    /// Unset means requests may wait indefinitely.
    pub azure_timeout: Option<Duration>,
}

impl Config {
    /// Load `.env` if present (existing variables win), then read the process environment.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"))?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).and_then(non_empty).ok_or_else(|| {
                Error::Config(format!("{key} environment variable is required"))
            })
        };

        let telegram_bot_token = required("TELEGRAM_BOT_TOKEN")?;
        let azure_sub_key = required("AZURE_SUB_KEY")?;
        let azure_endpoint = required("AZURE_ENDPOINT")?;

        let azure_translate_path = lookup("AZURE_TRANSLATE_PATH")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_TRANSLATE_PATH.to_string());
        let azure_region = lookup("AZURE_REGION").and_then(non_empty);

        let azure_timeout = match lookup("AZURE_TIMEOUT_MS").and_then(non_empty) {
            None => None,
            Some(raw) => {
                let ms = raw.trim().parse::<u64>().map_err(|_| {
                    Error::Config(format!("AZURE_TIMEOUT_MS must be an integer, got {raw:?}"))
                })?;
                Some(Duration::from_millis(ms))
            }
        };

        Ok(Self {
            telegram_bot_token,
            azure_sub_key,
            azure_endpoint,
            azure_translate_path,
            azure_region,
            azure_timeout,
        })
    }

    /// Endpoint and path joined with exactly one `/` between them.
    pub fn translate_url(&self) -> String {
        format!(
            "{}/{}",
            self.azure_endpoint.trim_end_matches('/'),
            self.azure_translate_path.trim_start_matches('/')
        )
    }
}

/// A missing file is fine; an unreadable or malformed one is a config error.
fn load_dotenv_if_present(path: &Path) -> Result<()> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Config(format!(
            "failed to load {}: {e}",
            path.display()
        ))),
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
