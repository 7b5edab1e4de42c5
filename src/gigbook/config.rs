use crate::directory::{SearchMode, DEFAULT_PAGE_SIZE};
use crate::error::{GigbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FETCH_DELAY_MS: u64 = 1000;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// Setting names, as they appear in `config.json`. `get` and `set` also
/// accept the kebab-case spelling (`page-size`).
pub const KEYS: [&str; 4] = ["page_size", "fetch_delay_ms", "submit_delay_ms", "search_mode"];

/// Configuration for gigbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GigbookConfig {
    /// Artists per directory page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Simulated latency of the directory feed
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,

    /// Simulated latency of an onboarding submission
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Fields the directory search looks at
    #[serde(default)]
    pub search_mode: SearchMode,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_fetch_delay_ms() -> u64 {
    DEFAULT_FETCH_DELAY_MS
}

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

impl Default for GigbookConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            search_mode: SearchMode::default(),
        }
    }
}

impl GigbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GigbookError::Io)?;
        let config: GigbookConfig =
            serde_json::from_str(&content).map_err(GigbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GigbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GigbookError::Serialization)?;
        fs::write(config_path, content).map_err(GigbookError::Io)?;
        Ok(())
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match canonical_key(key).as_str() {
            "page_size" => Ok(self.page_size.to_string()),
            "fetch_delay_ms" => Ok(self.fetch_delay_ms.to_string()),
            "submit_delay_ms" => Ok(self.submit_delay_ms.to_string()),
            "search_mode" => Ok(self.search_mode.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let key = canonical_key(key);
        match key.as_str() {
            "page_size" => {
                let size: usize = parse_value(&key, value)?;
                if size == 0 {
                    return Err(GigbookError::Api("page_size must be at least 1".to_string()));
                }
                self.page_size = size;
            }
            "fetch_delay_ms" => self.fetch_delay_ms = parse_value(&key, value)?,
            "submit_delay_ms" => self.submit_delay_ms = parse_value(&key, value)?,
            "search_mode" => {
                self.search_mode = value.parse().map_err(GigbookError::Api)?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All settings as `(key, value)` pairs, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn canonical_key(key: &str) -> String {
    key.trim().replace('-', "_")
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| GigbookError::Api(format!("Invalid value for {}: {}", key, value)))
}

fn unknown_key(key: &str) -> GigbookError {
    GigbookError::Api(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        KEYS.join(", ")
    ))
}
