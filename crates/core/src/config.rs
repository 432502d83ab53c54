//! Client configuration loaded from `trademarks.toml`.
//!
//! Problems in the file never abort: they are logged and defaults are kept.

use std::path::Path;
use tracing::{debug, warn};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "trademarks.toml";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const KNOWN_CONFIG_KEYS: &[&str] = &["base_url", "timeout_ms"];

/// Where the search backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Load `trademarks.toml` from `dir`, falling back to defaults when absent.
pub fn load_config(dir: &Path) -> ClientConfig {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Load a specific config file. Missing or malformed files yield defaults.
pub fn load_config_file(path: &Path) -> ClientConfig {
    let mut config = ClientConfig::default();
    if !path.exists() {
        return config;
    }

    debug!(path = %path.display(), "Loading config");
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), "Could not read config: {e}");
            return config;
        }
    };
    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(path = %path.display(), "Invalid TOML in config: {e}");
            return config;
        }
    };

    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        match closest_key(key) {
            Some(suggestion) => warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE_NAME} — did you mean '{suggestion}'?"
            ),
            None => warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }

    if let Some(url) = table.get("base_url") {
        match url.as_str() {
            Some(s) => config.base_url = s.trim_end_matches('/').to_string(),
            None => warn!("base_url must be a string, using default"),
        }
    }

    if let Some(timeout) = table.get("timeout_ms") {
        match timeout.as_integer().filter(|t| *t > 0) {
            Some(t) => config.timeout_ms = t as u64,
            None => warn!("timeout_ms must be a positive integer, using default"),
        }
    }

    config
}

/// Nearest known key within edit distance 3.
fn closest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .map(|k| (*k, edit_distance(key, k)))
        .min_by_key(|(_, d)| *d)
        .filter(|(_, d)| *d <= 3)
        .map(|(k, _)| k)
}

/// Levenshtein distance.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
