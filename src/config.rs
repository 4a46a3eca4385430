use std::{env, path::PathBuf};

use log::{debug, warn};

/// Environment variable overriding the vendor database location.
pub const OUI_PATH_ENV: &str = "HWADDR_OUI_PATH";

/// Environment variable toggling the resolution cache (`0`, `false`, `off` disable it).
pub const OUI_CACHE_ENV: &str = "HWADDR_OUI_CACHE";

pub const DEFAULT_OUI_PATH: &str = "./data/oui-db.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OuiConfig {
    /// JSON or tab-separated vendor database
    pub db_path: PathBuf,
    /// Remember positive and negative lookups
    pub cache_enabled: bool,
}

impl Default for OuiConfig {
    fn default() -> Self {
        OuiConfig {
            db_path: PathBuf::from(DEFAULT_OUI_PATH),
            cache_enabled: true,
        }
    }
}

fn parse_switch(arg: &str) -> Option<bool> {
    match arg.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl OuiConfig {
    pub fn from_env() -> Self {
        let mut config = OuiConfig::default();

        if let Ok(path) = env::var(OUI_PATH_ENV) {
            if !path.is_empty() {
                debug!("Using vendor database {} from {}", path, OUI_PATH_ENV);
                config.db_path = PathBuf::from(path);
            }
        }

        if let Ok(value) = env::var(OUI_CACHE_ENV) {
            match parse_switch(&value) {
                Some(enabled) => config.cache_enabled = enabled,
                None => warn!(
                    "Unknown {} value {:?} (supported values are on/off, true/false, 1/0)",
                    OUI_CACHE_ENV, value
                ),
            }
        }

        config
    }

    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }
}
