use std::{collections::HashMap, fs, path::Path, time::Duration};

use serde::Deserialize;

use crate::loader::DEFAULT_DATA_SOURCE;

pub const SETTINGS_FILE: &str = "directory.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// URL or filesystem path of the people dataset.
    pub data_source: String,
    /// Quiet period applied to free-text input before querying.
    pub debounce_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.into(),
            debounce_ms: 250,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Defaults, overlaid by `directory.toml` in the working directory, overlaid
/// by environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();
    apply_file(&mut settings, Path::new(SETTINGS_FILE));
    apply_env(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file(settings: &mut Settings, path: &Path) {
    if let Ok(raw) = fs::read_to_string(path) {
        apply_toml(settings, &raw);
    }
}

fn apply_toml(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        return;
    };

    if let Some(v) = file_cfg.get("data_source").and_then(toml::Value::as_str) {
        settings.data_source = v.to_string();
    }
    match file_cfg.get("debounce_ms") {
        Some(toml::Value::Integer(ms)) if *ms >= 0 => settings.debounce_ms = *ms as u64,
        Some(toml::Value::String(ms)) => {
            if let Ok(parsed) = ms.parse::<u64>() {
                settings.debounce_ms = parsed;
            }
        }
        _ => {}
    }
    if let Some(v) = file_cfg.get("log_filter").and_then(toml::Value::as_str) {
        settings.log_filter = v.to_string();
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("PEOPLE_DATA_SOURCE") {
        settings.data_source = v;
    }
    if let Some(v) = var("APP__DATA_SOURCE") {
        settings.data_source = v;
    }

    if let Some(v) = var("APP__DEBOUNCE_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.debounce_ms = parsed;
        }
    }

    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
