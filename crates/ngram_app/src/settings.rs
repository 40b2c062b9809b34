use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use ngram_core::ModelConfig;
use ngram_corpus::{FetchSettings, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};

use crate::logging::LogDestination;

pub const DEFAULT_SETTINGS_FILE: &str = "ngram.ron";

const DEFAULT_SOURCES: &[&str] = &[
    "https://ro.wikipedia.org/wiki/România",
    "https://ro.wikipedia.org/wiki/Inteligență_artificială",
    "https://ro.wikipedia.org/wiki/Limba_română",
    "https://ro.wikipedia.org/wiki/București",
    "https://ro.wikipedia.org/wiki/Programare",
];

const DEFAULT_SENTENCES: &[&str] = &[
    "România este o țară frumoasă",
    "Inteligența artificială este fascinantă",
    "Limba română este vorbită în România",
    "Bucureștiul este capitala României",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub model: ModelConfig,
    pub sources: Vec<String>,
    pub sentences: Vec<String>,
    pub fetch: FetchSection,
    pub log: LogSection,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            sentences: DEFAULT_SENTENCES.iter().map(|s| s.to_string()).collect(),
            fetch: FetchSection::default(),
            log: LogSection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSection {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub user_agent: String,
    pub concurrency: usize,
}

impl Default for FetchSection {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: 10,
            max_bytes: 5 * 1024 * 1024,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            concurrency: 4,
        }
    }
}

impl FetchSection {
    pub fn to_fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            user_agent: self.user_agent.clone(),
            ..FetchSettings::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub destination: LogDestination,
    pub verbose: bool,
}

/// Where the settings came from; reported once logging is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOrigin {
    File,
    Defaults,
}

/// Reads RON settings from `path`. A missing file yields the defaults; an
/// unreadable or malformed one is an error.
pub fn load(path: &Path) -> anyhow::Result<(AppSettings, SettingsOrigin)> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((AppSettings::default(), SettingsOrigin::Defaults));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading settings from {}", path.display()));
        }
    };

    let settings: AppSettings = ron::from_str(&content)
        .with_context(|| format!("parsing settings from {}", path.display()))?;
    settings
        .model
        .validate()
        .with_context(|| format!("invalid model settings in {}", path.display()))?;
    Ok((settings, SettingsOrigin::File))
}
