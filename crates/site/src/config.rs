use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use nesh_core::Language;

const DEFAULT_LATENCY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// JSON file backing the preference store; `None` keeps everything in memory.
    pub storage_path: Option<PathBuf>,
    /// Language applied when nothing valid is persisted.
    pub default_language: Language,
    /// Delay of the simulated contact submission and "load more" request.
    pub simulated_latency: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            default_language: Language::default(),
            simulated_latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    ///
    /// Unparsable values fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let storage_path = lookup("NESH_STORAGE_PATH")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let default_language = lookup("NESH_DEFAULT_LANGUAGE")
            .map(|raw| {
                parse_language(&raw).unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "ignoring NESH_DEFAULT_LANGUAGE");
                    defaults.default_language
                })
            })
            .unwrap_or(defaults.default_language);

        let simulated_latency = lookup("NESH_SIMULATED_LATENCY_MS")
            .map(|raw| {
                parse_latency(&raw).unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "ignoring NESH_SIMULATED_LATENCY_MS");
                    defaults.simulated_latency
                })
            })
            .unwrap_or(defaults.simulated_latency);

        Self {
            storage_path,
            default_language,
            simulated_latency,
        }
    }
}

fn parse_language(raw: &str) -> Result<Language> {
    raw.trim()
        .parse()
        .with_context(|| format!("unsupported language code {raw:?}"))
}

fn parse_latency(raw: &str) -> Result<Duration> {
    let millis: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid millisecond value {raw:?}"))?;
    Ok(Duration::from_millis(millis))
}
