use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "proofdesk.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preview: PreviewConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Shown instead of the article body when it has no paragraphs.
    pub empty_placeholder: String,
    pub show_stats: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            empty_placeholder: "No content to preview.".into(),
            show_stats: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `PROOFDESK_LOG`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".into(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), else `proofdesk.toml` in
    /// `dir` if present, else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path)
                .map_err(|e| anyhow::anyhow!("cannot load config {}: {}", path.display(), e));
        }
        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            return Self::load(&default_path).map_err(|e| {
                anyhow::anyhow!("cannot load config {}: {}", default_path.display(), e)
            });
        }
        Ok(Self::default())
    }
}
