use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::platforms::{Platform, DEFAULT_HANDLERS};
use crate::routing::HandlerRegistry;

/// Global configuration loaded from `~/.config/appopen/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppOpenConfig {
    /// Open the web URL when the native app does not take over in time.
    pub fallback_to_web: bool,
    /// Milliseconds to wait after a native navigation before falling back.
    pub fallback_delay_ms: u64,
    /// Web navigations open a new tab/window.
    pub open_in_new_tab: bool,
    /// Platforms (by tag, e.g. "reddit") whose handlers are not registered.
    #[serde(default)]
    pub disabled_platforms: Vec<String>,
}

impl Default for AppOpenConfig {
    fn default() -> Self {
        Self {
            fallback_to_web: true,
            fallback_delay_ms: 2500,
            open_in_new_tab: false,
            disabled_platforms: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("disabled_platforms: unknown platform {0:?}")]
    UnknownPlatform(String),
    #[error("disabled_platforms: \"unknown\" is not a handler platform")]
    NotAHandler,
    #[error("fallback_delay_ms must be greater than zero")]
    ZeroDelay,
}

impl AppOpenConfig {
    /// Checks values serde cannot: platform names and the fallback delay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_to_web && self.fallback_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        self.disabled()?;
        Ok(())
    }

    fn disabled(&self) -> Result<Vec<Platform>, ConfigError> {
        self.disabled_platforms
            .iter()
            .map(|name| {
                let platform: Platform = name
                    .parse()
                    .map_err(|_| ConfigError::UnknownPlatform(name.clone()))?;
                if platform == Platform::Unknown {
                    return Err(ConfigError::NotAHandler);
                }
                Ok(platform)
            })
            .collect()
    }

    /// Registry of the built-in handlers minus `disabled_platforms`.
    pub fn registry(&self) -> Result<HandlerRegistry, ConfigError> {
        let disabled = self.disabled()?;
        Ok(HandlerRegistry::register_handlers(
            DEFAULT_HANDLERS
                .into_iter()
                .filter(|h| !disabled.contains(&h.platform)),
        ))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("appopen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppOpenConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<AppOpenConfig> {
    if !path.exists() {
        let default_cfg = AppOpenConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Reads and validates the config at `path`.
pub fn load_from(path: &Path) -> Result<AppOpenConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: AppOpenConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
