//! Report configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Language of the report line text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ru => write!(f, "ru"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "russian" => Ok(Locale::Ru),
            "en" | "english" => Ok(Locale::En),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

/// Top-level examrep configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Language of the report lines.
    #[serde(default)]
    pub locale: Locale,
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. the file named by `EXAMREP_CONFIG` (must exist)
/// 2. `examrep.toml` in the current directory
/// 3. `~/.config/examrep/config.toml`
///
/// Environment variable override: `EXAMREP_LOCALE`.
pub fn load_config() -> Result<Config> {
    let explicit = std::env::var_os("EXAMREP_CONFIG").map(PathBuf::from);
    let mut config = load_config_from(explicit.as_deref())?;

    if let Ok(locale) = std::env::var("EXAMREP_LOCALE") {
        config.locale = locale
            .parse()
            .map_err(|e: String| anyhow::anyhow!("EXAMREP_LOCALE: {e}"))?;
    }

    Ok(config)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<Config> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examrep.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<Config>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("examrep"))
}
