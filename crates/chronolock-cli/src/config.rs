use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_ENV;

/// Time zone used to interpret `YYYY-MM-DD` unlock dates when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Europe/Madrid";

/// Hour of day used for `YYYY-MM-DD` unlock dates. Midday keeps the instant
/// on the intended calendar day across time-zone conversions.
pub const DEFAULT_UNLOCK_HOUR: u32 = 12;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChronoLockConfig {
    #[serde(default)]
    pub time: TimeSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSection {
    pub timezone: String,
    pub unlock_hour: u32,
}

impl Default for TimeSection {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            unlock_hour: DEFAULT_UNLOCK_HOUR,
        }
    }
}

impl ChronoLockConfig {
    /// Resolved reference time zone.
    pub fn timezone(&self) -> anyhow::Result<Tz> {
        Tz::from_str(&self.time.timezone)
            .map_err(|_| anyhow::anyhow!("Unknown timezone in config: {}", self.time.timezone))
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.timezone()?;
        if self.time.unlock_hour > 23 {
            return Err(anyhow::anyhow!(
                "unlock_hour must be between 0 and 23 (got {})",
                self.time.unlock_hour
            ));
        }
        Ok(())
    }
}

/// Resolve the config file path, checking CHRONOLOCK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<ChronoLockConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ChronoLockConfig::default());
    }
    let config = read_config(path)?;
    config.validate()?;
    Ok(config)
}

pub fn read_config(path: &Path) -> anyhow::Result<ChronoLockConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("chronolock"));
        }
    }
    Ok(home_dir()?.join(".config").join("chronolock"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
