//! Scheduler configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Days between reviews after 1, 2, 3, ... consecutive correct answers.
pub const DEFAULT_INTERVAL_LADDER_DAYS: [u32; 7] = [1, 3, 7, 14, 30, 45, 60];

/// Longest interval a ladder rung may have, roughly a century.
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

/// Minimum share of a session reserved for due items.
pub const DEFAULT_DUE_RATIO: f64 = 0.6;

/// Tunable constants of the review scheduler and session composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Interval ladder in days. The last rung repeats indefinitely.
    #[serde(default = "default_ladder")]
    pub interval_ladder_days: Vec<u32>,
    /// Fraction of session slots reserved for due items.
    #[serde(default = "default_due_ratio")]
    pub due_ratio: f64,
}

fn default_ladder() -> Vec<u32> {
    DEFAULT_INTERVAL_LADDER_DAYS.to_vec()
}

fn default_due_ratio() -> f64 {
    DEFAULT_DUE_RATIO
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_ladder_days: default_ladder(),
            due_ratio: default_due_ratio(),
        }
    }
}

impl SchedulerConfig {
    /// Check that the scheduler can run with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ladder_days.is_empty() {
            return Err(ConfigError::EmptyLadder);
        }
        if let Some(index) = self.interval_ladder_days.iter().position(|&d| d == 0) {
            return Err(ConfigError::ZeroInterval { index });
        }
        if let Some((index, &days)) = self
            .interval_ladder_days
            .iter()
            .enumerate()
            .find(|(_, &d)| d > MAX_INTERVAL_DAYS)
        {
            return Err(ConfigError::IntervalTooLong {
                index,
                days,
                max: MAX_INTERVAL_DAYS,
            });
        }
        if !(0.0..=1.0).contains(&self.due_ratio) {
            return Err(ConfigError::DueRatioOutOfRange(self.due_ratio));
        }
        Ok(())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `learnpack.toml` in the current directory
/// 2. `~/.config/learnpack/config.toml`
///
/// Environment variable override: `LEARNPACK_DUE_RATIO`.
pub fn load_config() -> Result<SchedulerConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SchedulerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("learnpack.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading scheduler config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SchedulerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SchedulerConfig::default(),
    };

    let config = apply_env_overrides(config, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Apply `LEARNPACK_*` overrides read through `lookup`.
fn apply_env_overrides(
    mut config: SchedulerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SchedulerConfig> {
    if let Some(ratio) = lookup("LEARNPACK_DUE_RATIO") {
        config.due_ratio = ratio
            .trim()
            .parse()
            .with_context(|| format!("invalid LEARNPACK_DUE_RATIO: {ratio}"))?;
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("learnpack"))
}
