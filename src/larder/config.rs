use crate::error::{LarderError, Result};
use crate::lifecycle::RelativeTo;
use crate::queries::{
    DEFAULT_CHECK_INTERVAL_DAYS, DEFAULT_EXPIRING_THRESHOLD_DAYS, DEFAULT_RECENT_LIMIT,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for larder, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LarderConfig {
    /// Items this many days out (or fewer) show up as expiring soon
    #[serde(default = "default_threshold")]
    pub expiring_threshold_days: i64,

    /// How many items the recently-added view shows
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Fresh items unchecked for longer than this are flagged
    #[serde(default = "default_check_interval")]
    pub check_interval_days: i64,

    /// Reference date for opening/ripening adjustments made in one edit
    #[serde(default)]
    pub relative_to: RelativeTo,
}

fn default_threshold() -> i64 {
    DEFAULT_EXPIRING_THRESHOLD_DAYS
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_check_interval() -> i64 {
    DEFAULT_CHECK_INTERVAL_DAYS
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            expiring_threshold_days: DEFAULT_EXPIRING_THRESHOLD_DAYS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            check_interval_days: DEFAULT_CHECK_INTERVAL_DAYS,
            relative_to: RelativeTo::default(),
        }
    }
}

/// Keys accepted by `larder config`.
pub const CONFIG_KEYS: &[&str] = &[
    "expiring-threshold",
    "recent-limit",
    "check-interval",
    "relative-to",
];

impl LarderConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LarderError::Io)?;
        let config: LarderConfig =
            serde_json::from_str(&content).map_err(LarderError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LarderError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LarderError::Serialization)?;
        fs::write(config_path, content).map_err(LarderError::Io)?;
        Ok(())
    }

    /// Value of a `larder config` key, as shown to the user
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "expiring-threshold" => Ok(self.expiring_threshold_days.to_string()),
            "recent-limit" => Ok(self.recent_limit.to_string()),
            "check-interval" => Ok(self.check_interval_days.to_string()),
            "relative-to" => Ok(self.relative_to.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Parse and set a `larder config` key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "expiring-threshold" => self.expiring_threshold_days = parse_days(key, value)?,
            "recent-limit" => {
                self.recent_limit = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid_value(key, value))?
            }
            "check-interval" => self.check_interval_days = parse_days(key, value)?,
            "relative-to" => {
                self.relative_to = value
                    .parse()
                    .map_err(|e: String| LarderError::Validation(e))?
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn parse_days(key: &str, value: &str) -> Result<i64> {
    match value.trim().parse::<i64>() {
        Ok(days) if days >= 0 => Ok(days),
        _ => Err(invalid_value(key, value)),
    }
}

fn invalid_value(key: &str, value: &str) -> LarderError {
    LarderError::Validation(format!("Invalid value for {}: {}", key, value))
}

fn unknown_key(key: &str) -> LarderError {
    LarderError::Validation(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LarderConfig::default();
        assert_eq!(config.expiring_threshold_days, 7);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.check_interval_days, 3);
        assert_eq!(config.relative_to, RelativeTo::Baseline);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = LarderConfig::load(temp.path().join("nothing-here")).unwrap();
        assert_eq!(config, LarderConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = LarderConfig::default();
        config.set("expiring-threshold", "3").unwrap();
        config.set("relative-to", "current").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = LarderConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.expiring_threshold_days, 3);
        assert_eq!(loaded.relative_to, RelativeTo::Current);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"recent_limit": 2}"#).unwrap();

        let loaded = LarderConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.recent_limit, 2);
        assert_eq!(loaded.expiring_threshold_days, 7);
    }

    #[test]
    fn test_rejects_bad_values_and_keys() {
        let mut config = LarderConfig::default();
        assert!(config.set("check-interval", "-1").is_err());
        assert!(config.set("relative-to", "sideways").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert!(config.get("colour").is_err());
        assert_eq!(config, LarderConfig::default());
    }
}
