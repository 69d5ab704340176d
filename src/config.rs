use std::fs;
use std::io::Write;
use std::path::PathBuf;

use dirs_next as dirs;
use serde::{Deserialize, Serialize};

use crate::classes::MergeOptions;
use crate::error::AppError;
use crate::format::{DEFAULT_DECIMALS, MAX_DECIMALS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Decimal places used by `cnfmt bytes` when `--decimals` is not given.
    pub decimals: i32,
    pub overflow: Overflow,
    pub merge: MergeConfig,
}

/// What `cnfmt bytes` does with sizes beyond the `YB` row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    #[default]
    Clamp,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub prefix: String,
    pub separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            decimals: DEFAULT_DECIMALS,
            overflow: Overflow::default(),
            merge: MergeConfig::default(),
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        let options = MergeOptions::default();
        MergeConfig { prefix: options.prefix, separator: options.separator }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let path = config_file_path()?;
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.validate()?;
        let path = config_file_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path)?;
        let contents = toml::to_string_pretty(self)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    pub fn set_decimals(&mut self, decimals: i32) -> Result<(), AppError> {
        if !(0..=MAX_DECIMALS).contains(&decimals) {
            return Err(AppError::config(format!(
                "decimals must be between 0 and {MAX_DECIMALS}, got {decimals}"
            )));
        }
        self.decimals = decimals;
        Ok(())
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions { prefix: self.merge.prefix.clone(), separator: self.merge.separator.clone() }
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.merge.separator.is_empty() {
            return Err(AppError::config("merge.separator must not be empty"));
        }
        if self.merge.separator.chars().any(char::is_whitespace) {
            return Err(AppError::config("merge.separator must not contain whitespace"));
        }
        Ok(())
    }
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("cnfmt").join("config.toml"))
}

pub fn ensure_config_file() -> Result<PathBuf, AppError> {
    let path = config_file_path()?;
    if !path.exists() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let default = Config::default();
        let contents = toml::to_string_pretty(&default)?;
        fs::write(&path, contents)?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("decimals = 1").unwrap();
        assert_eq!(config.decimals, 1);
        assert_eq!(config.overflow, Overflow::Clamp);
        assert_eq!(config.merge_options(), MergeOptions::default());
    }

    #[test]
    fn parses_merge_table_and_overflow() {
        let config: Config = toml::from_str(
            r#"
            overflow = "error"

            [merge]
            prefix = "tw-"
            "#,
        )
        .unwrap();
        assert_eq!(config.decimals, DEFAULT_DECIMALS);
        assert_eq!(config.overflow, Overflow::Error);
        assert_eq!(config.merge.prefix, "tw-");
        assert_eq!(config.merge.separator, ":");
    }

    #[test]
    fn rejects_empty_separator() {
        let config: Config = toml::from_str("[merge]\nseparator = \"\"").unwrap();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn set_decimals_checks_range() {
        let mut config = Config::default();
        assert!(config.set_decimals(-1).is_err());
        assert!(config.set_decimals(MAX_DECIMALS + 1).is_err());
        config.set_decimals(3).unwrap();
        assert_eq!(config.decimals, 3);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let contents = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
