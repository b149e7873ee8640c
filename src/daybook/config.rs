use crate::error::{DaybookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_EMOTION: u8 = 3;

/// Configuration for daybook, stored next to the data file in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaybookConfig {
    /// strftime format used when printing entry dates (e.g., "%Y-%m-%d")
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Emotion tag assigned when `new` is called without one (1..=5)
    #[serde(default = "default_emotion")]
    pub default_emotion: u8,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_emotion() -> u8 {
    DEFAULT_EMOTION
}

impl Default for DaybookConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            default_emotion: DEFAULT_EMOTION,
        }
    }
}

impl DaybookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DaybookError::Io)?;
        let config: DaybookConfig =
            serde_json::from_str(&content).map_err(DaybookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DaybookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DaybookError::Serialization)?;
        fs::write(config_path, content).map_err(DaybookError::Io)?;
        Ok(())
    }

    /// Set the default emotion tag (must be within the fixed emotion set)
    pub fn set_default_emotion(&mut self, emotion_id: u8) -> Result<()> {
        if !(1..=5).contains(&emotion_id) {
            return Err(DaybookError::Api(format!(
                "Emotion must be between 1 and 5, got {}",
                emotion_id
            )));
        }
        self.default_emotion = emotion_id;
        Ok(())
    }

    /// Look up a config value by its CLI key name
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "date-format" => Some(self.date_format.clone()),
            "default-emotion" => Some(self.default_emotion.to_string()),
            _ => None,
        }
    }

    /// Set a config value by its CLI key name
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "date-format" => {
                if value.is_empty() {
                    return Err("date-format cannot be empty".to_string());
                }
                self.date_format = value.to_string();
                Ok(())
            }
            "default-emotion" => {
                let emotion: u8 = value
                    .parse()
                    .map_err(|_| format!("Invalid emotion value: {}", value))?;
                self.set_default_emotion(emotion).map_err(|e| e.to_string())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DaybookConfig::default();
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.default_emotion, 3);
    }

    #[test]
    fn test_set_default_emotion() {
        let mut config = DaybookConfig::default();
        config.set_default_emotion(5).unwrap();
        assert_eq!(config.default_emotion, 5);
    }

    #[test]
    fn test_set_default_emotion_out_of_range() {
        let mut config = DaybookConfig::default();
        assert!(config.set_default_emotion(0).is_err());
        assert!(config.set_default_emotion(6).is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = DaybookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, DaybookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = DaybookConfig::default();
        config.date_format = "%d/%m/%Y".to_string();
        config.save(temp_dir.path()).unwrap();

        let loaded = DaybookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = DaybookConfig::default();
        config.set("default-emotion", "4").unwrap();
        assert_eq!(config.get("default-emotion").as_deref(), Some("4"));
        assert!(config.set("default-emotion", "nine").is_err());
        assert!(config.set("no-such-key", "x").is_err());
        assert!(config.get("no-such-key").is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"date_format":"%m-%d"}"#,
        )
        .unwrap();

        let loaded = DaybookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.date_format, "%m-%d");
        assert_eq!(loaded.default_emotion, 3);
    }
}
