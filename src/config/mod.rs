//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! where the shopping list is stored and how verbose logging is.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/shopping-list";
const DATA_DIRECTORY_NAME: &str = "shopping-list";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            data_dir: None,
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no configuration file exists yet, write one
    /// holding the current values so the user has something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.data_dir = data.data_dir;
            self.log_level = data.log_level;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            data_dir: self.data_dir.clone(),
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the configuration file path once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the directory the shopping list is stored in: the configured
    /// one, or the platform's local data directory.
    ///
    pub fn data_dir(&self) -> Result<PathBuf, AppError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => match dirs::data_local_dir() {
                Some(dir) => Ok(dir.join(DATA_DIRECTORY_NAME)),
                None => Err(ConfigError::DataDirectoryNotFound.into()),
            },
        }
    }

    /// Parse the configured log level.
    ///
    pub fn log_level(&self) -> Result<LevelFilter, AppError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()).into())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("config");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_load_reads_existing_file() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(FILE_NAME),
            "data_dir: /tmp/groceries\nlog_level: debug\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(temp.path().to_str()).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/groceries")));
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/groceries"));
        assert_eq!(config.log_level().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_load_fills_missing_fields() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(FILE_NAME), "data_dir: /tmp/groceries\n").unwrap();

        let mut config = Config::new();
        config.load(temp.path().to_str()).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(FILE_NAME), "log_level: [unclosed\n").unwrap();

        let mut config = Config::new();
        let result = config.load(temp.path().to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn test_save_round_trip() {
        let temp = tempdir().unwrap();
        let mut config = Config::new();
        config.load(temp.path().to_str()).unwrap();
        config.data_dir = Some(PathBuf::from("/srv/lists"));
        config.log_level = "info".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(temp.path().to_str()).unwrap();
        assert_eq!(reloaded.data_dir, Some(PathBuf::from("/srv/lists")));
        assert_eq!(reloaded.log_level, "info");
    }

    #[test]
    fn test_save_without_load_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn test_invalid_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::new()
        };
        assert!(matches!(
            config.log_level(),
            Err(AppError::Config(ConfigError::InvalidLogLevel(_)))
        ));
    }
}
