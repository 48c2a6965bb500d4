use crate::error::{Result, TutgraphError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".tutgraph.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TutgraphConfig {
    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print JSON responses
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub verbose: bool,

    /// Log file path, relative to the directory holding the config file
    #[serde(default)]
    pub file: Option<String>,
}

impl TutgraphConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the config file is searched
    /// upward from `start_path`; if none is found, defaults are returned.
    /// The second element is the directory the config was loaded from.
    pub fn load(start_path: &Path, explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = match explicit {
            Some(path) if path.exists() => path.to_path_buf(),
            Some(path) => {
                return Err(TutgraphError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            None => match Self::find_config_file(start_path) {
                Some(path) => path,
                None => return Ok((Self::default(), None)),
            },
        };

        let content = std::fs::read_to_string(&config_path)?;
        let config: TutgraphConfig = toml::from_str(&content)?;
        let config_root = config_path
            .parent()
            .ok_or_else(|| {
                TutgraphError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        Ok((config, Some(config_root)))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn log_path(&self, config_root: Option<&Path>) -> Option<PathBuf> {
        let file = self.logging.file.as_ref()?;
        Some(match config_root {
            Some(root) => root.join(file),
            None => PathBuf::from(file),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let (config, root) = TutgraphConfig::load(temp_dir.path(), None).unwrap();
        assert!(!config.output.pretty);
        assert!(!config.logging.verbose);
        assert!(config.logging.file.is_none());
        assert!(root.is_none() || root.unwrap().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_found_in_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[output]\npretty = true\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, root) = TutgraphConfig::load(&nested, None).unwrap();
        assert!(config.output.pretty);
        assert_eq!(root.as_deref(), Some(temp_dir.path()));
    }

    #[test]
    fn test_explicit_path_missing_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = TutgraphConfig::load(temp_dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, TutgraphError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "[output\npretty = ").unwrap();
        let err = TutgraphConfig::load(temp_dir.path(), Some(&path)).unwrap_err();
        assert!(matches!(err, TutgraphError::Toml(_)));
    }

    #[test]
    fn test_log_path_relative_to_config_root() {
        let config: TutgraphConfig =
            toml::from_str("[logging]\nverbose = true\nfile = \"logs/t.log\"\n").unwrap();
        assert!(config.logging.verbose);
        assert_eq!(
            config.log_path(Some(Path::new("/project"))),
            Some(PathBuf::from("/project/logs/t.log"))
        );
        assert_eq!(config.log_path(None), Some(PathBuf::from("logs/t.log")));
        assert_eq!(TutgraphConfig::default().log_path(None), None);
    }
}
