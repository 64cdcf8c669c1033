//! Configuration file discovery and loading

use super::options::PlumeConfiguration;
use crate::error::{PlumeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names in discovery priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[".plumerc.json", ".plumerc.toml", "plume.json"];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover config file by traversing upward from start_path
    ///
    /// Searches each directory for [`CONFIG_FILE_NAMES`] in order, moving up
    /// the tree until a config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| PlumeError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    ///
    /// `.json` files are read as JSONC (comments and trailing commas allowed);
    /// `.toml` files as TOML.
    pub fn load_from_file(path: &Path) -> Result<PlumeConfiguration> {
        let content = fs::read_to_string(path).map_err(|e| PlumeError::io_error(path, e))?;
        let ext = path.extension().and_then(|e| e.to_str());

        let parsed = match ext {
            Some("json") => json5::from_str(&content).map_err(|e| e.to_string()),
            Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
            _ => Err("Unsupported file extension (expected .json or .toml)".to_string()),
        };

        parsed.map_err(|message| {
            PlumeError::config_error(format!(
                "Failed to load config from '{}': {}",
                path.display(),
                message
            ))
        })
    }

    /// Load config from path or auto-discover
    ///
    /// An explicit path must exist. Without one, discovery starts at
    /// `start_dir` (or the current directory); finding nothing yields the
    /// default configuration.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<PlumeConfiguration> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(PlumeError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_file(path);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        match Self::auto_discover(search_dir)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(PlumeConfiguration::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_jsonc() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(
            temp_dir.path(),
            ".plumerc.json",
            r#"{
                // line comments are allowed
                "options": { "multilineImports": true, "sortImports": true, },
                "layout": { "tabWidth": 4 },
            }"#,
        );

        let config = ConfigLoader::load_from_file(&path).unwrap();
        let options = config.options_config();
        assert!(options.multiline_imports());
        assert!(options.sort_imports());
        assert_eq!(config.layout_config().tab_width, 4);
    }

    #[test]
    fn test_load_from_file_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(
            temp_dir.path(),
            ".plumerc.toml",
            "[options]\nminItemsForMultiline = 3\n\n[layout]\nuseTabs = true\n",
        );

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.options_config().min_items_for_multiline(), 3);
        assert!(config.layout_config().use_tabs);
    }

    #[test]
    fn test_invalid_content_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(temp_dir.path(), ".plumerc.json", "{ not json");

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, PlumeError::ConfigError { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(temp_dir.path(), "plume.yaml", "options: {}");

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn test_auto_discover_walks_upward() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), ".plumerc.json", "{}");
        let nested = temp_dir.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let found = ConfigLoader::auto_discover(&nested).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), ".plumerc.json");
    }

    #[test]
    fn test_auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "plume.json", "{}");
        create_temp_config(temp_dir.path(), ".plumerc.toml", "");

        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), ".plumerc.toml");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.json");

        let err = ConfigLoader::load(Some(&missing), None).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
