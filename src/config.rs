use crate::error::{Result, UndoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "cz-undo.toml";

/// File looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".cz-undo.toml";

/// Returns the default remote named in the tag removal hint.
fn default_remote() -> String {
    "origin".to_string()
}

/// Returns the default shell used to run undo commands.
fn default_shell() -> String {
    "sh".to_string()
}

/// Represents the complete configuration for cz-undo.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote used in the "remove the tag from the remote" hint
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Shell that runs the undo command as `<shell> -c <command>`
    #[serde(default = "default_shell")]
    pub shell: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            shell: default_shell(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `cz-undo.toml` in current directory
/// 3. `.cz-undo.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        UndoError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| UndoError::config(format!("Invalid {}: {}", path.display(), e)))
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.remote, "origin");
        assert_eq!(config.shell, "sh");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(r#"remote = "upstream""#).unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.shell, "sh");
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
