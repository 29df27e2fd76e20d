//! Assistant configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, AssistantConfig};

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "hope.toml";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "HOPE_CONFIG";

/// Resolve and load configuration.
///
/// Precedence: explicit path > `HOPE_CONFIG` > `./hope.toml` > defaults.
/// A named file must exist; the implicit default file may be absent.
pub fn load_config(explicit: Option<&Path>) -> Result<AssistantConfig, AppError> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    match named {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|err| {
                if err.kind() == ErrorKind::NotFound {
                    AppError::ConfigFileMissing(path.display().to_string())
                } else {
                    AppError::Io(err)
                }
            })?;
            parse_config_content(&content)
        }
        None => match fs::read_to_string(DEFAULT_CONFIG_FILE) {
            Ok(content) => parse_config_content(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(AssistantConfig::default()),
            Err(err) => Err(AppError::Io(err)),
        },
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AssistantConfig, AppError> {
    let config: AssistantConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
