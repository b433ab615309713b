use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scripts: ScriptConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Subdirectory created under the output root to hold the extracted tree.
    #[serde(default = "default_subdir")]
    pub subdir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Class names that carry executable source text.
    #[serde(default = "default_script_classes")]
    pub classes: Vec<String>,
    /// Extension given to emitted source files.
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_subdir() -> String {
    "src".into()
}
fn default_script_classes() -> Vec<String> {
    vec!["Script".into(), "LocalScript".into(), "ModuleScript".into()]
}
fn default_extension() -> String {
    "luau".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            subdir: default_subdir(),
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            classes: default_script_classes(),
            extension: default_extension(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file, or fall back to defaults
    /// when none is given. An explicitly named file that does not exist is
    /// an error; missing fields in an existing file take their defaults.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = config_file else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn is_script_class(&self, class_name: &str) -> bool {
        self.scripts.classes.iter().any(|c| c == class_name)
    }
}
