//! Configuration handling for crig templates.
//! An optional `crig.json`, `crig.yml` or `crig.yaml` next to the template
//! tunes how the template text is parsed.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::constants::{COMMENT_MARKER, CONFIG_FILES, SPACE_INDENT_WIDTH, SYNTHETIC_ROOT};
use crate::error::{Error, Result};
use crate::validate::is_valid_name;

/// Which indentation styles a template may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentPolicy {
    /// Tabs, space blocks or tree glyphs, detected from the first indented line
    #[default]
    Auto,
    /// Tab indentation only
    Tabs,
}

/// Settings for the template parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub indent: IndentPolicy,
    /// Spaces per level when a template is indented with spaces
    pub space_width: usize,
    pub comment_marker: String,
    /// Directory name wrapping several top-level entries
    pub synthetic_root: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            indent: IndentPolicy::default(),
            space_width: SPACE_INDENT_WIDTH,
            comment_marker: COMMENT_MARKER.to_string(),
            synthetic_root: SYNTHETIC_ROOT.to_string(),
        }
    }
}

impl ParserConfig {
    /// Rejects settings the parser cannot work with.
    ///
    /// # Errors
    /// * `Error::ConfigError` for a zero space width, an empty comment marker
    ///   or a synthetic root name that is not a valid entry name
    pub fn validate(&self) -> Result<()> {
        if self.space_width == 0 {
            return Err(Error::ConfigError(
                "space_width must be greater than zero".to_string(),
            ));
        }
        if self.comment_marker.trim().is_empty() {
            return Err(Error::ConfigError(
                "comment_marker must not be empty".to_string(),
            ));
        }
        if !is_valid_name(&self.synthetic_root) {
            return Err(Error::ConfigError(format!(
                "synthetic_root '{}' is not a valid directory name",
                self.synthetic_root
            )));
        }
        Ok(())
    }
}

/// Loads the first configuration file found in a directory.
///
/// # Arguments
/// * `dir` - Directory to look into, usually the template's directory
/// * `config_files` - Candidate file names, tried in order
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first file found, `None` when there is none
pub fn load_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = dir.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither, has unknown keys or invalid values
pub fn parse_config(content: &str) -> Result<ParserConfig> {
    if content.trim().is_empty() {
        return Ok(ParserConfig::default());
    }
    let config: ParserConfig = match serde_json::from_str(content) {
        Ok(config) => config,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))?,
    };
    config.validate()?;
    Ok(config)
}

/// Returns the parser configuration for templates in `dir`, or the defaults.
pub fn get_config<P: AsRef<Path>>(dir: P) -> Result<ParserConfig> {
    match load_config(dir, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(ParserConfig::default()),
    }
}
