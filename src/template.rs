//! Template file handling: reading a template and writing the starter one.

use std::fs;
use std::path::Path;

use log::debug;

use crate::constants::DEFAULT_TEMPLATE;
use crate::error::{Error, Result};

/// Reads a template file.
///
/// # Errors
/// * `Error::TemplateNotFound` if the file does not exist
/// * `Error::IoError` if it cannot be read
pub fn read_template<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::TemplateNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!("Reading template from {}", path.display());
    Ok(fs::read_to_string(path)?)
}

/// Writes the starter template.
///
/// # Arguments
/// * `path` - Where to write the template
/// * `force` - Overwrite an existing file
///
/// # Errors
/// * `Error::TemplateExists` if the file exists and `force` is false
pub fn write_default_template<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Err(Error::TemplateExists {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_TEMPLATE)?;
    Ok(())
}
