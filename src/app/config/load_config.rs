//! Tool configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::config;
use crate::domain::{AppError, ToolConfig};

/// Load and parse the YAML file given via `--config`.
///
/// Without a path every setting takes its default.
pub fn load_tool_config(path: Option<&Path>) -> Result<ToolConfig, AppError> {
    let Some(path) = path else {
        return Ok(ToolConfig::default());
    };

    if !path.is_file() {
        return Err(AppError::ConfigNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let config = config::parse_tool_config_content(&content)?;
    log::debug!("loaded tool config from {}", path.display());
    Ok(config)
}
