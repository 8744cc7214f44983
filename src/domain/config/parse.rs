//! Pure parse/validate for tool configuration YAML.

use serde_yaml::Value;

use crate::domain::AppError;
use crate::domain::config::{SupportedConfigKey, ToolConfig};

/// Parse and validate tool configuration from YAML content.
///
/// An empty document is an empty configuration.
pub fn parse_tool_config_content(content: &str) -> Result<ToolConfig, AppError> {
    let value: Value = serde_yaml::from_str(content).map_err(yaml_error)?;

    let mapping = match value {
        Value::Null => return Ok(ToolConfig::default()),
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(AppError::ParseError {
                what: "config".into(),
                details: "top level must be a mapping".into(),
            });
        }
    };

    let mut unsupported: Vec<String> = mapping
        .keys()
        .map(|key| match key {
            Value::String(key) => key.clone(),
            other => serde_yaml::to_string(other).unwrap_or_default().trim().to_string(),
        })
        .filter(|key| !SupportedConfigKey::is_supported(key))
        .collect();
    if !unsupported.is_empty() {
        unsupported.sort();
        return Err(AppError::UnsupportedConfigKeys {
            unsupported: unsupported.join(", "),
            supported: SupportedConfigKey::listing(),
        });
    }

    serde_yaml::from_value(Value::Mapping(mapping)).map_err(yaml_error)
}

fn yaml_error(err: serde_yaml::Error) -> AppError {
    AppError::ParseError { what: "config".into(), details: err.to_string() }
}
