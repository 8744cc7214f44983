pub mod parse;
pub mod tool_config;

pub use parse::parse_tool_config_content;
pub use tool_config::{SupportedConfigKey, ToolConfig};
