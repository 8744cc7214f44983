//! Disk-backed configuration loading.
//!
//! Pure schema parsing lives in `domain::config`.

mod load_config;
mod tool_options;

pub use load_config::load_tool_config;
pub use tool_options::ToolOptions;
