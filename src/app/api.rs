//! API Facade for the application.
//!
//! Glues configuration loading and tool execution together for both the
//! binaries and library callers.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::config::{ToolOptions, load_tool_config};
use crate::app::tool::{self, PerFileTool, RunOutcome};
use crate::app::tools::{JsonOptions, JsonTool};
use crate::domain::AppError;

/// Resolve the effective options from a `--out` value and an optional config file.
pub fn load_tool_options(
    cli_out: Option<PathBuf>,
    config: Option<&Path>,
) -> Result<ToolOptions, AppError> {
    let config = load_tool_config(config)?;
    Ok(ToolOptions::resolve(cli_out, config))
}

/// Load options and run `tool`; the document goes to `stdout` unless an output file is set.
pub fn run_tool<T: PerFileTool, W: Write>(
    tool: &T,
    cli_out: Option<PathBuf>,
    config: Option<&Path>,
    stdout: &mut W,
) -> Result<RunOutcome, AppError> {
    let options = load_tool_options(cli_out, config)?;
    tool::execute(tool, &options, stdout)
}

/// Extract activities from JSON test vectors.
pub fn extract_json<W: Write>(
    json_options: JsonOptions,
    options: &ToolOptions,
    stdout: &mut W,
) -> Result<RunOutcome, AppError> {
    tool::execute(&JsonTool::new(json_options), options, stdout)
}
