//! `lobster-json` command line.

use clap::Parser;

use super::{CommonArgs, TOOL_HEADING, parse_args, run_per_file_tool};
use crate::app::tools::{JsonOptions, JsonTool};

#[derive(Parser)]
#[command(name = "lobster-json")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Use the dotted name to obtain a test name
    #[arg(long, value_name = "JSON_EXPRESSION", help_heading = TOOL_HEADING)]
    name_attribute: Option<String>,

    /// Use the dotted name to obtain a list of tracing tags
    #[arg(long, value_name = "JSON_EXPRESSION", required = true, help_heading = TOOL_HEADING)]
    tag_attribute: String,

    /// Use the dotted name to obtain a list of justifications
    #[arg(long, value_name = "JSON_EXPRESSION", help_heading = TOOL_HEADING)]
    justification_attribute: Option<String>,

    /// Member that contains the list of tests, e.g. `data.tests`
    #[arg(long, value_name = "JSON_EXPRESSION", default_value = "", help_heading = TOOL_HEADING)]
    test_list: String,
}

/// Entry point for `lobster-json`.
pub fn run() {
    let cli: Cli = parse_args(&JsonTool::tool_identity());

    let tool = JsonTool::new(JsonOptions {
        name_attribute: cli.name_attribute,
        tag_attribute: cli.tag_attribute,
        justification_attribute: cli.justification_attribute,
        test_list: cli.test_list,
    });

    let exit_code = run_per_file_tool(&tool, cli.common);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
