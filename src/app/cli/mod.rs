//! CLI Adapter.
//!
//! Each lobster binary parses its own arguments, flattening in the options
//! every tool shares, and hands off to [`run_per_file_tool`].

pub mod json;

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::app::api;
use crate::app::tool::{PerFileTool, RunOutcome, ToolIdentity};
use crate::domain::AppError;

const COMMON_HEADING: &str = "Common options";
pub(crate) const TOOL_HEADING: &str = "Tool specific options";

/// Options understood by every lobster tool.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Path to YAML file with arguments, supported references: inputs, inputs_from_file, out, single, traverse_bazel_dirs
    #[arg(long, value_name = "CONFIG", help_heading = COMMON_HEADING)]
    pub config: Option<PathBuf>,
    /// Write output to given file instead of stdout.
    #[arg(long, value_name = "OUT", help_heading = COMMON_HEADING)]
    pub out: Option<PathBuf>,
}

/// Parse the process arguments, with description and epilog taken from the tool.
pub(crate) fn parse_args<P: Parser>(identity: &ToolIdentity) -> P {
    let mut command = P::command().about(identity.description().to_string());
    if let Some(epilog) = identity.epilog() {
        command = command.after_help(epilog);
    }
    let matches = command.get_matches();
    P::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

/// Run a per-file tool and translate the result into a process exit code.
pub(crate) fn run_per_file_tool<T: PerFileTool>(tool: &T, common: CommonArgs) -> i32 {
    let name = tool.identity().name().to_string();
    let result = {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        api::run_tool(tool, common.out, common.config.as_deref(), &mut handle)
    };

    match result {
        Ok(outcome) => {
            report(&name, &outcome);
            outcome.exit_code()
        }
        // Rejected inputs were already reported one by one.
        Err(e @ AppError::InputsRejected { .. }) => e.exit_code(),
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn report(name: &str, outcome: &RunOutcome) {
    if !outcome.ok {
        println!("{name}: aborting due to earlier errors");
    } else if let Some(destination) = &outcome.destination {
        println!("{name}: wrote {} items to {}", outcome.item_count, destination.display());
    }
}
