use std::path::PathBuf;

use crate::domain::ToolConfig;

/// Effective common options of one tool run: command line merged over config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolOptions {
    pub out: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub inputs_from_file: Option<PathBuf>,
    pub traverse_bazel_dirs: bool,
    pub single: bool,
}

impl ToolOptions {
    /// Merge the command line `--out` with the loaded config. The command line wins.
    pub fn resolve(cli_out: Option<PathBuf>, config: ToolConfig) -> Self {
        Self {
            out: cli_out.or(config.out),
            inputs: config.inputs,
            inputs_from_file: config.inputs_from_file,
            traverse_bazel_dirs: config.traverse_bazel_dirs,
            single: config.single,
        }
    }
}
