//! Common tool framework.
//!
//! Every lobster tool shares the same front half (options, config, input
//! discovery) and back half (output writing). A [`PerFileTool`] only has to
//! say how one input file turns into tracing items.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use regex::Regex;

use crate::adapters::lobster_io;
use crate::app::config::ToolOptions;
use crate::app::inputs;
use crate::domain::{AppError, Item, MessageHandler, Schema};

pub const FULL_NAME: &str = "LOBSTER";
pub const BUG_URL: &str = "https://github.com/bmw-software-engineering/lobster/issues";

/// Name, description and accepted file extensions of a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolIdentity {
    name: String,
    description: String,
    extensions: Vec<String>,
    official: bool,
}

impl ToolIdentity {
    /// `short_name` becomes `lobster-<short_name>`; extensions are given without the dot.
    pub fn new(short_name: &str, description: &str, extensions: &[&str], official: bool) -> Self {
        let mut extensions: Vec<String> = extensions.iter().map(|ext| format!(".{ext}")).collect();
        extensions.sort();
        Self {
            name: format!("lobster-{short_name}"),
            description: description.to_string(),
            extensions,
            official,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sorted, dot-prefixed extensions.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Help epilog; only official tools carry one.
    pub fn epilog(&self) -> Option<String> {
        self.official.then(|| {
            format!(
                "Part of {FULL_NAME}, licensed under the AGPLv3. Please report bugs to {BUG_URL}."
            )
        })
    }
}

/// A lobster tool.
pub trait Tool: Sync {
    fn identity(&self) -> &ToolIdentity;

    /// Schema of the document this tool writes.
    fn schema(&self) -> Schema;

    /// Directory names not to descend into while walking inputs. A pattern
    /// must match at the start of the name.
    fn exclude_patterns(&self) -> &[Regex] {
        &[]
    }
}

/// Result of processing one input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileOutcome {
    pub ok: bool,
    pub items: Vec<Item>,
}

impl FileOutcome {
    pub fn success(items: Vec<Item>) -> Self {
        Self { ok: true, items }
    }

    pub fn failure() -> Self {
        Self { ok: false, items: Vec::new() }
    }
}

/// A tool whose input files can be processed independently of each other.
pub trait PerFileTool: Tool {
    /// Extract items from one file. Problems are reported through `messages`.
    fn process(&self, file: &Path, messages: &MessageHandler) -> FileOutcome;
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub ok: bool,
    pub item_count: usize,
    /// Output file, or `None` when the document went to the supplied writer.
    pub destination: Option<PathBuf>,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.ok { 0 } else { 1 }
    }
}

/// Run a per-file tool: discover inputs, process them, write the result.
///
/// Without an output file the document is written to `stdout`. Nothing is
/// written when any file failed.
pub fn execute<T: PerFileTool, W: Write>(
    tool: &T,
    options: &ToolOptions,
    stdout: &mut W,
) -> Result<RunOutcome, AppError> {
    let messages = MessageHandler::new();
    let work_list = inputs::build_work_list(tool, options, &messages)?;
    let (ok, items) = process_work_list(tool, &work_list, options.single, &messages);
    write_output(tool, options, ok, &items, stdout)
}

/// Process every file; results are combined in work-list order.
pub fn process_work_list<T: PerFileTool>(
    tool: &T,
    work_list: &[PathBuf],
    single: bool,
    messages: &MessageHandler,
) -> (bool, Vec<Item>) {
    let outcomes: Vec<FileOutcome> = if single {
        log::debug!("{}: processing {} files sequentially", tool.identity().name(), work_list.len());
        work_list.iter().map(|file| process_one(tool, file, messages)).collect()
    } else {
        log::debug!(
            "{}: processing {} files on {} threads",
            tool.identity().name(),
            work_list.len(),
            rayon::current_num_threads()
        );
        work_list.par_iter().map(|file| process_one(tool, file, messages)).collect()
    };

    let mut ok = true;
    let mut items = Vec::new();
    for outcome in outcomes {
        ok &= outcome.ok;
        items.extend(outcome.items);
    }
    (ok, items)
}

fn process_one<T: PerFileTool>(tool: &T, file: &Path, messages: &MessageHandler) -> FileOutcome {
    log::debug!("processing {}", file.display());
    tool.process(file, messages)
}

fn write_output<T: Tool, W: Write>(
    tool: &T,
    options: &ToolOptions,
    ok: bool,
    items: &[Item],
    stdout: &mut W,
) -> Result<RunOutcome, AppError> {
    let name = tool.identity().name();
    if !ok {
        return Ok(RunOutcome { ok, item_count: items.len(), destination: None });
    }

    match &options.out {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            lobster_io::write(&mut writer, tool.schema(), name, items)?;
            writer.flush()?;
        }
        None => lobster_io::write(stdout, tool.schema(), name, items)?,
    }

    Ok(RunOutcome { ok, item_count: items.len(), destination: options.out.clone() })
}
