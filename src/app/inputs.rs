//! Work-list construction: which files a tool run processes.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::adapters::source_tree;
use crate::app::config::ToolOptions;
use crate::app::tool::Tool;
use crate::domain::{AppError, Location, MessageHandler};

/// Directory names produced by bazel; skipped unless `traverse_bazel_dirs` is set.
const BAZEL_DIR_PATTERN: &str = "^bazel-.*$";

/// One requested input together with where it was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    pub location: Location,
    pub item: String,
}

/// Parse an inputs file: one path per line, `#` starts a comment.
pub fn parse_inputs_file(file_name: &str, content: &str) -> Vec<InputRequest> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, raw_line)| {
            let line = raw_line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                return None;
            }
            let line_no = u32::try_from(index + 1).unwrap_or(u32::MAX);
            Some(InputRequest {
                location: Location::file_line(file_name, line_no),
                item: line.to_string(),
            })
        })
        .collect()
}

/// Gather input requests from the config and the inputs file; default to `.`.
pub fn collect_requests(options: &ToolOptions) -> Result<Vec<InputRequest>, AppError> {
    let mut requests: Vec<InputRequest> = options
        .inputs
        .iter()
        .map(|item| InputRequest { location: Location::config(), item: item.clone() })
        .collect();

    if let Some(path) = &options.inputs_from_file {
        if !path.is_file() {
            return Err(AppError::usage(format!("cannot open {}", path.display())));
        }
        let content = fs::read_to_string(path)?;
        requests.extend(parse_inputs_file(&path.display().to_string(), &content));
    }

    if options.inputs.is_empty() && options.inputs_from_file.is_none() {
        requests.push(InputRequest { location: Location::config(), item: ".".to_string() });
    }

    Ok(requests)
}

/// Build the sorted list of files a tool run works on.
///
/// Files given directly are kept even with a foreign extension (with a
/// warning). Requests that are neither file nor directory are all reported
/// before the run is rejected.
pub fn build_work_list<T: Tool + ?Sized>(
    tool: &T,
    options: &ToolOptions,
    messages: &MessageHandler,
) -> Result<Vec<PathBuf>, AppError> {
    if let Some(out) = &options.out {
        if out.exists() && !out.is_file() {
            return Err(AppError::usage(format!(
                "output {} already exists and is not a file",
                out.display()
            )));
        }
    }

    let identity = tool.identity();
    let exclude = exclude_patterns(tool, options)?;
    let requests = collect_requests(options)?;

    let mut work_list = Vec::new();
    let mut rejected = 0;
    for request in &requests {
        let path = Path::new(&request.item);
        if path.is_file() {
            if !source_tree::has_extension(path, identity.extensions()) {
                messages.warning(
                    &request.location,
                    format!("not a {} file", identity.extensions().join(" or ")),
                );
            }
            work_list.push(path.to_path_buf());
        } else if path.is_dir() {
            work_list.extend(source_tree::collect_files(path, identity.extensions(), &exclude)?);
        } else {
            messages.error(
                &request.location,
                format!("{} is not a file or directory", request.item),
            );
            rejected += 1;
        }
    }

    if rejected > 0 {
        return Err(AppError::InputsRejected { count: rejected });
    }

    work_list.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    log::debug!("{}: {} files to process", identity.name(), work_list.len());
    Ok(work_list)
}

fn exclude_patterns<T: Tool + ?Sized>(
    tool: &T,
    options: &ToolOptions,
) -> Result<Vec<Regex>, AppError> {
    let mut patterns = tool.exclude_patterns().to_vec();
    if !options.traverse_bazel_dirs {
        let bazel = Regex::new(BAZEL_DIR_PATTERN).map_err(|err| AppError::ParseError {
            what: "exclude pattern".into(),
            details: err.to_string(),
        })?;
        patterns.push(bazel);
    }
    Ok(patterns)
}
