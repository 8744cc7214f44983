//! Source locations attached to tracing items and diagnostics.

use std::fmt;

use serde::Serialize;

/// Placeholder file name used for inputs that came from the config file.
pub const CONFIG_FILE_NAME: &str = "<config>";

/// Where a tracing item or diagnostic originates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Location {
    File {
        file: String,
        line: Option<u32>,
        column: Option<u32>,
    },
    Github {
        gh_root: String,
        commit: String,
        file: String,
        line: Option<u32>,
    },
    Codebeamer {
        cb_root: String,
        tracker: u64,
        item: u64,
        version: Option<u64>,
        name: Option<String>,
    },
    Void,
}

impl Location {
    pub fn file(file: impl Into<String>) -> Self {
        Location::File { file: file.into(), line: None, column: None }
    }

    pub fn file_line(file: impl Into<String>, line: u32) -> Self {
        Location::File { file: file.into(), line: Some(line), column: None }
    }

    pub fn file_line_column(file: impl Into<String>, line: u32, column: u32) -> Self {
        Location::File { file: file.into(), line: Some(line), column: Some(column) }
    }

    /// Location of an entry that was listed directly in the config file.
    pub fn config() -> Self {
        Location::file(CONFIG_FILE_NAME)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File { file, line: None, .. } => write!(f, "{file}"),
            Location::File { file, line: Some(line), column: None } => write!(f, "{file}:{line}"),
            Location::File { file, line: Some(line), column: Some(column) } => {
                write!(f, "{file}:{line}:{column}")
            }
            Location::Github { gh_root, commit, file, line } => {
                write!(f, "{gh_root}/blob/{commit}/{file}")?;
                if let Some(line) = line {
                    write!(f, "#L{line}")?;
                }
                Ok(())
            }
            Location::Codebeamer { cb_root, item, version, .. } => {
                write!(f, "{cb_root}/issue/{item}")?;
                if let Some(version) = version {
                    write!(f, "?version={version}")?;
                }
                Ok(())
            }
            Location::Void => write!(f, "<unknown location>"),
        }
    }
}
