//! Tool configuration model (`--config <file>.yaml`).

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

/// Keys accepted at the top level of a tool config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedConfigKey {
    InputsFromFile,
    TraverseBazelDirs,
    Single,
    Inputs,
    Out,
}

impl SupportedConfigKey {
    pub const ALL: [SupportedConfigKey; 5] = [
        SupportedConfigKey::InputsFromFile,
        SupportedConfigKey::TraverseBazelDirs,
        SupportedConfigKey::Single,
        SupportedConfigKey::Inputs,
        SupportedConfigKey::Out,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SupportedConfigKey::InputsFromFile => "inputs_from_file",
            SupportedConfigKey::TraverseBazelDirs => "traverse_bazel_dirs",
            SupportedConfigKey::Single => "single",
            SupportedConfigKey::Inputs => "inputs",
            SupportedConfigKey::Out => "out",
        }
    }

    pub fn is_supported(key: &str) -> bool {
        Self::ALL.iter().any(|supported| supported.as_str() == key)
    }

    /// All key names, sorted, joined with `", "`.
    pub fn listing() -> String {
        let mut keys: Vec<&str> = Self::ALL.iter().map(|key| key.as_str()).collect();
        keys.sort_unstable();
        keys.join(", ")
    }
}

/// Settings shared by every lobster tool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolConfig {
    /// Files or directories to process.
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<String>,
    /// Text file listing one input per line.
    #[serde(default)]
    pub inputs_from_file: Option<PathBuf>,
    /// Descend into `bazel-*` output directories.
    #[serde(default, deserialize_with = "null_as_default")]
    pub traverse_bazel_dirs: bool,
    /// Process files sequentially on the calling thread.
    #[serde(default, deserialize_with = "null_as_default")]
    pub single: bool,
    /// Output file; the command line `--out` wins over this.
    #[serde(default)]
    pub out: Option<PathBuf>,
}

/// A key present without a value (`single:`) means the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
