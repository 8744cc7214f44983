//! `lobster-json`: test vectors stored as JSON become activities.

use std::env;
use std::fs;
use std::path::{Component, Path};

use serde_json::Value;

use crate::app::tool::{FileOutcome, PerFileTool, Tool, ToolIdentity};
use crate::domain::{Activity, Item, Location, MessageHandler, Schema, TracingTag};

/// Tool specific options of `lobster-json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonOptions {
    /// Dotted path to the test name; synthesized from the file name when absent.
    pub name_attribute: Option<String>,
    /// Dotted path to the tracing tags.
    pub tag_attribute: String,
    /// Dotted path to justifications.
    pub justification_attribute: Option<String>,
    /// Dotted path to the member holding the tests; empty means the document root.
    pub test_list: String,
}

pub struct JsonTool {
    identity: ToolIdentity,
    options: JsonOptions,
}

impl JsonTool {
    pub fn new(options: JsonOptions) -> Self {
        Self { identity: Self::tool_identity(), options }
    }

    pub fn tool_identity() -> ToolIdentity {
        ToolIdentity::new("json", "Extract tracing data from JSON files.", &["json"], true)
    }

    fn extract(&self, file_name: &str, data: &Value) -> Result<Vec<Item>, Malformed> {
        let tests = match get_item(data, &self.options.test_list, true)? {
            Some(Value::Array(tests)) => tests.iter().collect::<Vec<_>>(),
            Some(test @ Value::Object(_)) => vec![test],
            _ => return Err(Malformed::new("test list is not a list or object")),
        };

        let mut items = Vec::with_capacity(tests.len());
        for (index, test) in tests.into_iter().enumerate() {
            let name = match &self.options.name_attribute {
                Some(path) => match get_item(test, path, false)? {
                    Some(Value::String(name)) => name.clone(),
                    _ => return Err(Malformed::new("name is not a string")),
                },
                None => format!("{}.{}", synthetic_test_name(file_name), index + 1),
            };

            let tags = string_list(get_item(test, &self.options.tag_attribute, false)?, "tags")?;
            let justifications = match &self.options.justification_attribute {
                Some(path) => string_list(get_item(test, path, false)?, "justifications")?,
                None => Vec::new(),
            };

            let tag = TracingTag::new("json", format!("{file_name}:{name}"));
            let mut activity = Activity::new(tag, Location::file(file_name), "JSON", "Test Vector");
            for text in tags {
                let target = TracingTag::from_text("req", &text)
                    .map_err(|err| Malformed::new(err.to_string()))?;
                activity.common.add_tracing_target(target);
            }
            activity.common.just_up.extend(justifications);
            items.push(activity.into());
        }
        Ok(items)
    }
}

impl Tool for JsonTool {
    fn identity(&self) -> &ToolIdentity {
        &self.identity
    }

    fn schema(&self) -> Schema {
        Schema::Activity
    }
}

impl PerFileTool for JsonTool {
    fn process(&self, file: &Path, messages: &MessageHandler) -> FileOutcome {
        let file_name = file.display().to_string();
        let location = Location::file(file_name.clone());

        let bytes = match fs::read(file) {
            Ok(bytes) => bytes,
            Err(err) => {
                messages.error(&location, format!("cannot read file: {err}"));
                return FileOutcome::failure();
            }
        };
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                messages.error(&location, format!("file is not encoded in utf-8: {err}"));
                return FileOutcome::failure();
            }
        };
        let data: Value = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(err) => {
                let position = Location::file_line_column(
                    file_name.clone(),
                    u32::try_from(err.line()).unwrap_or(u32::MAX),
                    u32::try_from(err.column()).unwrap_or(u32::MAX),
                );
                messages.error(&position, syntax_message(&err));
                return FileOutcome::failure();
            }
        };

        match self.extract(&file_name, &data) {
            Ok(items) => FileOutcome::success(items),
            Err(malformed) => {
                log::debug!("{file_name}: offending value: {data}");
                messages.error(&location, format!("malformed input: {}", malformed.0));
                FileOutcome::failure()
            }
        }
    }
}

/// Structural problem in an otherwise valid JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Malformed(String);

impl Malformed {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Follow a dotted member path. An empty path yields `root` itself.
///
/// When `required`, a missing member or a non-object along the way is
/// malformed input; otherwise it yields `None`.
fn get_item<'a>(root: &'a Value, path: &str, required: bool) -> Result<Option<&'a Value>, Malformed> {
    if path.is_empty() {
        return Ok(Some(root));
    }
    let (field, tail) = path.split_once('.').unwrap_or((path, ""));

    match root {
        Value::Object(members) => match members.get(field) {
            Some(value) => get_item(value, tail, required),
            None if required => Err(Malformed::new(format!("object does not contain {field}"))),
            None => Ok(None),
        },
        _ if required => Err(Malformed::new("not an object")),
        _ => Ok(None),
    }
}

fn string_list(value: Option<&Value>, what: &str) -> Result<Vec<String>, Malformed> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(text)) => Ok(vec![text.clone()]),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(text) => Ok(text.clone()),
                _ => Err(Malformed::new(format!("{what} must be strings"))),
            })
            .collect(),
        Some(_) => Err(Malformed::new(format!("{what} are not a string or list"))),
    }
}

/// Test name derived from the file path: `tests/unit/a.json` -> `tests.unit.a`.
fn synthetic_test_name(file_name: &str) -> String {
    let path = Path::new(file_name);
    let relative = match env::current_dir() {
        Ok(cwd) if path.is_absolute() => path.strip_prefix(&cwd).unwrap_or(path),
        _ => path,
    };

    let mut components: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|parent| parent.components())
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    if let Some(base) = relative.file_name() {
        components.push(base.to_string_lossy().replace(".json", ""));
    }

    components.retain(|part| !part.is_empty() && part != ".");
    components.join(".")
}

/// serde_json appends the position to its message; the location already carries it.
fn syntax_message(err: &serde_json::Error) -> String {
    let text = err.to_string();
    match text.rsplit_once(" at line ") {
        Some((message, _)) => message.to_string(),
        None => text,
    }
}
