use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use regex::Regex;

use crate::app::tool::{FileOutcome, PerFileTool, Tool, ToolIdentity};
use crate::domain::{Activity, Location, MessageHandler, Schema, TracingTag};

/// Per-file tool that emits one activity per file and can be told to fail.
#[allow(dead_code)]
pub struct FakeTool {
    identity: ToolIdentity,
    exclude: Vec<Regex>,
    failing_file: Option<String>,
    processed: AtomicUsize,
}

impl Default for FakeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl FakeTool {
    pub fn new() -> Self {
        Self {
            identity: ToolIdentity::new("fake", "Fake tool for tests.", &["json"], false),
            exclude: Vec::new(),
            failing_file: None,
            processed: AtomicUsize::new(0),
        }
    }

    /// Fail on every file with this file name.
    pub fn failing_on(mut self, file_name: &str) -> Self {
        self.failing_file = Some(file_name.to_string());
        self
    }

    pub fn excluding(mut self, pattern: &str) -> Self {
        self.exclude.push(Regex::new(pattern).unwrap());
        self
    }

    pub fn processed_count(&self) -> usize {
        self.processed.load(Ordering::SeqCst)
    }
}

impl Tool for FakeTool {
    fn identity(&self) -> &ToolIdentity {
        &self.identity
    }

    fn schema(&self) -> Schema {
        Schema::Activity
    }

    fn exclude_patterns(&self) -> &[Regex] {
        &self.exclude
    }
}

impl PerFileTool for FakeTool {
    fn process(&self, file: &Path, messages: &MessageHandler) -> FileOutcome {
        self.processed.fetch_add(1, Ordering::SeqCst);
        let location = Location::file(file.display().to_string());

        let file_name = file.file_name().map(|name| name.to_string_lossy().into_owned());
        if file_name.is_some() && file_name == self.failing_file {
            messages.error(&location, "refusing to process");
            return FileOutcome::failure();
        }

        let tag = TracingTag::new("fake", file.display().to_string());
        FileOutcome::success(vec![Activity::new(tag, location, "Fake", "Test").into()])
    }
}
