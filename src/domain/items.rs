//! Tracing items: the records every lobster tool produces.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::AppError;
use crate::domain::location::Location;
use crate::domain::schema::Schema;

/// Identifier of a traceable item, e.g. `req example.Requirement@3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TracingTag {
    pub namespace: String,
    pub tag: String,
    pub version: Option<String>,
}

impl TracingTag {
    pub fn new(namespace: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { namespace: namespace.into(), tag: tag.into(), version: None }
    }

    /// Parse `tag[@version]` within the given namespace.
    pub fn from_text(namespace: &str, text: &str) -> Result<Self, AppError> {
        let (tag, version) = match text.split_once('@') {
            Some((tag, version)) => (tag, Some(version.to_string())),
            None => (text, None),
        };
        if tag.is_empty() {
            return Err(AppError::InvalidTag(text.to_string()));
        }
        Ok(Self { namespace: namespace.to_string(), tag: tag.to_string(), version })
    }

    /// Namespace and tag without the version.
    pub fn key(&self) -> String {
        format!("{} {}", self.namespace, self.tag)
    }

    pub fn to_text(&self) -> String {
        match &self.version {
            Some(version) => format!("{}@{}", self.key(), version),
            None => self.key(),
        }
    }
}

impl fmt::Display for TracingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Serialize for TracingTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

/// Fields shared by every item kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCommon {
    pub tag: TracingTag,
    pub location: Location,
    pub name: String,
    pub messages: Vec<String>,
    pub just_up: Vec<String>,
    pub just_down: Vec<String>,
    pub just_global: Vec<String>,
    pub refs: Vec<TracingTag>,
}

impl ItemCommon {
    pub fn new(tag: TracingTag, location: Location) -> Self {
        let name = tag.tag.clone();
        Self {
            tag,
            location,
            name,
            messages: Vec::new(),
            just_up: Vec::new(),
            just_down: Vec::new(),
            just_global: Vec::new(),
            refs: Vec::new(),
        }
    }

    /// Record an (unresolved) reference to the item identified by `target`.
    pub fn add_tracing_target(&mut self, target: TracingTag) {
        self.refs.push(target);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Requirement {
    #[serde(flatten)]
    pub common: ItemCommon,
    pub framework: String,
    pub kind: String,
    pub text: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Implementation {
    #[serde(flatten)]
    pub common: ItemCommon,
    pub language: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    #[serde(flatten)]
    pub common: ItemCommon,
    pub framework: String,
    pub kind: String,
    pub status: Option<String>,
}

impl Activity {
    pub fn new(
        tag: TracingTag,
        location: Location,
        framework: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            common: ItemCommon::new(tag, location),
            framework: framework.into(),
            kind: kind.into(),
            status: None,
        }
    }
}

/// Any tracing item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Requirement(Requirement),
    Implementation(Implementation),
    Activity(Activity),
}

impl Item {
    pub fn common(&self) -> &ItemCommon {
        match self {
            Item::Requirement(item) => &item.common,
            Item::Implementation(item) => &item.common,
            Item::Activity(item) => &item.common,
        }
    }

    /// Schema of the documents this item may be written to.
    pub fn schema(&self) -> Schema {
        match self {
            Item::Requirement(_) => Schema::Requirement,
            Item::Implementation(_) => Schema::Implementation,
            Item::Activity(_) => Schema::Activity,
        }
    }
}

impl From<Activity> for Item {
    fn from(item: Activity) -> Self {
        Item::Activity(item)
    }
}

impl From<Requirement> for Item {
    fn from(item: Requirement) -> Self {
        Item::Requirement(item)
    }
}

impl From<Implementation> for Item {
    fn from(item: Implementation) -> Self {
        Item::Implementation(item)
    }
}
