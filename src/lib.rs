//! lobster: extract software traceability evidence into the LOBSTER interchange format.
//!
//! A tool discovers its input files, turns each one into tracing items
//! (requirements, implementations or activities) and writes them as one
//! JSON document. The shared machinery lives in [`app::tool`]; concrete
//! extractors live in [`app::tools`].

pub mod adapters;
pub mod app;
pub mod domain;


pub use app::api::{extract_json, load_tool_options, run_tool};
pub use app::config::ToolOptions;
pub use app::tool::{FileOutcome, PerFileTool, RunOutcome, Tool, ToolIdentity, execute};
pub use app::tools::{JsonOptions, JsonTool};
pub use domain::{
    Activity, AppError, Implementation, Item, ItemCommon, Location, MessageHandler, Requirement,
    Schema, ToolConfig, TracingTag,
};
