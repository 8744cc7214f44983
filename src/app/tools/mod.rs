//! Concrete lobster tools built on the common framework.

pub mod json;

pub use json::{JsonOptions, JsonTool};
