pub mod api;
pub mod cli;
pub mod config;
pub mod inputs;
pub mod tool;
pub mod tools;
