pub mod config;
pub mod error;
pub mod items;
pub mod location;
pub mod messages;
pub mod schema;

pub use config::{SupportedConfigKey, ToolConfig};
pub use error::AppError;
pub use items::{Activity, Implementation, Item, ItemCommon, Requirement, TracingTag};
pub use location::Location;
pub use messages::{MessageHandler, Severity};
pub use schema::Schema;
