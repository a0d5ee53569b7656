pub mod catalog;
mod registry;

pub use catalog::{catalog_registry, CatalogTool};
pub use registry::{json_schema_open_object, Tool, ToolRegistry};
