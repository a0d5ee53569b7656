// Core types and functionality for the Northwind MCP layer

pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod query;
pub mod service;

pub use catalog::{ParamDescriptor, ParamType, ToolCatalog, ToolDescriptor};
pub use config::BackendConfig;
pub use error::{ErrorCategory, NorthwindError, NorthwindResult};
pub use gateway::{ApiPayload, GatewayClient};
pub use query::{build_url, ParamValue, ToolArguments};
pub use service::NorthwindService;
