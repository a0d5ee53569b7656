// MCP (Model Context Protocol) server exposing the Northwind catalog
// to agent clients over stdio

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
