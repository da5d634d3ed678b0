// MCP (Model Context Protocol) server for the Runn resource-planning API.
// Exposes the tool catalog to agent clients over stdio or HTTP.

pub mod args;
pub mod error;
pub mod http;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::DispatchError;
pub use server::McpServer;
