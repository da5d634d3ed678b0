// Core filtering and aggregation for the Runn MCP server.
//
// Everything here operates on already-fetched upstream records held in
// memory as `serde_json::Value`; no networking, no persistence.

pub mod aggregate;
pub mod filter;
pub mod projection;
pub mod report;
pub mod types;

pub use types::*;
