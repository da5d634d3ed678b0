//! # Runn SDK
//!
//! Client for the Runn resource-planning API: authenticated requests,
//! transparent cursor pagination, and thin typed surfaces over the
//! upstream resources (projects, people, assignments, actuals, roles,
//! skills, teams, rate cards).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use runn_sdk::{RunnClient, RunnResult};
//!
//! #[tokio::main]
//! async fn main() -> RunnResult<()> {
//!     // Reads RUNN_API_KEY (and optional RUNN_* overrides) from the
//!     // environment.
//!     let client = RunnClient::from_env()?;
//!
//!     // List projects across every page.
//!     let projects = client.projects().list().await?;
//!     println!("Found {} projects", projects.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! Upstream records are kept as untyped `serde_json::Value`; only the
//! fields the filtering layer reads are ever interpreted.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod transport;

// Re-export main client
pub use client::RunnClient;
pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
pub use error::{RunnError, RunnResult};
pub use pagination::{ListBody, Page};
