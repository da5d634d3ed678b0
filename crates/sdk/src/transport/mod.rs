//! Transport layer for the Runn SDK.

pub mod http;

pub use http::HttpTransport;
