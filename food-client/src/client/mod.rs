//! Client module - transport implementations.
//!
//! Provides the `HttpClient` trait with a network implementation and an
//! optional in-process implementation for embedded routers.

mod http;
#[cfg(feature = "in-process")]
mod oneshot;

// Re-export main types
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;
