//! Food Client - HTTP client for the Food API
//!
//! Provides network-based and in-process HTTP calls against the `/foods`
//! resource of the ordering backend.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::FoodApi;
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use client::{HttpClient, NetworkHttpClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::models::{Food, FoodCreate, FoodInput};
