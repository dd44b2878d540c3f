//! Shared types for the food admin dashboard
//!
//! Domain models used by both the Food API client and the
//! dashboard controller.

pub mod models;

// Re-exports
pub use models::{Food, FoodCreate, FoodInput};
pub use serde::{Deserialize, Serialize};
