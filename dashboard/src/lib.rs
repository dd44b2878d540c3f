//! Food admin dashboard core
//!
//! Holds the stateful dashboard controller and the capability traits its
//! presentational children consume. The controller owns the food list for
//! the mounted lifetime of the page and mediates every UI action through
//! the Food API.

pub mod controller;
pub mod view;

pub use controller::Dashboard;
pub use view::{AddModalActions, EditModalActions, FoodItemActions, HeaderActions};

// Re-export the client surface for downstream convenience
pub use food_client::{
    ClientConfig, ClientError, ClientResult, FoodApi, HttpClient, NetworkHttpClient,
};
pub use shared::models::{Food, FoodInput};
