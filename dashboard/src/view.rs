//! Contracts consumed by the presentational children
//!
//! Each child of the dashboard page depends on one narrow capability trait
//! rather than on the controller type itself. The controller implements all
//! of them; children only read `Food` values and invoke these hooks.

use async_trait::async_trait;
use shared::models::{Food, FoodInput};

/// Hooks for the page header.
pub trait HeaderActions {
    /// Invoked on user intent to add a new food.
    fn open_add_modal(&mut self);
}

/// Hooks for the add-food modal.
#[async_trait]
pub trait AddModalActions {
    fn add_modal_open(&self) -> bool;

    fn close_add_modal(&mut self);

    /// Submit the collected form input. Closing the modal is the modal's own
    /// concern, independent of whether the creation succeeded.
    async fn submit_new_food(&mut self, input: FoodInput);
}

/// Hooks for the edit-food modal.
#[async_trait]
pub trait EditModalActions {
    fn edit_modal_open(&self) -> bool;

    fn close_edit_modal(&mut self);

    /// The food currently being edited, if any. The modal must not submit
    /// while this is `None`.
    fn editing_food(&self) -> Option<&Food>;

    async fn submit_food_edit(&mut self, input: FoodInput);
}

/// Hooks for a single row in the food list.
#[async_trait]
pub trait FoodItemActions {
    async fn delete_food(&mut self, id: i64);

    fn edit_food(&mut self, food: Food);
}
