//! Dashboard controller
//!
//! Owns the in-memory food list and reconciles it with the backend on every
//! user action. State transitions require `&mut self`, so no two operations
//! ever interleave; overlapping network completions apply in arrival order.

use async_trait::async_trait;
use food_client::{FoodApi, HttpClient};
use shared::models::{Food, FoodCreate, FoodInput};

use crate::view::{AddModalActions, EditModalActions, FoodItemActions, HeaderActions};

/// Stateful coordinator for the food admin page.
pub struct Dashboard<C: HttpClient> {
    api: FoodApi<C>,
    foods: Vec<Food>,
    editing_food: Option<Food>,
    add_modal_open: bool,
    edit_modal_open: bool,
}

impl<C: HttpClient> Dashboard<C> {
    /// Create a controller with an empty list.
    ///
    /// `mount` is the usual entry point; use this when the first fetch should
    /// be deferred.
    pub fn new(client: C) -> Self {
        Self {
            api: FoodApi::new(client),
            foods: Vec::new(),
            editing_food: None,
            add_modal_open: false,
            edit_modal_open: false,
        }
    }

    /// Construct the controller and load the food list once.
    pub async fn mount(client: C) -> Self {
        let mut dashboard = Self::new(client);
        dashboard.load_foods().await;
        dashboard
    }

    /// Replace the local list with whatever the backend currently holds.
    ///
    /// A failed fetch leaves the list as it was (empty on mount) and is
    /// reported only to the diagnostic channel. No retry.
    pub async fn load_foods(&mut self) {
        match self.api.list().await {
            Ok(foods) => self.foods = foods,
            Err(err) => tracing::error!(error = %err, "failed to load foods"),
        }
    }

    /// Create a food from form input and append the stored entity.
    ///
    /// New foods are always created available. On failure the list is left
    /// untouched; the add modal closes itself independent of the outcome.
    pub async fn add_food(&mut self, input: FoodInput) {
        let payload = FoodCreate::from(input);
        match self.api.create(&payload).await {
            Ok(created) => self.foods.push(created),
            Err(err) => tracing::warn!(error = %err, "failed to create food"),
        }
    }

    /// Remove a food locally once the backend call has settled.
    ///
    /// The outcome of the DELETE is not inspected: the entry leaves the
    /// local list even when the backend reports a failure.
    pub async fn delete_food(&mut self, id: i64) {
        let _ = self.api.delete(id).await;
        self.foods.retain(|food| food.id != id);
    }

    /// Select a food for editing and open the edit modal.
    pub fn begin_edit(&mut self, food: Food) {
        self.editing_food = Some(food);
        self.edit_modal_open = true;
    }

    /// Push the edited fields to the backend and reconcile the list.
    ///
    /// The replaced entry is looked up by the id the backend echoes back, so
    /// a backend that renumbers on update leaves the pre-edit entry in place.
    /// A no-op when no food is selected.
    pub async fn update_food(&mut self, input: FoodInput) {
        let Some(editing) = self.editing_food.clone() else {
            return;
        };
        let merged = editing.with_input(input);
        match self.api.update(editing.id, &merged).await {
            Ok(updated) => {
                for food in &mut self.foods {
                    if food.id == updated.id {
                        *food = updated.clone();
                    }
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to update food"),
        }
    }

    /// Flip the add-modal flag; used both to open and to close.
    pub fn toggle_add_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
    }

    /// Flip the edit-modal flag; used both to open and to close.
    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    /// The current list, in fetch/append order.
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// The food currently selected for editing, if any.
    pub fn editing_food(&self) -> Option<&Food> {
        self.editing_food.as_ref()
    }

    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn is_edit_modal_open(&self) -> bool {
        self.edit_modal_open
    }
}

// ============================================================================
// Capability implementations consumed by the presentational children
// ============================================================================

impl<C: HttpClient> HeaderActions for Dashboard<C> {
    fn open_add_modal(&mut self) {
        self.toggle_add_modal();
    }
}

#[async_trait]
impl<C: HttpClient> AddModalActions for Dashboard<C> {
    fn add_modal_open(&self) -> bool {
        self.is_add_modal_open()
    }

    fn close_add_modal(&mut self) {
        self.toggle_add_modal();
    }

    async fn submit_new_food(&mut self, input: FoodInput) {
        self.add_food(input).await;
    }
}

#[async_trait]
impl<C: HttpClient> EditModalActions for Dashboard<C> {
    fn edit_modal_open(&self) -> bool {
        self.is_edit_modal_open()
    }

    fn close_edit_modal(&mut self) {
        self.toggle_edit_modal();
    }

    fn editing_food(&self) -> Option<&Food> {
        Dashboard::editing_food(self)
    }

    async fn submit_food_edit(&mut self, input: FoodInput) {
        self.update_food(input).await;
    }
}

#[async_trait]
impl<C: HttpClient> FoodItemActions for Dashboard<C> {
    async fn delete_food(&mut self, id: i64) {
        Dashboard::delete_food(self, id).await;
    }

    fn edit_food(&mut self, food: Food) {
        self.begin_edit(food);
    }
}
