//! Typed access to the `/foods` resource

use shared::models::{Food, FoodCreate};

use crate::client::HttpClient;
use crate::error::ClientResult;

/// Typed facade over the Food API
#[derive(Debug, Clone)]
pub struct FoodApi<C> {
    client: C,
}

impl<C: HttpClient> FoodApi<C> {
    /// Wrap a transport
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Access the underlying transport
    pub fn client(&self) -> &C {
        &self.client
    }

    /// GET /foods - fetch the whole menu
    pub async fn list(&self) -> ClientResult<Vec<Food>> {
        self.client.get("/foods").await
    }

    /// POST /foods - create a food, returned with its server-assigned id
    pub async fn create(&self, payload: &FoodCreate) -> ClientResult<Food> {
        self.client.post("/foods", payload).await
    }

    /// PUT /foods/{id} - replace a food's fields, echoes the stored entity
    pub async fn update(&self, id: i64, payload: &Food) -> ClientResult<Food> {
        self.client.put(&format!("/foods/{id}"), payload).await
    }

    /// DELETE /foods/{id} - the response body is ignored
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("/foods/{id}")).await
    }
}
