// dashboard/examples/admin_session.rs
// Drives a mount / add / edit / delete session against a running Food API.

use dashboard::{Dashboard, FoodInput};
use food_client::{ClientConfig, NetworkHttpClient};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("FOOD_API_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());

    let client = NetworkHttpClient::new(&ClientConfig::new(&base_url))?;
    let mut dashboard = Dashboard::mount(client).await;
    tracing::info!(count = dashboard.foods().len(), "menu loaded");

    dashboard
        .add_food(FoodInput {
            name: "Ao Molho".to_string(),
            description: "Macarrão com molho especial".to_string(),
            price: Decimal::new(1990, 2),
            image: "https://storage.example.com/ao_molho.png".to_string(),
        })
        .await;

    if let Some(created) = dashboard.foods().last().cloned() {
        tracing::info!(id = created.id, name = %created.name, "food created");

        dashboard.begin_edit(created.clone());
        dashboard
            .update_food(FoodInput {
                name: format!("{} (editado)", created.name),
                description: created.description.clone(),
                price: created.price,
                image: created.image.clone(),
            })
            .await;

        dashboard.delete_food(created.id).await;
    }

    tracing::info!(count = dashboard.foods().len(), "session finished");
    Ok(())
}
