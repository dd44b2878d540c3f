// food-client/tests/oneshot_transport.rs
// In-process transport tests against a minimal /foods router

use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use food_client::{ClientError, Food, FoodApi, FoodCreate, FoodInput, OneshotHttpClient};
use rust_decimal::Decimal;

fn sample_food(id: i64, name: &str) -> Food {
    Food {
        id,
        name: name.to_string(),
        description: format!("{name} with house sauce"),
        price: Decimal::new(2150, 2),
        image: format!("https://img.example.com/{id}.png"),
        available: true,
    }
}

fn sample_input(name: &str) -> FoodInput {
    FoodInput {
        name: name.to_string(),
        description: format!("{name} with house sauce"),
        price: Decimal::new(2150, 2),
        image: "https://img.example.com/new.png".to_string(),
    }
}

#[tokio::test]
async fn list_deserializes_the_menu() {
    let router = Router::new().route(
        "/foods",
        get(|| async { Json(vec![sample_food(1, "Lasagna"), sample_food(2, "Risotto")]) }),
    );
    let api = FoodApi::new(OneshotHttpClient::new(router));

    let foods = api.list().await.unwrap();
    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0].name, "Lasagna");
    assert_eq!(foods[1].id, 2);
}

#[tokio::test]
async fn missing_route_maps_to_not_found() {
    let api = FoodApi::new(OneshotHttpClient::new(Router::new()));

    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn bad_request_maps_to_validation() {
    let router = Router::new().route("/foods", post(|| async { StatusCode::BAD_REQUEST }));
    let api = FoodApi::new(OneshotHttpClient::new(router));

    let err = api
        .create(&FoodCreate::from(sample_input("Feijoada")))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn server_error_maps_to_internal() {
    let router = Router::new().route(
        "/foods",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let api = FoodApi::new(OneshotHttpClient::new(router));

    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Internal(_)));
}

#[tokio::test]
async fn delete_succeeds_without_a_body() {
    let router = Router::new().route("/foods/{id}", delete(|| async { StatusCode::NO_CONTENT }));
    let api = FoodApi::new(OneshotHttpClient::new(router));

    api.delete(9).await.unwrap();
}

#[tokio::test]
async fn create_echoes_the_assigned_id() {
    let router = Router::new().route(
        "/foods",
        post(|Json(payload): Json<FoodCreate>| async move {
            Json(Food {
                id: 42,
                name: payload.name,
                description: payload.description,
                price: payload.price,
                image: payload.image,
                available: payload.available,
            })
        }),
    );
    let api = FoodApi::new(OneshotHttpClient::new(router));

    let created = api
        .create(&FoodCreate::from(sample_input("Moqueca")))
        .await
        .unwrap();
    assert_eq!(created.id, 42);
    assert!(created.available);
}
