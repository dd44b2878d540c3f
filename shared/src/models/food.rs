//! Food Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Food entity
///
/// A menu item as returned by the backend. `id` is assigned server-side and
/// never changes once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    /// Newly created foods are available; this surface never unsets it
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

impl Food {
    /// Merge form input into this food, keeping `id` and `available`.
    ///
    /// Input fields take precedence over the current values.
    pub fn with_input(&self, input: FoodInput) -> Food {
        Food {
            id: self.id,
            name: input.name,
            description: input.description,
            price: input.price,
            image: input.image,
            available: self.available,
        }
    }
}

/// Form-collectible food fields
///
/// Everything except the server-assigned `id` and the `available` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodInput {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

/// Create food payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCreate {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub available: bool,
}

impl From<FoodInput> for FoodCreate {
    fn from(input: FoodInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            image: input.image,
            available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> FoodInput {
        FoodInput {
            name: "Veggie Burger".to_string(),
            description: "Grilled patty with fresh greens".to_string(),
            price: Decimal::new(1890, 2),
            image: "https://img.example.com/veggie.png".to_string(),
        }
    }

    #[test]
    fn create_payload_is_always_available() {
        let payload = FoodCreate::from(sample_input());
        assert!(payload.available);
    }

    #[test]
    fn with_input_keeps_id_and_availability() {
        let food = Food {
            id: 7,
            name: "Old name".to_string(),
            description: "Old description".to_string(),
            price: Decimal::new(900, 2),
            image: "https://img.example.com/old.png".to_string(),
            available: false,
        };

        let merged = food.with_input(sample_input());

        assert_eq!(merged.id, 7);
        assert!(!merged.available);
        assert_eq!(merged.name, "Veggie Burger");
        assert_eq!(merged.price, Decimal::new(1890, 2));
    }

    #[test]
    fn missing_available_defaults_to_true() {
        let food: Food = serde_json::from_str(
            r#"{"id":1,"name":"Soup","description":"Of the day","price":7.5,"image":"https://img.example.com/soup.png"}"#,
        )
        .unwrap();
        assert!(food.available);
    }

    #[test]
    fn price_crosses_the_wire_as_a_number() {
        let payload = FoodCreate::from(sample_input());
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["price"].is_number());
        assert_eq!(value["available"], serde_json::Value::Bool(true));
    }
}
