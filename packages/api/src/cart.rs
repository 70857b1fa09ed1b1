//! Cart and wishlist bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /cart/items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItemRequest {
    pub product_id: u64,
    pub quantity: u32,
    /// Free-form selections (colour, size, finish). Sent as `null` when absent.
    #[serde(default)]
    pub options: Option<Value>,
}

/// Request body for `POST /cart/sync`: the full local cart, replacing the
/// server copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSyncRequest {
    pub items: Vec<Value>,
}

/// Request body for `PUT /cart/items/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub quantity: u32,
}

/// Request body for `POST /wishlist/toggle`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistToggle {
    pub product_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cart_item_sends_null_options() {
        let item = CartItemRequest {
            product_id: 9,
            quantity: 2,
            options: None,
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"product_id": 9, "quantity": 2, "options": null})
        );
    }
}
