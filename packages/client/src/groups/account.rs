//! Signed-in customer operations: profile, orders, wishlist, cart and
//! saved addresses.

use paintshop::catalog::{
    ADDRESSES_CREATE, ADDRESSES_DELETE, ADDRESSES_LIST, ADDRESSES_SET_DEFAULT, ADDRESSES_UPDATE,
    CART_ADD, CART_CLEAR, CART_LIST, CART_REMOVE, CART_SYNC, CART_UPDATE, ORDERS_CREATE,
    ORDERS_GET, ORDERS_LIST, PROFILE_CHANGE_PASSWORD, PROFILE_UPDATE, WISHLIST_LIST,
    WISHLIST_TOGGLE,
};
use paintshop::ApiError;
use paintshop_api::{CartItemRequest, CartSyncRequest, QuantityUpdate, WishlistToggle};
use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiClient, Payload};

pub struct Profile<'a> {
    client: &'a ApiClient,
}

impl<'a> Profile<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn update<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value, ApiError> {
        self.client
            .call(&PROFILE_UPDATE, &[], Payload::json(data)?)
            .await
    }

    /// Expects `current_password`, `password` and `password_confirmation`.
    pub async fn change_password<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value, ApiError> {
        self.client
            .call(&PROFILE_CHANGE_PASSWORD, &[], Payload::json(data)?)
            .await
    }
}

pub struct Orders<'a> {
    client: &'a ApiClient,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /orders`: checkout.
    pub async fn create<T: Serialize + ?Sized>(&self, order: &T) -> Result<Value, ApiError> {
        self.client
            .call(&ORDERS_CREATE, &[], Payload::json(order)?)
            .await
    }

    /// `GET /orders/{orderNumber}`
    pub async fn get(&self, order_number: &str) -> Result<Value, ApiError> {
        self.client
            .call(&ORDERS_GET, &[("orderNumber", order_number)], Payload::None)
            .await
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.call(&ORDERS_LIST, &[], Payload::None).await
    }
}

pub struct Wishlist<'a> {
    client: &'a ApiClient,
}

impl<'a> Wishlist<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.call(&WISHLIST_LIST, &[], Payload::None).await
    }

    /// Add the product if absent, remove it if present.
    pub async fn toggle(&self, product_id: u64) -> Result<Value, ApiError> {
        self.client
            .call(&WISHLIST_TOGGLE, &[], Payload::json(&WishlistToggle { product_id })?)
            .await
    }
}

pub struct Cart<'a> {
    client: &'a ApiClient,
}

impl<'a> Cart<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.call(&CART_LIST, &[], Payload::None).await
    }

    /// Replace the server cart with `items` (used after signing in with a
    /// guest cart).
    pub async fn sync(&self, items: Vec<Value>) -> Result<Value, ApiError> {
        self.client
            .call(&CART_SYNC, &[], Payload::json(&CartSyncRequest { items })?)
            .await
    }

    pub async fn add(
        &self,
        product_id: u64,
        quantity: u32,
        options: Option<Value>,
    ) -> Result<Value, ApiError> {
        let item = CartItemRequest {
            product_id,
            quantity,
            options,
        };
        self.client
            .call(&CART_ADD, &[], Payload::json(&item)?)
            .await
    }

    pub async fn update(&self, item_id: u64, quantity: u32) -> Result<Value, ApiError> {
        let id = item_id.to_string();
        self.client
            .call(&CART_UPDATE, &[("id", &id)], Payload::json(&QuantityUpdate { quantity })?)
            .await
    }

    pub async fn remove(&self, item_id: u64) -> Result<Value, ApiError> {
        let id = item_id.to_string();
        self.client
            .call(&CART_REMOVE, &[("id", &id)], Payload::None)
            .await
    }

    pub async fn clear(&self) -> Result<Value, ApiError> {
        self.client.call(&CART_CLEAR, &[], Payload::None).await
    }
}

pub struct Addresses<'a> {
    client: &'a ApiClient,
}

impl<'a> Addresses<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.call(&ADDRESSES_LIST, &[], Payload::None).await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, address: &T) -> Result<Value, ApiError> {
        self.client
            .call(&ADDRESSES_CREATE, &[], Payload::json(address)?)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, id: u64, address: &T) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADDRESSES_UPDATE, &[("id", &id)], Payload::json(address)?)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADDRESSES_DELETE, &[("id", &id)], Payload::None)
            .await
    }

    /// `PATCH /addresses/{id}/default`
    pub async fn set_default(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADDRESSES_SET_DEFAULT, &[("id", &id)], Payload::None)
            .await
    }
}
