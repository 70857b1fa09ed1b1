//! Public storefront reads: products, categories, reviews, gallery and the
//! hero banner settings.

use paintshop::catalog::{
    CATEGORIES_GET, CATEGORIES_LIST, GALLERY_LIST, PRODUCTS_GET, PRODUCTS_LIST, PRODUCTS_SEARCH,
    REVIEWS_CREATE, REVIEWS_LIST, SETTINGS_GET_HERO,
};
use paintshop::ApiError;
use paintshop_api::ListQuery;
use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiClient, Payload};

pub struct Products<'a> {
    client: &'a ApiClient,
}

impl<'a> Products<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /products` with optional filters.
    pub async fn list(&self, query: &ListQuery) -> Result<Value, ApiError> {
        self.client
            .call(&PRODUCTS_LIST, &[], Payload::query(&query.to_pairs()))
            .await
    }

    /// `GET /products/{slug}`
    pub async fn get(&self, slug: &str) -> Result<Value, ApiError> {
        self.client
            .call(&PRODUCTS_GET, &[("slug", slug)], Payload::None)
            .await
    }

    /// `GET /products?search=<term>`
    pub async fn search(&self, term: &str) -> Result<Value, ApiError> {
        self.client
            .call(
                &PRODUCTS_SEARCH,
                &[],
                Payload::query(&ListQuery::search(term).to_pairs()),
            )
            .await
    }
}

pub struct Categories<'a> {
    client: &'a ApiClient,
}

impl<'a> Categories<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.call(&CATEGORIES_LIST, &[], Payload::None).await
    }

    pub async fn get(&self, slug: &str) -> Result<Value, ApiError> {
        self.client
            .call(&CATEGORIES_GET, &[("slug", slug)], Payload::None)
            .await
    }
}

pub struct Reviews<'a> {
    client: &'a ApiClient,
}

impl<'a> Reviews<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /products/{productId}/reviews`
    pub async fn list(&self, product_id: u64) -> Result<Value, ApiError> {
        let id = product_id.to_string();
        self.client
            .call(&REVIEWS_LIST, &[("productId", &id)], Payload::None)
            .await
    }

    /// `POST /reviews`. The backend expects `product_id`, `rating` and
    /// `comment`.
    pub async fn create<T: Serialize + ?Sized>(&self, review: &T) -> Result<Value, ApiError> {
        self.client
            .call(&REVIEWS_CREATE, &[], Payload::json(review)?)
            .await
    }
}

pub struct Gallery<'a> {
    client: &'a ApiClient,
}

impl<'a> Gallery<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.call(&GALLERY_LIST, &[], Payload::None).await
    }
}

pub struct Settings<'a> {
    client: &'a ApiClient,
}

impl<'a> Settings<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Public hero banner settings for the landing page.
    pub async fn get_hero(&self) -> Result<Value, ApiError> {
        self.client.call(&SETTINGS_GET_HERO, &[], Payload::None).await
    }
}
