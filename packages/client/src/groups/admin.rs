//! Admin console operations.
//!
//! Every call here needs a token issued by `POST /admin/login`. A client
//! built with [`Context::Admin`](paintshop::Context::Admin) treats `403` as
//! the end of the admin session; with the customer context it is an ordinary
//! failure.

use paintshop::catalog::{
    ADMIN_DASHBOARD_ORDER_STATUS_CHART, ADMIN_DASHBOARD_SALES_CHART, ADMIN_DASHBOARD_STATS,
    ADMIN_DASHBOARD_TOP_PRODUCTS, ADMIN_GALLERY_DELETE, ADMIN_GALLERY_LIST, ADMIN_GALLERY_TOGGLE,
    ADMIN_GALLERY_UPLOAD, ADMIN_IMAGES_DELETE, ADMIN_IMAGES_SET_PRIMARY, ADMIN_IMAGES_UPLOAD,
    ADMIN_ORDERS_GET, ADMIN_ORDERS_LIST, ADMIN_ORDERS_UPDATE_STATUS, ADMIN_PRODUCTS_CREATE,
    ADMIN_PRODUCTS_DELETE, ADMIN_PRODUCTS_GET, ADMIN_PRODUCTS_LIST, ADMIN_PRODUCTS_UPDATE,
    ADMIN_REVIEWS_DELETE, ADMIN_REVIEWS_LIST, ADMIN_REVIEWS_UPDATE_STATUS,
    ADMIN_SETTINGS_DELETE_HERO_IMAGE, ADMIN_SETTINGS_DELETE_HERO_VIDEO, ADMIN_SETTINGS_GET_HERO,
    ADMIN_SETTINGS_UPDATE_HERO, ADMIN_SETTINGS_UPLOAD_HERO_IMAGE,
    ADMIN_SETTINGS_UPLOAD_HERO_VIDEO, ADMIN_USERS_CREATE, ADMIN_USERS_GET, ADMIN_USERS_LIST,
};
use paintshop::ApiError;
use paintshop_api::{ListQuery, MediaPath, StatusUpdate};
use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiClient, Payload};
use crate::upload::{FilePart, Upload};

/// Entry point for the `admin.*` groups.
pub struct Admin<'a> {
    client: &'a ApiClient,
}

impl<'a> Admin<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn products(&self) -> AdminProducts<'a> {
        AdminProducts { client: self.client }
    }

    pub fn images(&self) -> AdminImages<'a> {
        AdminImages { client: self.client }
    }

    pub fn orders(&self) -> AdminOrders<'a> {
        AdminOrders { client: self.client }
    }

    pub fn users(&self) -> AdminUsers<'a> {
        AdminUsers { client: self.client }
    }

    pub fn dashboard(&self) -> Dashboard<'a> {
        Dashboard { client: self.client }
    }

    pub fn gallery(&self) -> AdminGallery<'a> {
        AdminGallery { client: self.client }
    }

    pub fn reviews(&self) -> AdminReviews<'a> {
        AdminReviews { client: self.client }
    }

    pub fn settings(&self) -> AdminSettings<'a> {
        AdminSettings { client: self.client }
    }
}

// ── products / images ────────────────────────────────────────────────────────

pub struct AdminProducts<'a> {
    client: &'a ApiClient,
}

impl AdminProducts<'_> {
    pub async fn list(&self, query: &ListQuery) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_PRODUCTS_LIST, &[], Payload::query(&query.to_pairs()))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADMIN_PRODUCTS_GET, &[("id", &id)], Payload::None)
            .await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, product: &T) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_PRODUCTS_CREATE, &[], Payload::json(product)?)
            .await
    }

    pub async fn update<T: Serialize + ?Sized>(&self, id: u64, product: &T) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADMIN_PRODUCTS_UPDATE, &[("id", &id)], Payload::json(product)?)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADMIN_PRODUCTS_DELETE, &[("id", &id)], Payload::None)
            .await
    }
}

pub struct AdminImages<'a> {
    client: &'a ApiClient,
}

impl AdminImages<'_> {
    /// Multipart `POST /admin/images/upload` with fields `product_id`,
    /// `image` and `is_primary`.
    pub async fn upload(
        &self,
        product_id: u64,
        image: FilePart,
        is_primary: bool,
    ) -> Result<Value, ApiError> {
        let form = Upload::product_image(product_id, image, is_primary);
        self.client
            .call(&ADMIN_IMAGES_UPLOAD, &[], Payload::Multipart(form))
            .await
    }

    pub async fn delete(&self, image_id: u64) -> Result<Value, ApiError> {
        let id = image_id.to_string();
        self.client
            .call(&ADMIN_IMAGES_DELETE, &[("id", &id)], Payload::None)
            .await
    }

    pub async fn set_primary(&self, image_id: u64) -> Result<Value, ApiError> {
        let id = image_id.to_string();
        self.client
            .call(&ADMIN_IMAGES_SET_PRIMARY, &[("id", &id)], Payload::None)
            .await
    }
}

// ── orders / users ───────────────────────────────────────────────────────────

pub struct AdminOrders<'a> {
    client: &'a ApiClient,
}

impl AdminOrders<'_> {
    pub async fn list(&self, query: &ListQuery) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_ORDERS_LIST, &[], Payload::query(&query.to_pairs()))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADMIN_ORDERS_GET, &[("id", &id)], Payload::None)
            .await
    }

    pub async fn update_status(&self, id: u64, status: &str) -> Result<Value, ApiError> {
        let id = id.to_string();
        let body = StatusUpdate {
            status: status.to_string(),
        };
        self.client
            .call(&ADMIN_ORDERS_UPDATE_STATUS, &[("id", &id)], Payload::json(&body)?)
            .await
    }
}

pub struct AdminUsers<'a> {
    client: &'a ApiClient,
}

impl AdminUsers<'_> {
    pub async fn list(&self, query: &ListQuery) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_USERS_LIST, &[], Payload::query(&query.to_pairs()))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADMIN_USERS_GET, &[("id", &id)], Payload::None)
            .await
    }

    pub async fn create<T: Serialize + ?Sized>(&self, user: &T) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_USERS_CREATE, &[], Payload::json(user)?)
            .await
    }
}

// ── dashboard ────────────────────────────────────────────────────────────────

pub struct Dashboard<'a> {
    client: &'a ApiClient,
}

impl Dashboard<'_> {
    pub async fn stats(&self) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_DASHBOARD_STATS, &[], Payload::None)
            .await
    }

    pub async fn sales_chart(&self) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_DASHBOARD_SALES_CHART, &[], Payload::None)
            .await
    }

    pub async fn order_status_chart(&self) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_DASHBOARD_ORDER_STATUS_CHART, &[], Payload::None)
            .await
    }

    pub async fn top_products(&self) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_DASHBOARD_TOP_PRODUCTS, &[], Payload::None)
            .await
    }
}

// ── gallery / reviews ────────────────────────────────────────────────────────

pub struct AdminGallery<'a> {
    client: &'a ApiClient,
}

impl AdminGallery<'_> {
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_GALLERY_LIST, &[], Payload::None)
            .await
    }

    /// Multipart `POST /admin/gallery`. Field names are up to the caller.
    pub async fn upload(&self, form: Upload) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_GALLERY_UPLOAD, &[], Payload::Multipart(form))
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADMIN_GALLERY_DELETE, &[("id", &id)], Payload::None)
            .await
    }

    /// Flip the item's visibility on the public gallery.
    pub async fn toggle(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADMIN_GALLERY_TOGGLE, &[("id", &id)], Payload::None)
            .await
    }
}

pub struct AdminReviews<'a> {
    client: &'a ApiClient,
}

impl AdminReviews<'_> {
    pub async fn list(&self, query: &ListQuery) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_REVIEWS_LIST, &[], Payload::query(&query.to_pairs()))
            .await
    }

    pub async fn update_status(&self, id: u64, status: &str) -> Result<Value, ApiError> {
        let id = id.to_string();
        let body = StatusUpdate {
            status: status.to_string(),
        };
        self.client
            .call(&ADMIN_REVIEWS_UPDATE_STATUS, &[("id", &id)], Payload::json(&body)?)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Value, ApiError> {
        let id = id.to_string();
        self.client
            .call(&ADMIN_REVIEWS_DELETE, &[("id", &id)], Payload::None)
            .await
    }
}

// ── settings ─────────────────────────────────────────────────────────────────

pub struct AdminSettings<'a> {
    client: &'a ApiClient,
}

impl AdminSettings<'_> {
    pub async fn get_hero(&self) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_SETTINGS_GET_HERO, &[], Payload::None)
            .await
    }

    pub async fn update_hero<T: Serialize + ?Sized>(&self, settings: &T) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_SETTINGS_UPDATE_HERO, &[], Payload::json(settings)?)
            .await
    }

    pub async fn upload_hero_image(&self, form: Upload) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_SETTINGS_UPLOAD_HERO_IMAGE, &[], Payload::Multipart(form))
            .await
    }

    /// `DELETE /admin/settings/hero/image` with body `{"path": ...}`.
    pub async fn delete_hero_image(&self, path: &str) -> Result<Value, ApiError> {
        self.delete_media(&ADMIN_SETTINGS_DELETE_HERO_IMAGE, path).await
    }

    pub async fn upload_hero_video(&self, form: Upload) -> Result<Value, ApiError> {
        self.client
            .call(&ADMIN_SETTINGS_UPLOAD_HERO_VIDEO, &[], Payload::Multipart(form))
            .await
    }

    pub async fn delete_hero_video(&self, path: &str) -> Result<Value, ApiError> {
        self.delete_media(&ADMIN_SETTINGS_DELETE_HERO_VIDEO, path).await
    }

    async fn delete_media(
        &self,
        endpoint: &paintshop::Endpoint,
        path: &str,
    ) -> Result<Value, ApiError> {
        let body = MediaPath {
            path: path.to_string(),
        };
        self.client.call(endpoint, &[], Payload::json(&body)?).await
    }
}
