//! The grouped endpoint catalog.
//!
//! Every backend operation the storefront and admin console call is one
//! [`Endpoint`] entry: a `(group, name)` key, an HTTP [`Method`], a path
//! template with `{param}` slots, and the [`BodyShape`] it expects. The client
//! never hand-writes a URL; it renders an entry from this table.
//!
//! | Group | Operations |
//! |-------|------------|
//! | `auth` | `login`, `adminLogin`, `register`, `logout`, `user` |
//! | `products` | `list`, `get`, `search` |
//! | `categories` | `list`, `get` |
//! | `profile` | `update`, `changePassword` |
//! | `orders` | `create`, `get`, `list` |
//! | `gallery` | `list` |
//! | `reviews` | `list`, `create` |
//! | `wishlist` | `list`, `toggle` |
//! | `cart` | `list`, `sync`, `add`, `update`, `remove`, `clear` |
//! | `addresses` | `list`, `create`, `update`, `delete`, `setDefault` |
//! | `settings` | `getHero` |
//! | `admin.*` | products, images, orders, users, dashboard, gallery, reviews, settings |

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use urlencoding::encode;

use crate::types::{BodyShape, Method};

/// Errors raised while resolving or rendering a catalog entry.
///
/// These are caller mistakes and surface before any request is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown endpoint {0:?}")]
    UnknownEndpoint(String),

    #[error("endpoint {endpoint} requires path parameter {param:?}")]
    MissingParam { endpoint: String, param: String },

    #[error("endpoint {endpoint} has no path parameter {param:?}")]
    UnexpectedParam { endpoint: String, param: String },

    #[error("endpoint {endpoint} expects a {expected} body, not {got}")]
    WrongBody {
        endpoint: String,
        expected: BodyShape,
        got: BodyShape,
    },
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Dotted group name, e.g. `"cart"` or `"admin.products"`.
    pub group: &'static str,
    /// Operation name within the group, e.g. `"setDefault"`.
    pub name: &'static str,
    pub method: Method,
    /// Path relative to the API base, with `{param}` slots.
    pub path: &'static str,
    pub body: BodyShape,
}

impl Endpoint {
    pub const fn new(
        group: &'static str,
        name: &'static str,
        method: Method,
        path: &'static str,
        body: BodyShape,
    ) -> Self {
        Self {
            group,
            name,
            method,
            path,
            body,
        }
    }

    /// `group.name`, the key used by [`find`].
    pub fn key(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }

    /// Names of the `{param}` slots in the path template, in order.
    pub fn params(&self) -> Vec<&'static str> {
        SLOT_RE
            .captures_iter(self.path)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Substitute every slot with its URL-encoded argument.
    ///
    /// Every slot must be supplied exactly once and no argument may name a
    /// slot the template does not have.
    pub fn render(&self, args: &[(&str, &str)]) -> Result<String, CatalogError> {
        let slots = self.params();

        if let Some((extra, _)) = args.iter().find(|(k, _)| !slots.iter().any(|s| s == k)) {
            return Err(CatalogError::UnexpectedParam {
                endpoint: self.key(),
                param: (*extra).to_string(),
            });
        }

        let mut path = self.path.to_string();
        for slot in slots {
            let value = args
                .iter()
                .find(|(k, _)| *k == slot)
                .map(|(_, v)| *v)
                .ok_or_else(|| CatalogError::MissingParam {
                    endpoint: self.key(),
                    param: slot.to_string(),
                })?;
            path = path.replace(&format!("{{{slot}}}"), &encode(value));
        }
        Ok(path)
    }

    /// Fails with [`CatalogError::WrongBody`] unless the entry takes `shape`.
    pub fn expect_body(&self, shape: BodyShape) -> Result<(), CatalogError> {
        if self.body == shape {
            Ok(())
        } else {
            Err(CatalogError::WrongBody {
                endpoint: self.key(),
                expected: self.body,
                got: shape,
            })
        }
    }
}

/// `{name}` path slots.
static SLOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("invalid slot regex")
});

/// Look an entry up by its `group.name` key.
pub fn find(key: &str) -> Result<&'static Endpoint, CatalogError> {
    CATALOG
        .iter()
        .find(|e| e.key() == key)
        .ok_or_else(|| CatalogError::UnknownEndpoint(key.to_string()))
}

/// All entries of one group, in table order.
pub fn group(name: &str) -> Vec<&'static Endpoint> {
    CATALOG.iter().filter(|e| e.group == name).collect()
}

use BodyShape::{Json, Multipart, None as NoBody, Query};
use Method::{Delete, Get, Patch, Post, Put};

// ── auth ──────────────────────────────────────────────────────────────────────
pub const AUTH_LOGIN: Endpoint = Endpoint::new("auth", "login", Post, "/login", Json);
pub const AUTH_ADMIN_LOGIN: Endpoint =
    Endpoint::new("auth", "adminLogin", Post, "/admin/login", Json);
pub const AUTH_REGISTER: Endpoint = Endpoint::new("auth", "register", Post, "/register", Json);
pub const AUTH_LOGOUT: Endpoint = Endpoint::new("auth", "logout", Post, "/logout", Json);
pub const AUTH_USER: Endpoint = Endpoint::new("auth", "user", Get, "/user", Query);

// ── products / categories ─────────────────────────────────────────────────────
pub const PRODUCTS_LIST: Endpoint = Endpoint::new("products", "list", Get, "/products", Query);
pub const PRODUCTS_GET: Endpoint =
    Endpoint::new("products", "get", Get, "/products/{slug}", NoBody);
pub const PRODUCTS_SEARCH: Endpoint =
    Endpoint::new("products", "search", Get, "/products", Query);
pub const CATEGORIES_LIST: Endpoint =
    Endpoint::new("categories", "list", Get, "/categories", NoBody);
pub const CATEGORIES_GET: Endpoint =
    Endpoint::new("categories", "get", Get, "/categories/{slug}", NoBody);

// ── profile ───────────────────────────────────────────────────────────────────
pub const PROFILE_UPDATE: Endpoint = Endpoint::new("profile", "update", Put, "/profile", Json);
pub const PROFILE_CHANGE_PASSWORD: Endpoint =
    Endpoint::new("profile", "changePassword", Put, "/profile/password", Json);

// ── admin.products / admin.images ─────────────────────────────────────────────
pub const ADMIN_PRODUCTS_LIST: Endpoint =
    Endpoint::new("admin.products", "list", Get, "/admin/products", Query);
pub const ADMIN_PRODUCTS_GET: Endpoint =
    Endpoint::new("admin.products", "get", Get, "/admin/products/{id}", NoBody);
pub const ADMIN_PRODUCTS_CREATE: Endpoint =
    Endpoint::new("admin.products", "create", Post, "/admin/products", Json);
pub const ADMIN_PRODUCTS_UPDATE: Endpoint =
    Endpoint::new("admin.products", "update", Put, "/admin/products/{id}", Json);
pub const ADMIN_PRODUCTS_DELETE: Endpoint =
    Endpoint::new("admin.products", "delete", Delete, "/admin/products/{id}", NoBody);
pub const ADMIN_IMAGES_UPLOAD: Endpoint =
    Endpoint::new("admin.images", "upload", Post, "/admin/images/upload", Multipart);
pub const ADMIN_IMAGES_DELETE: Endpoint =
    Endpoint::new("admin.images", "delete", Delete, "/admin/images/{id}", NoBody);
pub const ADMIN_IMAGES_SET_PRIMARY: Endpoint =
    Endpoint::new("admin.images", "setPrimary", Post, "/admin/images/{id}/primary", Json);

// ── admin.orders / admin.users ────────────────────────────────────────────────
pub const ADMIN_ORDERS_LIST: Endpoint =
    Endpoint::new("admin.orders", "list", Get, "/admin/orders", Query);
pub const ADMIN_ORDERS_GET: Endpoint =
    Endpoint::new("admin.orders", "get", Get, "/admin/orders/{id}", NoBody);
pub const ADMIN_ORDERS_UPDATE_STATUS: Endpoint =
    Endpoint::new("admin.orders", "updateStatus", Put, "/admin/orders/{id}", Json);
pub const ADMIN_USERS_LIST: Endpoint =
    Endpoint::new("admin.users", "list", Get, "/admin/users", Query);
pub const ADMIN_USERS_GET: Endpoint =
    Endpoint::new("admin.users", "get", Get, "/admin/users/{id}", NoBody);
pub const ADMIN_USERS_CREATE: Endpoint =
    Endpoint::new("admin.users", "create", Post, "/admin/users", Json);

// ── admin.dashboard ───────────────────────────────────────────────────────────
pub const ADMIN_DASHBOARD_STATS: Endpoint =
    Endpoint::new("admin.dashboard", "stats", Get, "/admin/dashboard/stats", NoBody);
pub const ADMIN_DASHBOARD_SALES_CHART: Endpoint = Endpoint::new(
    "admin.dashboard",
    "salesChart",
    Get,
    "/admin/dashboard/sales-chart",
    NoBody,
);
pub const ADMIN_DASHBOARD_ORDER_STATUS_CHART: Endpoint = Endpoint::new(
    "admin.dashboard",
    "orderStatusChart",
    Get,
    "/admin/dashboard/order-status-chart",
    NoBody,
);
pub const ADMIN_DASHBOARD_TOP_PRODUCTS: Endpoint = Endpoint::new(
    "admin.dashboard",
    "topProducts",
    Get,
    "/admin/dashboard/top-products",
    NoBody,
);

// ── admin.gallery / admin.reviews ─────────────────────────────────────────────
pub const ADMIN_GALLERY_LIST: Endpoint =
    Endpoint::new("admin.gallery", "list", Get, "/admin/gallery", NoBody);
pub const ADMIN_GALLERY_UPLOAD: Endpoint =
    Endpoint::new("admin.gallery", "upload", Post, "/admin/gallery", Multipart);
pub const ADMIN_GALLERY_DELETE: Endpoint =
    Endpoint::new("admin.gallery", "delete", Delete, "/admin/gallery/{id}", NoBody);
pub const ADMIN_GALLERY_TOGGLE: Endpoint =
    Endpoint::new("admin.gallery", "toggle", Patch, "/admin/gallery/{id}/toggle", NoBody);
pub const ADMIN_REVIEWS_LIST: Endpoint =
    Endpoint::new("admin.reviews", "list", Get, "/admin/reviews", Query);
pub const ADMIN_REVIEWS_UPDATE_STATUS: Endpoint = Endpoint::new(
    "admin.reviews",
    "updateStatus",
    Patch,
    "/admin/reviews/{id}/status",
    Json,
);
pub const ADMIN_REVIEWS_DELETE: Endpoint =
    Endpoint::new("admin.reviews", "delete", Delete, "/admin/reviews/{id}", NoBody);

// ── admin.settings / settings ─────────────────────────────────────────────────
pub const ADMIN_SETTINGS_GET_HERO: Endpoint =
    Endpoint::new("admin.settings", "getHero", Get, "/admin/settings/hero", NoBody);
pub const ADMIN_SETTINGS_UPDATE_HERO: Endpoint =
    Endpoint::new("admin.settings", "updateHero", Post, "/admin/settings/hero", Json);
pub const ADMIN_SETTINGS_UPLOAD_HERO_IMAGE: Endpoint = Endpoint::new(
    "admin.settings",
    "uploadHeroImage",
    Post,
    "/admin/settings/hero/image",
    Multipart,
);
pub const ADMIN_SETTINGS_DELETE_HERO_IMAGE: Endpoint = Endpoint::new(
    "admin.settings",
    "deleteHeroImage",
    Delete,
    "/admin/settings/hero/image",
    Json,
);
pub const ADMIN_SETTINGS_UPLOAD_HERO_VIDEO: Endpoint = Endpoint::new(
    "admin.settings",
    "uploadHeroVideo",
    Post,
    "/admin/settings/hero/video",
    Multipart,
);
pub const ADMIN_SETTINGS_DELETE_HERO_VIDEO: Endpoint = Endpoint::new(
    "admin.settings",
    "deleteHeroVideo",
    Delete,
    "/admin/settings/hero/video",
    Json,
);
pub const SETTINGS_GET_HERO: Endpoint =
    Endpoint::new("settings", "getHero", Get, "/settings/hero", NoBody);

// ── orders / gallery / reviews ────────────────────────────────────────────────
pub const ORDERS_CREATE: Endpoint = Endpoint::new("orders", "create", Post, "/orders", Json);
pub const ORDERS_GET: Endpoint =
    Endpoint::new("orders", "get", Get, "/orders/{orderNumber}", NoBody);
pub const ORDERS_LIST: Endpoint = Endpoint::new("orders", "list", Get, "/orders", NoBody);
pub const GALLERY_LIST: Endpoint = Endpoint::new("gallery", "list", Get, "/gallery", NoBody);
pub const REVIEWS_LIST: Endpoint =
    Endpoint::new("reviews", "list", Get, "/products/{productId}/reviews", NoBody);
pub const REVIEWS_CREATE: Endpoint = Endpoint::new("reviews", "create", Post, "/reviews", Json);

// ── wishlist / cart ───────────────────────────────────────────────────────────
pub const WISHLIST_LIST: Endpoint = Endpoint::new("wishlist", "list", Get, "/wishlist", NoBody);
pub const WISHLIST_TOGGLE: Endpoint =
    Endpoint::new("wishlist", "toggle", Post, "/wishlist/toggle", Json);
pub const CART_LIST: Endpoint = Endpoint::new("cart", "list", Get, "/cart", NoBody);
pub const CART_SYNC: Endpoint = Endpoint::new("cart", "sync", Post, "/cart/sync", Json);
pub const CART_ADD: Endpoint = Endpoint::new("cart", "add", Post, "/cart/items", Json);
pub const CART_UPDATE: Endpoint = Endpoint::new("cart", "update", Put, "/cart/items/{id}", Json);
pub const CART_REMOVE: Endpoint =
    Endpoint::new("cart", "remove", Delete, "/cart/items/{id}", NoBody);
pub const CART_CLEAR: Endpoint = Endpoint::new("cart", "clear", Delete, "/cart/clear", NoBody);

// ── addresses ─────────────────────────────────────────────────────────────────
pub const ADDRESSES_LIST: Endpoint =
    Endpoint::new("addresses", "list", Get, "/addresses", NoBody);
pub const ADDRESSES_CREATE: Endpoint =
    Endpoint::new("addresses", "create", Post, "/addresses", Json);
pub const ADDRESSES_UPDATE: Endpoint =
    Endpoint::new("addresses", "update", Put, "/addresses/{id}", Json);
pub const ADDRESSES_DELETE: Endpoint =
    Endpoint::new("addresses", "delete", Delete, "/addresses/{id}", NoBody);
pub const ADDRESSES_SET_DEFAULT: Endpoint =
    Endpoint::new("addresses", "setDefault", Patch, "/addresses/{id}/default", NoBody);

/// The whole table, grouped as in the module docs.
pub static CATALOG: &[Endpoint] = &[
    AUTH_LOGIN,
    AUTH_ADMIN_LOGIN,
    AUTH_REGISTER,
    AUTH_LOGOUT,
    AUTH_USER,
    PRODUCTS_LIST,
    PRODUCTS_GET,
    PRODUCTS_SEARCH,
    CATEGORIES_LIST,
    CATEGORIES_GET,
    PROFILE_UPDATE,
    PROFILE_CHANGE_PASSWORD,
    ADMIN_PRODUCTS_LIST,
    ADMIN_PRODUCTS_GET,
    ADMIN_PRODUCTS_CREATE,
    ADMIN_PRODUCTS_UPDATE,
    ADMIN_PRODUCTS_DELETE,
    ADMIN_IMAGES_UPLOAD,
    ADMIN_IMAGES_DELETE,
    ADMIN_IMAGES_SET_PRIMARY,
    ADMIN_ORDERS_LIST,
    ADMIN_ORDERS_GET,
    ADMIN_ORDERS_UPDATE_STATUS,
    ADMIN_USERS_LIST,
    ADMIN_USERS_GET,
    ADMIN_USERS_CREATE,
    ADMIN_DASHBOARD_STATS,
    ADMIN_DASHBOARD_SALES_CHART,
    ADMIN_DASHBOARD_ORDER_STATUS_CHART,
    ADMIN_DASHBOARD_TOP_PRODUCTS,
    ADMIN_GALLERY_LIST,
    ADMIN_GALLERY_UPLOAD,
    ADMIN_GALLERY_DELETE,
    ADMIN_GALLERY_TOGGLE,
    ADMIN_REVIEWS_LIST,
    ADMIN_REVIEWS_UPDATE_STATUS,
    ADMIN_REVIEWS_DELETE,
    ADMIN_SETTINGS_GET_HERO,
    ADMIN_SETTINGS_UPDATE_HERO,
    ADMIN_SETTINGS_UPLOAD_HERO_IMAGE,
    ADMIN_SETTINGS_DELETE_HERO_IMAGE,
    ADMIN_SETTINGS_UPLOAD_HERO_VIDEO,
    ADMIN_SETTINGS_DELETE_HERO_VIDEO,
    SETTINGS_GET_HERO,
    ORDERS_CREATE,
    ORDERS_GET,
    ORDERS_LIST,
    GALLERY_LIST,
    REVIEWS_LIST,
    REVIEWS_CREATE,
    WISHLIST_LIST,
    WISHLIST_TOGGLE,
    CART_LIST,
    CART_SYNC,
    CART_ADD,
    CART_UPDATE,
    CART_REMOVE,
    CART_CLEAR,
    ADDRESSES_LIST,
    ADDRESSES_CREATE,
    ADDRESSES_UPDATE,
    ADDRESSES_DELETE,
    ADDRESSES_SET_DEFAULT,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for e in CATALOG {
            assert!(seen.insert(e.key()), "duplicate catalog key {}", e.key());
        }
    }

    #[test]
    fn every_entry_renders_with_its_own_slots() {
        for e in CATALOG {
            let slots = e.params();
            let args: Vec<(&str, &str)> = slots.iter().map(|s| (*s, "42")).collect();
            let path = e.render(&args).unwrap();
            assert!(path.starts_with('/'), "{} must be rooted", e.key());
            assert!(
                !path.contains('{') && !path.contains('}'),
                "{} left a slot unfilled: {path}",
                e.key()
            );
        }
    }

    #[test]
    fn get_and_delete_never_take_multipart() {
        for e in CATALOG {
            if matches!(e.method, Method::Get) {
                assert!(matches!(e.body, BodyShape::None | BodyShape::Query), "{}", e.key());
            }
            assert!(
                e.body != BodyShape::Multipart || e.method == Method::Post,
                "{} uploads must POST",
                e.key()
            );
        }
    }

    #[test]
    fn render_encodes_arguments() {
        let path = ORDERS_GET.render(&[("orderNumber", "ORD 1/2")]).unwrap();
        assert_eq!(path, "/orders/ORD%201%2F2");
    }

    #[test]
    fn render_rejects_missing_slot() {
        assert_eq!(
            CART_UPDATE.render(&[]),
            Err(CatalogError::MissingParam {
                endpoint: "cart.update".into(),
                param: "id".into(),
            })
        );
    }

    #[test]
    fn render_rejects_extra_argument() {
        assert_eq!(
            CART_LIST.render(&[("id", "1")]),
            Err(CatalogError::UnexpectedParam {
                endpoint: "cart.list".into(),
                param: "id".into(),
            })
        );
    }

    #[test]
    fn find_by_key() {
        assert_eq!(find("addresses.setDefault").unwrap().method, Method::Patch);
        assert!(matches!(
            find("addresses.nope"),
            Err(CatalogError::UnknownEndpoint(_))
        ));
    }

    #[test]
    fn group_lists_in_table_order() {
        let names: Vec<&str> = group("cart").iter().map(|e| e.name).collect();
        assert_eq!(names, ["list", "sync", "add", "update", "remove", "clear"]);
    }

    #[test]
    fn expect_body_checks_shape() {
        assert!(ADMIN_GALLERY_UPLOAD.expect_body(BodyShape::Multipart).is_ok());
        assert!(ADMIN_GALLERY_UPLOAD.expect_body(BodyShape::Json).is_err());
    }
}
