//! Request and response body types for the Paint Shop backend REST API.
//!
//! Most responses are handed back to callers as raw JSON; only the bodies
//! the client itself builds or inspects are typed here.
//!
//! # Bodies covered
//!
//! | Endpoint | Type |
//! |----------|------|
//! | `POST /login`, `POST /admin/login` | [`LoginRequest`] → [`AuthResponse`] |
//! | `POST /register` | [`RegisterRequest`] → [`AuthResponse`] |
//! | `GET /products`, `GET /admin/*` lists | [`ListQuery`] |
//! | `POST /cart/items` | [`CartItemRequest`] |
//! | `POST /cart/sync` | [`CartSyncRequest`] |
//! | `PUT /cart/items/{id}` | [`QuantityUpdate`] |
//! | `POST /wishlist/toggle` | [`WishlistToggle`] |
//! | `PUT /admin/orders/{id}`, `PATCH /admin/reviews/{id}/status` | [`StatusUpdate`] |
//! | `DELETE /admin/settings/hero/{image,video}` | [`MediaPath`] |
//! | any error response | [`ErrorBody`] |

pub mod admin;
pub mod auth;
pub mod cart;
pub mod error;
pub mod query;

pub use admin::{MediaPath, StatusUpdate};
pub use auth::{is_truthy, AuthResponse, LoginRequest, RegisterRequest};
pub use cart::{CartItemRequest, CartSyncRequest, QuantityUpdate, WishlistToggle};
pub use error::ErrorBody;
pub use query::ListQuery;
