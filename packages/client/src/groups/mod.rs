//! Grouped endpoint accessors.
//!
//! Each group is a thin borrow of the [`ApiClient`](crate::ApiClient) whose
//! methods pick a catalog entry, fill its path slots and shape its body.
//! Nothing here talks HTTP directly.
//!
//! ```text
//! groups/
//! ├── auth.rs        - login, admin login, register, logout, current user
//! ├── storefront.rs  - products, categories, reviews, gallery, public settings
//! ├── account.rs     - profile, orders, wishlist, cart, addresses
//! └── admin.rs       - admin products, images, orders, users, dashboard,
//!                      gallery, reviews, settings
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod storefront;

pub use account::{Addresses, Cart, Orders, Profile, Wishlist};
pub use admin::{
    Admin, AdminGallery, AdminImages, AdminOrders, AdminProducts, AdminReviews, AdminSettings,
    AdminUsers, Dashboard,
};
pub use auth::Auth;
pub use storefront::{Categories, Gallery, Products, Reviews, Settings};
