//! Pure-logic core of the Paint Shop storefront client.
//!
//! This crate has **no I/O**: no networking, no filesystem, no async
//! runtime. It describes *what* the backend API looks like and *how* its
//! outcomes are interpreted; `paintshop-client` does the HTTP.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Declarative endpoint table and path-template rendering |
//! | [`query`] | Query-string and search-link construction |
//! | [`session`] | Token/user session over a [`KeyValueStore`] |
//! | [`error`] | [`ApiError`] taxonomy, [`ErrorEnvelope`], status classification |
//! | [`types`] | [`Method`], [`BodyShape`], [`Context`], [`LoginView`] |
//! | [`showcase`] | The fixed showcase products and their inquiry links |
//! | [`render`] | Plain-text rendering of products and the catalog |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use paintshop::catalog;
//!
//! let path = catalog::CART_UPDATE.render(&[("id", "17")])?;
//! assert_eq!(path, "/cart/items/17");
//! ```

pub mod catalog;
pub mod error;
pub mod query;
pub mod render;
pub mod session;
pub mod showcase;
pub mod types;

pub use catalog::{CatalogError, Endpoint, CATALOG};
pub use error::{classify, ApiError, ErrorEnvelope, FieldErrors};
pub use session::{KeyValueStore, MemoryStore, Session, StoreError};
pub use showcase::ShowcaseProduct;
pub use types::{BodyShape, Context, LoginView, Method};
