//! # paintshop-client
//!
//! Async client for the Paint Shop backend REST API.
//!
//! ```no_run
//! # async fn demo() -> Result<(), paintshop::ApiError> {
//! use paintshop_client::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(&ClientConfig::from_env().unwrap_or_default())?;
//! client.auth().login("ada@example.com", "hunter2").await?;
//! let cart = client.cart().list().await?;
//! # let _ = cart;
//! # Ok(())
//! # }
//! ```
//!
//! | Module | Role |
//! |--------|------|
//! | [`client`] | transport: headers, status classification, catalog dispatch |
//! | [`groups`] | one accessor per endpoint group |
//! | [`guard`] | clears the session and redirects when the backend ends it |
//! | [`navigator`] | where redirects go |
//! | [`store`] | session persistence on disk |
//! | [`upload`] | multipart bodies |
//! | [`config`] | environment configuration |

pub mod client;
pub mod config;
pub mod groups;
pub mod guard;
pub mod navigator;
pub mod store;
pub mod upload;

pub use client::{ApiClient, Body, Payload, Request};
pub use config::{ClientConfig, ConfigError};
pub use guard::SessionGuard;
pub use navigator::{LogNavigator, Navigator, NoopNavigator, RecordingNavigator};
pub use store::FileStore;
pub use upload::{FilePart, Upload};

pub use paintshop::{ApiError, Context, LoginView, Session};
