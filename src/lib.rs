//! # Real-Debrid API Client
//!
//! An async Rust client for the Real-Debrid REST API.
//!
//! ## Features
//!
//! - Bearer-token authentication on every call
//! - Every resource group: system, user, unrestrict, traffic, streaming,
//!   downloads, torrents, hosts, settings
//! - Vendor error codes resolved to messages and logged through `tracing`
//! - Failed responses are returned, not thrown, so callers can inspect them
//!
//! ## Example
//!
//! ```no_run
//! use rdapi::{Client, ClientConfig};
//! use rdapi::models::torrents::TorrentListQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new("YOUR_TOKEN").with_timeout(30))?;
//!
//!     let user = client.user().get().await?;
//!     println!("Hello, {}!", user.username);
//!
//!     let response = client.torrents().add_magnet("ABCDEF", None).await?;
//!     if let Some(err) = response.error() {
//!         println!("Failed: {:?}", err);
//!     }
//!
//!     let torrents = client.torrents().get(&TorrentListQuery::default()).await?;
//!     println!("{}", torrents.text());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod error_codes;
pub mod logging;
pub mod models;
pub mod request;
pub mod response;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use error_codes::ErrorCodes;
pub use request::{FileSelection, Params};
pub use response::{ApiResponse, ResponseError, VendorError};
