//! # Wallex Client
//!
//! An async Rust client library for the Wallex exchange REST API.
//!
//! ## Features
//!
//! - Public market data: markets, currencies, order book, trades, candles
//! - Account and order endpoints authenticated with an API key
//! - Lossless decimals via [`Number`], which accepts strings or floats
//! - A blocking façade in [`blocking`] for synchronous callers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wallex_api_client::rest::WallexClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WallexClient::new();
//!     let book = client.order_book("BTCUSDT").await?;
//!     println!("Best ask: {:?}", book.best_ask());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod blocking;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::WallexError;
pub use types::{Number, OrderSide, OrderType, Resolution};

/// Result type alias using WallexError
pub type Result<T> = std::result::Result<T, WallexError>;
