//! Wallex REST API client.
//!
//! Provides access to the Wallex public market-data and account endpoints.
//!
//! # Trait-based API
//!
//! The [`WallexApi`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., caching or metrics wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use wallex_api_client::rest::{WallexApi, WallexClient};
//!
//! async fn print_markets<C: WallexApi>(client: &C) -> Result<(), wallex_api_client::WallexError> {
//!     for market in client.markets().await? {
//!         println!("{}", market.symbol);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{WallexClient, WallexClientBuilder};
pub use endpoints::WALLEX_BASE_URL;
pub use traits::WallexApi;
