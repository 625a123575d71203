//! Common types used across the Wallex client library.

pub mod common;
pub mod number;
pub mod serde_helpers;

pub use common::*;
pub use number::Number;
