//! Authentication module for the Wallex API.
//!
//! Wallex authenticates private endpoints with a single API key sent in the
//! `x-api-key` header; there is no request signing.

mod credentials;

pub use credentials::{
    Credentials, CredentialsProvider, DEFAULT_API_KEY_ENV, EnvCredentials, StaticCredentials,
};

/// Header carrying the API key on authenticated requests.
pub const API_KEY_HEADER: &str = "x-api-key";
