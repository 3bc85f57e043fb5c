//! # Storefront API Client
//!
//! Thin blocking REST client for the Bloomhaven storefront backend:
//! product listing, voucher validation, and order tracking. Failed calls
//! yield an [`ApiError`] whose textual description preserves the backend's
//! response body, so it can be handed directly to `error_display`'s
//! normalizer and raised as a user notice.

pub mod client;
pub mod error;
pub mod models;

pub use client::StorefrontClient;
pub use error::ApiError;
pub use models::{Order, OrderStatus, Product, Voucher};
