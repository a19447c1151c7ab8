//! Cloudflare DNS provider implementation

pub mod client;
pub mod error;
pub mod types;

pub use client::{CloudflareClient, CloudflareConfig};
pub use error::CloudflareError;
