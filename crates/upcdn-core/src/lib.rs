//! Upcdn Core Library
//!
//! This crate provides the core domain logic shared by all Upcdn client
//! components: the CDN transformation URL builder, the secure (signed) URL
//! builder, configuration, and error types.
//!
//! Everything in this crate is pure, synchronous computation. HTTP plumbing
//! lives in the `upcdn-api-client` crate.

pub mod config;
pub mod error;
pub mod signed_url;
pub mod transform;

// Re-export commonly used types
pub use config::Config;
pub use error::UpcdnError;
pub use signed_url::{SecureUrlBuilder, SignAlgorithm};
pub use transform::document::{DocumentFormat, DocumentTransformation};
pub use transform::image::ImageTransformation;
pub use transform::video::VideoTransformation;
pub use transform::{Operation, Transformation};
