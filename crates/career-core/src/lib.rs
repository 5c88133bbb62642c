//! career-core
//!
//! Pure domain types, the industry category list, recommendation parsing,
//! and S3 key conventions. No AWS SDK dependency — this is the shared
//! vocabulary of the career counseling service.

pub mod category;
pub mod error;
pub mod models;
pub mod recommendation;
pub mod s3_keys;
