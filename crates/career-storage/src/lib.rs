//! career-storage
//!
//! S3 operations and the chat history store. Thin wrapper around the AWS
//! S3 SDK, plus an in-memory store for tests and local runs.

pub mod client;
pub mod document;
pub mod error;
pub mod history;
pub mod objects;

