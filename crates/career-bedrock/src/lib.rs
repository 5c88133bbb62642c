//! career-bedrock
//!
//! Prompt rendering, Bedrock model invocation, and the optional web search
//! tool offered to the model.

pub mod chat;
pub mod client;
pub mod error;
pub mod prompt;
pub mod search;
