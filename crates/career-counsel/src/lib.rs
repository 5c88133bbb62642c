//! career-counsel
//!
//! The per-request conversation pipeline: load history, assemble, render,
//! invoke the model, then either persist the new pair of turns or parse a
//! structured recommendation.

pub mod assemble;
pub mod counselor;
pub mod error;
mod locks;
