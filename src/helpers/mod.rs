//! Helper functions shared across the pipeline
//!
//! Reading-time and word-count heuristics plus URL construction for
//! canonical links.

mod reading;
mod url;

pub use reading::*;
pub use url::*;
