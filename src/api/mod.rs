//! Content API Client
//!
//! Bindings to the remote Ideas endpoint, organized by concern.

mod ideas;
mod sequence;

pub use ideas::*;
pub use sequence::*;
