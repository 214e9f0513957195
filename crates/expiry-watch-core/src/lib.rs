//! expiry-watch-core: Core traits and types for the expiry-watch library
//!
//! This crate provides the value types, error type and seam traits
//! (clock, metrics) shared across the expiry-watch ecosystem.

mod error;
mod traits;
mod types;

pub use error::{Result, WatchError};
pub use traits::*;
pub use types::*;
