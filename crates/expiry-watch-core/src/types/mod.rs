//! Core types for expiration tracking

mod buffer;
mod item;

pub use buffer::ExpirationBuffer;
pub use item::{ExpiredBatch, ExpiredItem};
