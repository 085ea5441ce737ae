//! Shared utility functions.
//!
//! - [`content_length`] - declared length and `Content-Range` parsing

pub mod content_length;

pub use content_length::{content_range_total, declared_content_length, parse_content_range_total};
