//! Variant vectors: ordered sequences whose elements are each an unsigned integer,
//! a text, or a blob, and their compact binary encoding.
//!
//! See [`serde`] for the wire format.

mod error;
pub mod serde;

pub use error::*;
