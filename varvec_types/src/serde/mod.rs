//! # Serialization format
//!
//! The de/serializable types are [`VariantVector`] and its elements, [`Variant`].
//!
//! Every integer on the wire, including counts, tags, and lengths, is a prefix varint
//! as implemented by [`varvec_varint`]. Its size is known from its first byte.
//!
//! A vector starts with `elements_count`. Each element starts with `variant_tag`.
//! There are no separators, no padding, and no trailing marker.
//!
//! ```text
//! struct VariantVector {
//!     elements_count:     varint,
//!     element_0:          Variant::*,
//!     element_1:          Variant::*,
//!     ...
//! }
//!
//! struct Variant::UInt {
//!     variant_tag:        varint = 0,
//!     value:              varint,
//! }
//!
//! struct Variant::Text or Variant::Blob {
//!     variant_tag:        varint = 1 or 2,
//!     payload_len:        varint,
//!     payload:            [u8; payload_len],
//! }
//! ```
//!
//! `Text` and `Blob` share a representation and differ only by tag.
//! `Text` payloads are not checked for UTF-8 validity.
//!
//! A decoder stops after `elements_count` elements. Whatever follows is not part of the vector;
//! [`VariantVector::decode()`] ignores it, and [`VariantVector::decode_exact()`] rejects it.

mod cursor;
mod lengths;
mod variant;
mod variant_tag;
mod variant_vector;

use cursor::*;
use lengths::*;
pub use variant::*;
pub use variant_tag::*;
pub use variant_vector::*;
