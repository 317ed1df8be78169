use std::str::{self, Utf8Error};

mod deser;
mod ser;
pub use deser::*;
pub use ser::*;

/// One element of a [`crate::serde::VariantVector`].
///
/// `Text` holds bytes rather than a [`String`], so that text which is not valid UTF-8
/// survives a round trip unchanged. Use [`Variant::as_text_str()`] to view it as `str`.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Variant {
    UInt(u64),
    Text(Vec<u8>),
    Blob(Vec<u8>),
}

/// A [`Variant`] whose payload borrows from a decoded buffer.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum VariantRef<'a> {
    UInt(u64),
    Text(&'a [u8]),
    Blob(&'a [u8]),
}

impl Variant {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into().into_bytes())
    }

    pub fn as_variant_ref(&self) -> VariantRef<'_> {
        match self {
            Self::UInt(i) => VariantRef::UInt(*i),
            Self::Text(b) => VariantRef::Text(b),
            Self::Blob(b) => VariantRef::Blob(b),
        }
    }

    /// `None` if this is not a `Text`.
    pub fn as_text_str(&self) -> Option<Result<&str, Utf8Error>> {
        self.as_variant_ref().as_text_str()
    }
}

impl<'a> VariantRef<'a> {
    pub fn to_variant(self) -> Variant {
        match self {
            Self::UInt(i) => Variant::UInt(i),
            Self::Text(b) => Variant::Text(b.to_vec()),
            Self::Blob(b) => Variant::Blob(b.to_vec()),
        }
    }

    /// The bytes of a `Text` or `Blob`.
    pub fn payload(&self) -> Option<&'a [u8]> {
        match *self {
            Self::UInt(_) => None,
            Self::Text(b) | Self::Blob(b) => Some(b),
        }
    }

    pub fn as_text_str(&self) -> Option<Result<&'a str, Utf8Error>> {
        match *self {
            Self::Text(b) => Some(str::from_utf8(b)),
            _ => None,
        }
    }
}

impl PartialEq<Variant> for VariantRef<'_> {
    fn eq(&self, other: &Variant) -> bool {
        *self == other.as_variant_ref()
    }
}
impl PartialEq<VariantRef<'_>> for Variant {
    fn eq(&self, other: &VariantRef<'_>) -> bool {
        self.as_variant_ref() == *other
    }
}

impl From<VariantRef<'_>> for Variant {
    fn from(var: VariantRef<'_>) -> Self {
        var.to_variant()
    }
}
impl From<u64> for Variant {
    fn from(i: u64) -> Self {
        Self::UInt(i)
    }
}
impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}
impl From<String> for Variant {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}
impl From<Vec<u8>> for Variant {
    fn from(b: Vec<u8>) -> Self {
        Self::Blob(b)
    }
}
impl From<&[u8]> for Variant {
    fn from(b: &[u8]) -> Self {
        Self::Blob(b.to_vec())
    }
}
