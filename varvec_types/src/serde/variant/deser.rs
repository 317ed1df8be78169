use crate::serde::{ByteCursor, ElementsCount, PayloadLen, VariantRef, VariantTag, VariantTagInt};
use crate::DecodeError;

#[derive(PartialEq, Eq, Debug)]
pub enum ReadResult<T> {
    EOF,
    /// The byte length of the element, and the element.
    Some(usize, T),
}

/// Reads a vector's elements one at a time, borrowing their payloads from `buf`.
///
/// The `elements_count` is read up front by [`VariantReader::new()`].
/// After that many elements, [`VariantReader::deser()`] returns [`ReadResult::EOF`],
/// regardless of whether bytes remain in `buf`.
///
/// Any error is terminal: the reader does not resynchronize,
/// and as an [`Iterator`] it yields nothing after the first `Err`.
pub struct VariantReader<'a> {
    r: ByteCursor<'a>,
    elems_ct: ElementsCount,
    elems_read: u64,
    failed: bool,
}

impl<'a> VariantReader<'a> {
    pub fn new(buf: &'a [u8]) -> Result<Self, DecodeError> {
        let mut r = ByteCursor::new(buf);
        let elems_ct = ElementsCount::deser(&mut r)?;
        Ok(Self {
            r,
            elems_ct,
            elems_read: 0,
            failed: false,
        })
    }

    pub fn declared_count(&self) -> u64 {
        *self.elems_ct
    }
    /// The count of elements not yet read.
    pub fn remaining(&self) -> u64 {
        *self.elems_ct - self.elems_read
    }
    /// The count of bytes consumed so far, including `elements_count`.
    pub fn position(&self) -> usize {
        self.r.position()
    }

    /// Each element occupies at least 2 bytes, so a declared count beyond
    /// half the remaining bytes cannot be honest.
    pub fn capacity_hint(&self) -> usize {
        let max_fitting = (self.r.remaining() / 2) as u64;
        self.remaining().min(max_fitting) as usize
    }

    pub fn deser(&mut self) -> Result<ReadResult<VariantRef<'a>>, DecodeError> {
        if self.failed || self.remaining() == 0 {
            return Ok(ReadResult::EOF);
        }
        let res = self.deser_element();
        self.failed = res.is_err();
        let (r_len, var) = res?;
        self.elems_read += 1;
        Ok(ReadResult::Some(r_len, var))
    }

    fn deser_element(&mut self) -> Result<(usize, VariantRef<'a>), DecodeError> {
        let start = self.r.position();

        /* variant_tag */
        let tag_int = VariantTagInt::deser(&mut self.r)?;
        let tag = VariantTag::from_int(tag_int).ok_or(DecodeError::UnknownTag {
            offset: start,
            tag: *tag_int,
        })?;

        /* value, or payload_len and payload */
        let var = match tag {
            VariantTag::UInt => VariantRef::UInt(self.r.read_varint()?),
            VariantTag::Text => VariantRef::Text(self.deser_payload()?),
            VariantTag::Blob => VariantRef::Blob(self.deser_payload()?),
        };

        Ok((self.r.position() - start, var))
    }

    fn deser_payload(&mut self) -> Result<&'a [u8], DecodeError> {
        let payload_len = PayloadLen::deser(&mut self.r)?;
        self.r.read_slice(*payload_len)
    }
}

impl<'a> Iterator for VariantReader<'a> {
    type Item = Result<VariantRef<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.deser() {
            Ok(ReadResult::EOF) => None,
            Ok(ReadResult::Some(_, var)) => Some(Ok(var)),
            Err(e) => Some(Err(e)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, usize::try_from(self.remaining()).ok())
        }
    }
}

/// Decodes a vector without copying payloads. The result borrows from `buf`.
///
/// Bytes following the vector are ignored.
pub fn decode_borrowed(buf: &[u8]) -> Result<Vec<VariantRef<'_>>, DecodeError> {
    let mut r = VariantReader::new(buf)?;
    let mut vars = Vec::with_capacity(r.capacity_hint());
    while let ReadResult::Some(_, var) = r.deser()? {
        vars.push(var);
    }
    Ok(vars)
}
