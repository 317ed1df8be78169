use crate::DecodeError;

/// A read position over an untrusted buffer.
///
/// Every read checks the remaining length first; `pos <= buf.len()` always holds.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}
impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let rest = &self.buf[self.pos..];

        let size = varvec_varint::parse_size(rest).ok_or(DecodeError::InsufficientData {
            offset: self.pos,
            required: 1,
            available: 0,
        })?;
        let invalid_len = DecodeError::InvalidLength {
            offset: self.pos,
            size,
            available: rest.len(),
        };
        if size > rest.len() {
            return Err(invalid_len);
        }
        let int = varvec_varint::decode(&rest[..size]).ok_or(invalid_len)?;

        self.pos += size;
        Ok(int)
    }

    pub fn read_slice(&mut self, len: u64) -> Result<&'a [u8], DecodeError> {
        let available = self.remaining();
        match usize::try_from(len) {
            Ok(len) if len <= available => {
                let slice = &self.buf[self.pos..self.pos + len];
                self.pos += len;
                Ok(slice)
            }
            _ => Err(DecodeError::InsufficientData {
                offset: self.pos,
                required: len,
                available,
            }),
        }
    }
}
