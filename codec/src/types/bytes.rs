//! Codec implementation for raw byte strings.
//!
//! Same wire form as a UTF-8 string (64-bit length prefix + octets) but with
//! no validation in either direction: the payload is an opaque byte run.

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    codec::{Decode, Encode},
    error::Error,
};
use bytes::Bytes;

impl Encode for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        std::mem::size_of::<u64>() + self.len()
    }

    #[inline]
    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_len(self.len())?;
        buf.put_slice(self)
    }
}

impl Decode for Bytes {
    #[inline]
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let len = buf.read_len()?;
        Ok(Bytes::copy_from_slice(buf.take_slice(len)?))
    }
}
