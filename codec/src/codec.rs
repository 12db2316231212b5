//! Core codec traits.

use crate::{
    buffer::{Endian, ReadBuffer, WriteBuffer},
    error::Error,
};
use bytes::Bytes;

/// Trait for values that can be encoded onto a [`WriteBuffer`].
pub trait Encode {
    /// A pre-allocation hint for the encoded size in bytes.
    ///
    /// Exact for scalars and fixed-layout types; containers may estimate.
    /// Never used for correctness, only to size buffers up front.
    fn encode_size(&self) -> usize;

    /// Writes this value at the buffer's cursor in the buffer's declared
    /// byte order.
    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error>;

    /// Encodes this value into a fresh byte vector with the given byte
    /// order.
    fn encode(&self, endian: Endian) -> Result<Bytes, Error> {
        let mut buf = WriteBuffer::with_limits(self.encode_size(), usize::MAX, endian);
        self.write(&mut buf)?;
        buf.finish();
        Ok(buf.into_bytes())
    }
}

// Encoding through a reference is the same as encoding the referent.
impl<T: Encode + ?Sized> Encode for &T {
    fn encode_size(&self) -> usize {
        (**self).encode_size()
    }

    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        (**self).write(buf)
    }
}

/// Trait for values that can be decoded from a [`ReadBuffer`].
pub trait Decode: Sized {
    /// Reads a value at the buffer's cursor, advancing past it.
    ///
    /// On failure the enclosing decode aborts; nothing partially read
    /// escapes to the caller.
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error>;

    /// Decodes a value from a complete byte vector with the given byte
    /// order, requiring every byte to be consumed.
    fn decode(bytes: impl Into<Vec<u8>>, endian: Endian) -> Result<Self, Error> {
        let mut buf = ReadBuffer::new(bytes, endian);
        let value = Self::read(&mut buf)?;
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(value)
    }
}

/// Marker for types that both encode and decode.
pub trait Codec: Encode + Decode {}

impl<T: Encode + Decode> Codec for T {}
