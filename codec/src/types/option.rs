//! Codec implementation for [`Option<T>`].
//!
//! A presence octet (bool) followed by the payload iff present.

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    codec::{Decode, Encode},
    error::Error,
};

impl<T: Encode> Encode for Option<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        match self {
            Some(inner) => 1 + inner.encode_size(),
            None => 1,
        }
    }

    #[inline]
    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_bool(self.is_some())?;
        if let Some(inner) = self {
            inner.write(buf)?;
        }
        Ok(())
    }
}

impl<T: Decode> Decode for Option<T> {
    #[inline]
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        if buf.read_bool()? {
            Ok(Some(T::read(buf)?))
        } else {
            Ok(None)
        }
    }
}
