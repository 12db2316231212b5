//! Codec implementation for fixed-size arrays.
//!
//! `N` element encodings back to back; the count is static, so there is no
//! length prefix.

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    codec::{Decode, Encode},
    error::Error,
};

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode_size(&self) -> usize {
        self.iter().map(Encode::encode_size).sum()
    }

    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        for item in self {
            item.write(buf)?;
        }
        Ok(())
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::read(buf)?);
        }
        match items.try_into() {
            Ok(array) => Ok(array),
            // items holds exactly N elements by construction
            Err(_) => unreachable!(),
        }
    }
}
