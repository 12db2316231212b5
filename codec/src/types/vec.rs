//! Codec implementations for variable-length sequences.
//!
//! `Vec`, `VecDeque`, and `LinkedList` share one wire form: a 64-bit count
//! followed by that many element encodings. On decode the count is a
//! capacity hint only, clamped by the bytes actually available, so a
//! hostile count cannot reserve unbounded memory; the first short element
//! read fails the decode.

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    codec::{Decode, Encode},
    error::Error,
};
use std::collections::{LinkedList, VecDeque};

/// Upper bound for pre-allocation derived from the bytes left in the
/// buffer: an element occupies at least one octet.
#[inline]
pub(crate) fn capacity_hint(count: usize, remaining: usize) -> usize {
    count.min(remaining)
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        std::mem::size_of::<u64>() + self.iter().map(Encode::encode_size).sum::<usize>()
    }

    #[inline]
    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_len(self.len())?;
        for item in self {
            item.write(buf)?;
        }
        Ok(())
    }
}

impl<T: Decode> Decode for Vec<T> {
    #[inline]
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let count = buf.read_len()?;
        let mut items = Vec::with_capacity(capacity_hint(count, buf.remaining()));
        for _ in 0..count {
            items.push(T::read(buf)?);
        }
        Ok(items)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        std::mem::size_of::<u64>() + self.iter().map(Encode::encode_size).sum::<usize>()
    }

    #[inline]
    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_len(self.len())?;
        for item in self {
            item.write(buf)?;
        }
        Ok(())
    }
}

impl<T: Decode> Decode for VecDeque<T> {
    #[inline]
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let count = buf.read_len()?;
        let mut items = VecDeque::with_capacity(capacity_hint(count, buf.remaining()));
        for _ in 0..count {
            items.push_back(T::read(buf)?);
        }
        Ok(items)
    }
}

impl<T: Encode> Encode for LinkedList<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        std::mem::size_of::<u64>() + self.iter().map(Encode::encode_size).sum::<usize>()
    }

    #[inline]
    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_len(self.len())?;
        for item in self {
            item.write(buf)?;
        }
        Ok(())
    }
}

impl<T: Decode> Decode for LinkedList<T> {
    #[inline]
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let count = buf.read_len()?;
        let mut items = LinkedList::new();
        for _ in 0..count {
            items.push_back(T::read(buf)?);
        }
        Ok(items)
    }
}
