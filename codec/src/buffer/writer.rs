//! Bounds-checked writer over a growable byte vector.

use super::{Endian, ReadBuffer};
use crate::error::Error;
use bytes::Bytes;
use paste::paste;

/// A cursor-based writer over an owned, growable byte vector.
///
/// Storage grows on demand (geometrically, through the vector's reservation
/// policy) up to a caller-declared maximum size. A write that would exceed
/// the maximum fails with [`Error::Overflow`] and leaves the cursor and the
/// observable length untouched; an allocator refusal surfaces the same way
/// as [`Error::Allocation`]. The writer stays consistent after either, so
/// the caller decides whether to retry, continue, or discard.
///
/// The cursor may be repositioned anywhere in `[0, len]`, which is how the
/// envelope back-fills a header after writing a record body.
#[derive(Debug, Clone)]
pub struct WriteBuffer {
    data: Vec<u8>,
    cursor: usize,
    endian: Endian,
    max_size: usize,
    ready: bool,
}

impl WriteBuffer {
    /// Creates a writer with no practical size bound.
    pub fn new(endian: Endian) -> Self {
        Self::with_limits(0, usize::MAX, endian)
    }

    /// Creates a writer with `min_capacity` bytes pre-allocated that refuses
    /// to grow beyond `max_size` bytes.
    pub fn with_limits(min_capacity: usize, max_size: usize, endian: Endian) -> Self {
        Self {
            data: Vec::with_capacity(min_capacity.min(max_size)),
            cursor: 0,
            endian,
            max_size,
            ready: false,
        }
    }

    /// Re-opens existing bytes as an unbounded, unfinished writer with the
    /// cursor at the start. Used to patch a buffer in place.
    pub(crate) fn over(data: Vec<u8>, endian: Endian) -> Self {
        Self {
            data,
            cursor: 0,
            endian,
            max_size: usize::MAX,
            ready: false,
        }
    }

    /// Number of bytes written so far (the high-water mark, not the cursor).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True once [`finish`](Self::finish) has been called.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The byte order declared at construction.
    #[inline]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Current cursor position.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The declared maximum size.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Moves the cursor to `pos`. Returns false if `pos` is past the end of
    /// the written bytes.
    pub fn set_cursor(&mut self, pos: usize) -> bool {
        if pos > self.data.len() {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// Moves the cursor to the first byte.
    pub fn seek_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor past the last written byte.
    pub fn seek_end(&mut self) {
        self.cursor = self.data.len();
    }

    /// Borrows `len` bytes starting at absolute position `start`, cursor
    /// untouched. Returns `None` if the range is out of bounds.
    pub fn slice(&self, start: usize, len: usize) -> Option<&[u8]> {
        let end = start.checked_add(len)?;
        self.data.get(start..end)
    }

    /// Marks the payload final, truncating storage to the cursor.
    ///
    /// Idempotent. Writes after this fail with [`Error::Finished`].
    pub fn finish(&mut self) {
        if !self.ready {
            self.data.truncate(self.cursor);
            self.ready = true;
        }
    }

    /// Consumes the writer and hands back the written bytes.
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.data)
    }

    /// Consumes the writer and re-opens its bytes as a ready reader with the
    /// same declared byte order.
    pub fn into_reader(mut self) -> ReadBuffer {
        self.finish();
        ReadBuffer::new(self.data, self.endian)
    }

    /// Copies `bytes` into the buffer at the cursor, growing storage as
    /// needed and advancing the cursor.
    ///
    /// On failure the cursor and the observable length are unchanged.
    #[inline]
    pub fn put_slice(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let end = self.grow_for(bytes.len())?;
        self.data[self.cursor..end].copy_from_slice(bytes);
        self.cursor = end;
        Ok(())
    }

    /// Zero-fills `len` bytes at the cursor, advancing past them.
    ///
    /// Reserves room to be back-filled later via
    /// [`set_cursor`](Self::set_cursor).
    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        let end = self.grow_for(len)?;
        self.data[self.cursor..end].fill(0);
        self.cursor = end;
        Ok(())
    }

    /// Ensures `additional` bytes fit at the cursor, growing storage if the
    /// write lands past the current end. Returns the post-write cursor.
    fn grow_for(&mut self, additional: usize) -> Result<usize, Error> {
        if self.ready {
            return Err(Error::Finished);
        }
        let overflow = Error::Overflow {
            requested: additional,
            max: self.max_size,
        };
        let end = self.cursor.checked_add(additional).ok_or(overflow)?;
        if end > self.max_size {
            return Err(overflow);
        }
        if end > self.data.len() {
            self.data
                .try_reserve(end - self.data.len())
                .map_err(|_| Error::Allocation)?;
            self.data.resize(end, 0);
        }
        Ok(end)
    }

    /// Writes a bool as a single octet, 0 or 1.
    #[inline]
    pub fn write_bool(&mut self, value: bool) -> Result<(), Error> {
        self.write_u8(u8::from(value))
    }

    /// Writes an IEEE-754 binary32 value.
    #[inline]
    pub fn write_f32(&mut self, value: f32) -> Result<(), Error> {
        self.write_u32(value.to_bits())
    }

    /// Writes an IEEE-754 binary64 value.
    #[inline]
    pub fn write_f64(&mut self, value: f64) -> Result<(), Error> {
        self.write_u64(value.to_bits())
    }

    /// Writes a host length as the canonical 64-bit wire length.
    #[inline]
    pub fn write_len(&mut self, len: usize) -> Result<(), Error> {
        self.write_u64(len as u64)
    }

    /// Writes a union tag selecting alternative `index`.
    #[inline]
    pub fn write_union_tag(&mut self, index: usize) -> Result<(), Error> {
        self.write_u64(index as u64)
    }
}

macro_rules! impl_write_scalar {
    ($ty:ty) => {
        paste! {
            impl WriteBuffer {
                #[doc = concat!(
                    "Writes a `", stringify!($ty),
                    "` in the declared byte order, advancing the cursor."
                )]
                #[inline]
                pub fn [<write_ $ty>](&mut self, value: $ty) -> Result<(), Error> {
                    let raw = match self.endian {
                        Endian::Big => value.to_be_bytes(),
                        Endian::Little => value.to_le_bytes(),
                    };
                    self.put_slice(&raw)
                }
            }
        }
    };
}

impl_write_scalar!(u8);
impl_write_scalar!(u16);
impl_write_scalar!(u32);
impl_write_scalar!(u64);
impl_write_scalar!(i8);
impl_write_scalar!(i16);
impl_write_scalar!(i32);
impl_write_scalar!(i64);
