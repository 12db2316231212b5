//! Bounds-checked reader over an owned byte vector.

use super::Endian;
use crate::{error::Error, fs};
use bytes::Bytes;
use paste::paste;
use std::path::Path;

/// A cursor-based reader over an owned, immutable byte vector.
///
/// The cursor advances as values are decoded and may be repositioned
/// anywhere in `[0, len]`. A failing primitive read never moves the cursor.
///
/// A reader built from a complete byte vector is ready immediately. A
/// [`streaming`](ReadBuffer::streaming) reader accepts chunks via
/// [`extend`](ReadBuffer::extend) and becomes ready once the terminal chunk
/// arrives; reads before that fail with [`Error::NotReady`].
///
/// The cursor mutates during decode, so a reader must not be shared between
/// threads even though decoding looks read-only from the caller's side.
#[derive(Debug, Clone)]
pub struct ReadBuffer {
    data: Vec<u8>,
    cursor: usize,
    endian: Endian,
    ready: bool,
}

impl ReadBuffer {
    /// Creates a ready reader over a complete byte vector.
    pub fn new(data: impl Into<Vec<u8>>, endian: Endian) -> Self {
        Self {
            data: data.into(),
            cursor: 0,
            endian,
            ready: true,
        }
    }

    /// Creates an empty reader that expects data in chunks.
    ///
    /// Feed it with [`extend`](Self::extend); reads fail with
    /// [`Error::NotReady`] until a chunk with `last = true` arrives.
    pub fn streaming(endian: Endian) -> Self {
        Self::streaming_with_capacity(0, endian)
    }

    /// Creates a streaming reader with storage reserved up front.
    ///
    /// When the total size is known ahead of fragmented delivery, reserving
    /// once avoids regrowing the storage on every chunk.
    pub fn streaming_with_capacity(expected_size: usize, endian: Endian) -> Self {
        Self {
            data: Vec::with_capacity(expected_size),
            cursor: 0,
            endian,
            ready: false,
        }
    }

    /// Creates a ready reader over the contents of a binary file.
    pub fn from_file(path: impl AsRef<Path>, endian: Endian) -> Result<Self, fs::FsError> {
        let data = fs::read_binary_file(path)?;
        Ok(Self::new(data, endian))
    }

    /// Appends a chunk of data to a streaming reader.
    ///
    /// `last = true` marks the chunk as terminal and makes the reader ready;
    /// an empty terminal chunk is permitted. Appending to a ready reader
    /// fails with [`Error::Finished`].
    pub fn extend(&mut self, chunk: &[u8], last: bool) -> Result<(), Error> {
        if self.ready {
            return Err(Error::Finished);
        }
        if !chunk.is_empty() {
            self.data
                .try_reserve(chunk.len())
                .map_err(|_| Error::Allocation)?;
            self.data.extend_from_slice(chunk);
        }
        if last {
            self.data.shrink_to_fit();
            self.ready = true;
        }
        Ok(())
    }

    /// Total number of bytes held, read or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if no bytes are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True once all data is present and reads are permitted.
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

    /// Number of unread bytes from the cursor to the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// True if the reader is ready and at least `n` unread bytes remain.
    #[inline]
    pub fn has_remaining(&self, n: usize) -> bool {
        self.ready && n <= self.remaining()
    }

    /// Moves the cursor to `pos`. Returns false if `pos` is past the end.
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

    /// Moves the cursor past the last byte.
    pub fn seek_end(&mut self) {
        self.cursor = self.data.len();
    }

    /// Advances the cursor by `n` bytes. Returns false (cursor unchanged) if
    /// fewer than `n` unread bytes remain.
    pub fn advance(&mut self, n: usize) -> bool {
        if !self.has_remaining(n) {
            return false;
        }
        self.cursor += n;
        true
    }

    /// True if the unread bytes begin with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.ready && self.data[self.cursor..].starts_with(prefix)
    }

    /// Advances past `prefix` if the unread bytes begin with it.
    pub fn advance_if(&mut self, prefix: &[u8]) -> bool {
        if self.starts_with(prefix) {
            self.cursor += prefix.len();
            return true;
        }
        false
    }

    /// Scans forward from the cursor for `needle` and positions the cursor
    /// at its first occurrence (or just past it when `beyond` is set).
    ///
    /// Returns false and leaves the cursor unchanged when the pattern does
    /// not occur. Used to re-synchronize a stream on a known marker.
    pub fn find_and_advance(&mut self, needle: &[u8], beyond: bool) -> bool {
        if !self.ready || needle.is_empty() || self.cursor >= self.data.len() {
            return false;
        }
        let haystack = &self.data[self.cursor..];
        let Some(offset) = haystack
            .windows(needle.len())
            .position(|window| window == needle)
        else {
            return false;
        };
        self.cursor += offset;
        if beyond {
            self.cursor += needle.len();
        }
        true
    }

    /// Borrows `len` bytes starting at absolute position `start`, cursor
    /// untouched. Returns `None` if the range is out of bounds.
    pub fn slice(&self, start: usize, len: usize) -> Option<&[u8]> {
        let end = start.checked_add(len)?;
        self.data.get(start..end)
    }

    /// Consumes the reader and hands back the underlying bytes.
    ///
    /// Ownership transfer is the only way to get the storage out, so any
    /// slice previously borrowed from the reader is statically dead by now.
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.data)
    }

    /// Consumes the reader and re-opens its bytes as a writer with the same
    /// declared byte order, cursor at the start.
    ///
    /// The writer starts unfinished and unbounded so existing contents can
    /// be patched in place and released again.
    pub fn into_writer(self) -> super::WriteBuffer {
        super::WriteBuffer::over(self.data, self.endian)
    }

    /// Consumes `len` bytes at the cursor and returns them as a borrowed
    /// slice, advancing the cursor.
    #[inline]
    pub(crate) fn take_slice(&mut self, len: usize) -> Result<&[u8], Error> {
        if !self.ready {
            return Err(Error::NotReady);
        }
        let end = self.cursor.checked_add(len).ok_or(Error::EndOfBuffer)?;
        if end > self.data.len() {
            return Err(Error::EndOfBuffer);
        }
        let slice = &self.data[self.cursor..end];
        self.cursor = end;
        Ok(slice)
    }

    /// Consumes `N` bytes at the cursor into a fixed array.
    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        if !self.ready {
            return Err(Error::NotReady);
        }
        let end = self.cursor.checked_add(N).ok_or(Error::EndOfBuffer)?;
        if end > self.data.len() {
            return Err(Error::EndOfBuffer);
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.cursor..end]);
        self.cursor = end;
        Ok(out)
    }

    /// Reads a single octet as a bool: zero is false, anything else true.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads an IEEE-754 binary32 value.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, Error> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads an IEEE-754 binary64 value.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64, Error> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Reads a wire length (always u64) into the host's `usize`.
    ///
    /// Fails with [`Error::SizeOverflow`] if the value does not fit, without
    /// touching any output.
    #[inline]
    pub fn read_len(&mut self) -> Result<usize, Error> {
        self.read_len_as::<usize>()
    }

    /// Reads a wire length (always u64) into an arbitrary host counter.
    #[inline]
    pub fn read_len_as<C: TryFrom<u64>>(&mut self) -> Result<C, Error> {
        let raw = self.read_u64()?;
        C::try_from(raw).map_err(|_| Error::SizeOverflow(raw))
    }

    /// Reads a union tag and checks it selects one of `limit` alternatives.
    #[inline]
    pub fn read_union_tag(&mut self, limit: usize) -> Result<usize, Error> {
        let index = self.read_u64()?;
        if index >= limit as u64 {
            return Err(Error::InvalidVariant {
                index,
                limit: limit as u64,
            });
        }
        Ok(index as usize)
    }
}

macro_rules! impl_read_scalar {
    ($ty:ty, $size:literal) => {
        paste! {
            impl ReadBuffer {
                #[doc = concat!(
                    "Reads a `", stringify!($ty),
                    "` in the declared byte order, advancing the cursor by ",
                    stringify!($size), "."
                )]
                #[inline]
                pub fn [<read_ $ty>](&mut self) -> Result<$ty, Error> {
                    let raw = self.take_array::<$size>()?;
                    Ok(match self.endian {
                        Endian::Big => <$ty>::from_be_bytes(raw),
                        Endian::Little => <$ty>::from_le_bytes(raw),
                    })
                }
            }
        }
    };
}

impl_read_scalar!(u8, 1);
impl_read_scalar!(u16, 2);
impl_read_scalar!(u32, 4);
impl_read_scalar!(u64, 8);
impl_read_scalar!(i8, 1);
impl_read_scalar!(i16, 2);
impl_read_scalar!(i32, 4);
impl_read_scalar!(i64, 8);
