//! Error types returned by encode and decode operations.

use crate::buffer::Endian;
use thiserror::Error;

/// Error type for all fallible buffer, codec, and envelope operations.
///
/// Errors are values: nothing in this crate panics on malformed input, and
/// allocation pressure surfaces as [`Error::Allocation`] rather than an
/// abort. Once a decode fails, the value under construction is discarded;
/// no partially assigned output escapes to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A decode requested more octets than remained in the buffer.
    #[error("end of buffer")]
    EndOfBuffer,
    /// A write would have grown the buffer past its declared maximum size.
    #[error("write of {requested} bytes would exceed the maximum size of {max} bytes")]
    Overflow { requested: usize, max: usize },
    /// The allocator refused to grow the underlying storage.
    #[error("allocation failure while growing buffer")]
    Allocation,
    /// A read was attempted on a streaming reader before its terminal chunk
    /// arrived.
    #[error("reader is not ready: terminal data chunk has not been supplied")]
    NotReady,
    /// A write was attempted after [`finish`](crate::WriteBuffer::finish), or
    /// a chunk was appended to a reader that already received its terminal
    /// chunk.
    #[error("buffer contents are final")]
    Finished,
    /// Decoding succeeded but left unconsumed bytes in the buffer.
    #[error("extra data: {0} bytes left over after decoding")]
    ExtraData(usize),
    /// A 64-bit wire length does not fit the host counter it was decoded
    /// into.
    #[error("wire length {0} overflows the host counter")]
    SizeOverflow(u64),
    /// A decoded union tag selected an alternative that does not exist.
    #[error("union tag {index} out of range for {limit} alternatives")]
    InvalidVariant { index: u64, limit: u64 },
    /// A string payload was not valid UTF-8, or a wide-string code unit has
    /// no UTF-8 representation.
    #[error("malformed utf-8 payload")]
    InvalidUtf8,
    /// A wide-string input contained a lone or reversed UTF-16 surrogate.
    #[error("lone or reversed utf-16 surrogate")]
    InvalidSurrogate,
    /// The endianness recorded in a header disagrees with the endianness the
    /// reader was constructed with.
    #[error("header declares {header:?}-endian payload but reader is {declared:?}-endian")]
    InvalidEndian { declared: Endian, header: Endian },
    /// The record id recorded in a header disagrees with the target record.
    #[error("header carries id {found} but the target record has id {expected}")]
    InvalidId { expected: u16, found: u16 },
    /// The version recorded in a header disagrees with the target record and
    /// the strict-mode flag is set.
    #[error("header carries version {found} but the target record has version {expected}")]
    VersionMismatch { expected: u8, found: u8 },
    /// The record body consumed a different number of octets than its header
    /// declared.
    #[error("body consumed {consumed} bytes but the header declared {declared}")]
    SizeMismatch { declared: u64, consumed: u64 },
    /// The checksum recomputed over the received bytes disagrees with the
    /// checksum stored in the header.
    #[error("checksum mismatch: header holds {expected}, computed {computed}")]
    ChecksumMismatch { expected: i32, computed: i32 },
}
