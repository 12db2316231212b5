//! The 24-octet header framing every serialized record.

use super::flags::Flags;
use crate::{
    buffer::{Endian, ReadBuffer, WriteBuffer},
    error::Error,
};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// The fixed frame written ahead of every record body.
///
/// Wire layout (offsets in octets, all multi-octet fields in the enclosing
/// buffer's declared byte order):
///
/// | offset | width | field     |
/// |--------|-------|-----------|
/// | 0      | 4     | checksum  |
/// | 4      | 2     | id        |
/// | 6      | 1     | version   |
/// | 7      | 1     | flags     |
/// | 8      | 8     | body size |
/// | 16     | 8     | timestamp |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    checksum: i32,
    id: u16,
    version: u8,
    flags: Flags,
    body_size: u64,
    timestamp: i64,
}

impl Header {
    /// Encoded size of a header.
    pub const BYTES: usize = 4 + 2 + 1 + 1 + 8 + 8;
    /// Width of the checksum slot at the front of the header.
    pub const CHECKSUM_BYTES: usize = 4;

    /// Checksum value meaning "absent".
    pub const NO_CHECKSUM: i32 = 0;
    /// Id value meaning "absent".
    pub const NO_ID: u16 = u16::MAX;
    /// Version value meaning "absent".
    pub const NO_VERSION: u8 = 0;
    /// Timestamp value meaning "absent".
    pub const NO_TIMESTAMP: i64 = 0;

    pub fn new(
        id: u16,
        version: u8,
        body_size: u64,
        flags: Flags,
        checksum: i32,
        timestamp: i64,
    ) -> Self {
        Self {
            checksum,
            id,
            version,
            flags,
            body_size,
            timestamp,
        }
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn body_size(&self) -> u64 {
        self.body_size
    }

    pub fn checksum(&self) -> i32 {
        self.checksum
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Byte order of the payload, from the flags octet.
    pub fn endian(&self) -> Endian {
        self.flags.endian()
    }

    pub fn has_id(&self) -> bool {
        self.id != Self::NO_ID
    }

    pub fn has_version(&self) -> bool {
        self.version != Self::NO_VERSION
    }

    pub fn has_checksum(&self) -> bool {
        self.checksum != Self::NO_CHECKSUM
    }

    pub fn has_timestamp(&self) -> bool {
        self.timestamp != Self::NO_TIMESTAMP
    }

    /// Milliseconds since the Unix epoch, for the timestamp field.
    pub fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(Self::NO_TIMESTAMP)
    }

    /// Emits the header at the writer's cursor, field by field.
    pub(crate) fn write(&self, writer: &mut WriteBuffer) -> Result<(), Error> {
        writer.write_i32(self.checksum)?;
        writer.write_u16(self.id)?;
        writer.write_u8(self.version)?;
        writer.write_u8(self.flags.to_byte())?;
        writer.write_u64(self.body_size)?;
        writer.write_i64(self.timestamp)
    }

    /// Reads a header at the reader's cursor, field by field.
    pub(crate) fn read(reader: &mut ReadBuffer) -> Result<Self, Error> {
        Ok(Self {
            checksum: reader.read_i32()?,
            id: reader.read_u16()?,
            version: reader.read_u8()?,
            flags: Flags::from_byte(reader.read_u8()?),
            body_size: reader.read_u64()?,
            timestamp: reader.read_i64()?,
        })
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Header {{")?;
        writeln!(f, "  id: {}", self.id)?;
        writeln!(f, "  version: {}", self.version)?;
        writeln!(f, "  size: {}", self.body_size)?;
        writeln!(f, "  checksum: {}", self.checksum)?;
        writeln!(f, "  timestamp: {}", self.timestamp)?;
        writeln!(f, "  flags: {{")?;
        writeln!(f, "    endian: {:?}", self.flags.endian())?;
        writeln!(f, "    checksum: {}", self.flags.checksum())?;
        writeln!(f, "    timestamp: {}", self.flags.timestamp())?;
        writeln!(f, "    compression: {:?}", self.flags.compression())?;
        writeln!(f, "    encryption: {:?}", self.flags.encryption())?;
        writeln!(f, "    strict: {}", self.flags.strict())?;
        writeln!(f, "  }}")?;
        write!(f, "}}")
    }
}

/// The rolling checksum stored in the header.
///
/// Seeded with the body size, then folds in each covered octet with a
/// wrapping multiply-by-31. A result of zero is bumped to one, because zero
/// is reserved for "absent". The covered range starts right after the
/// 4-octet checksum slot and runs through the end of the body, on both the
/// write and the read side.
pub fn checksum(body_size: u64, covered: &[u8]) -> i32 {
    let mut hash = body_size as i32;
    for &octet in covered {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(octet));
    }
    if hash == Header::NO_CHECKSUM {
        hash += 1;
    }
    hash
}
