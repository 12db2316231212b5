//! The versioned envelope wrapped around every record on the wire.
//!
//! # Overview
//!
//! A serialized record is a 24-octet [`Header`] followed by `body_size`
//! octets of body. The header carries the record's identity, version, size,
//! feature [`Flags`], an integrity checksum, and a timestamp.
//!
//! Writing is two-pass: header room is reserved, the body is written once,
//! then the header and the checksum are back-filled. Reading validates the
//! header against the target record (endianness, id, version, size) before
//! and after the body runs, and finishes with a checksum comparison.
//!
//! Compression and encryption selectors are carried but never interpreted;
//! only the zero ("none") values are produced here.

mod flags;
mod header;

pub use flags::{Compression, Encryption, Flags};
pub use header::{checksum, Header};

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    error::Error,
    record::Record,
};
use tracing::{error, warn};

/// Envelope features chosen at write time.
///
/// The defaults match what a bare [`write_record`] produces: checksum and
/// timestamp on, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Compute and store the body checksum.
    pub checksum: bool,
    /// Stamp the header with the current wall-clock time.
    pub timestamp: bool,
    /// Compression selector carried in the flags. Values other than
    /// [`Compression::None`] are reserved and not applied to the body.
    pub compression: Compression,
    /// Encryption selector carried in the flags. Values other than
    /// [`Encryption::None`] are reserved and not applied to the body.
    pub encryption: Encryption,
    /// Set the strict-mode bit: a reader seeing a version mismatch fails
    /// instead of warning.
    pub strict: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            checksum: true,
            timestamp: true,
            compression: Compression::None,
            encryption: Encryption::None,
            strict: false,
        }
    }
}

/// Width of the header tail covered by the checksum: everything after the
/// checksum slot itself.
const COVERED_HEADER_BYTES: usize = Header::BYTES - Header::CHECKSUM_BYTES;

/// Wraps `record` in an envelope at the writer's cursor with default
/// options (checksum and timestamp enabled).
pub fn write_record<R: Record>(writer: &mut WriteBuffer, record: &R) -> Result<(), Error> {
    write_record_with(writer, record, &WriteOptions::default())
}

/// Wraps `record` in an envelope at the writer's cursor.
///
/// Two-pass: reserves header room, writes the body exactly once, then
/// back-fills the header and (if enabled) the checksum, leaving the cursor
/// at the end of the body. If any step fails the writer is poisoned for
/// this record — the cursor may rest anywhere inside the partial frame and
/// the caller is expected to discard the writer or rewind it.
pub fn write_record_with<R: Record>(
    writer: &mut WriteBuffer,
    record: &R,
    options: &WriteOptions,
) -> Result<(), Error> {
    let frame_start = writer.cursor();
    let body_start = frame_start + Header::BYTES;

    // Pass one: leave room for the header, then let the body writer run.
    writer.skip(Header::BYTES)?;
    record.write_body(writer)?;
    let body_end = writer.cursor();
    let body_size = (body_end - body_start) as u64;

    // Pass two: back-fill the header over the reserved room.
    let mut flags = Flags::default();
    flags.set_endian(writer.endian());
    flags.set_checksum(options.checksum);
    flags.set_timestamp(options.timestamp);
    flags.set_compression(options.compression);
    flags.set_encryption(options.encryption);
    flags.set_strict(options.strict);
    let timestamp = if options.timestamp {
        Header::now_ms()
    } else {
        Header::NO_TIMESTAMP
    };
    let header = Header::new(
        R::ID,
        R::VERSION,
        body_size,
        flags,
        Header::NO_CHECKSUM,
        timestamp,
    );
    rewind(writer, frame_start)?;
    header.write(writer)?;

    // Back-fill the checksum over everything behind its slot.
    if options.checksum {
        let covered_start = frame_start + Header::CHECKSUM_BYTES;
        let covered_len = COVERED_HEADER_BYTES + body_size as usize;
        let sum = {
            let covered = writer
                .slice(covered_start, covered_len)
                .ok_or(Error::EndOfBuffer)?;
            checksum(body_size, covered)
        };
        rewind(writer, frame_start)?;
        writer.write_i32(sum)?;
    }

    rewind(writer, body_end)
}

/// Reads and validates one enveloped record at the reader's cursor.
///
/// Validation order: endianness, id, version (warning unless the header's
/// strict bit is set), declared size against available bytes, actual body
/// consumption, checksum. Every fatal condition is logged before the error
/// returns.
pub fn read_record<R: Record>(reader: &mut ReadBuffer) -> Result<R, Error> {
    let header = Header::read(reader)?;

    if header.endian() != reader.endian() {
        let err = Error::InvalidEndian {
            declared: reader.endian(),
            header: header.endian(),
        };
        error!(header_endian = ?header.endian(), reader_endian = ?reader.endian(), "endianness mismatch");
        return Err(err);
    }

    if header.id() != R::ID {
        error!(expected = R::ID, found = header.id(), "record id mismatch");
        return Err(Error::InvalidId {
            expected: R::ID,
            found: header.id(),
        });
    }

    if header.version() != R::VERSION {
        if header.flags().strict() {
            error!(
                id = header.id(),
                expected = R::VERSION,
                found = header.version(),
                "version mismatch in strict mode"
            );
            return Err(Error::VersionMismatch {
                expected: R::VERSION,
                found: header.version(),
            });
        }
        warn!(
            id = header.id(),
            header_version = header.version(),
            target_version = R::VERSION,
            "decoding record across versions"
        );
    }

    if header.body_size() > reader.remaining() as u64 {
        error!(
            declared = header.body_size(),
            available = reader.remaining(),
            "declared body size exceeds available bytes"
        );
        return Err(Error::EndOfBuffer);
    }

    let body_start = reader.cursor();
    let value = match R::read_body(reader) {
        Ok(value) => value,
        Err(err) => {
            error!(id = header.id(), %err, "record body decode failed");
            return Err(err);
        }
    };
    let consumed = (reader.cursor() - body_start) as u64;

    if consumed != header.body_size() {
        error!(
            declared = header.body_size(),
            consumed, "body size disagrees with header"
        );
        return Err(Error::SizeMismatch {
            declared: header.body_size(),
            consumed,
        });
    }

    if header.flags().checksum() {
        let covered_start = body_start - COVERED_HEADER_BYTES;
        let covered_len = COVERED_HEADER_BYTES + consumed as usize;
        let computed = {
            let covered = reader
                .slice(covered_start, covered_len)
                .ok_or(Error::EndOfBuffer)?;
            checksum(header.body_size(), covered)
        };
        if computed != header.checksum() {
            error!(
                expected = header.checksum(),
                computed, "checksum mismatch"
            );
            return Err(Error::ChecksumMismatch {
                expected: header.checksum(),
                computed,
            });
        }
    }

    Ok(value)
}

/// Peeks the header at the reader's cursor, advancing past it without
/// touching the body.
///
/// Lets a dispatcher inspect id and version before deciding which record
/// type to decode the body into.
pub fn read_header(reader: &mut ReadBuffer) -> Result<Header, Error> {
    Header::read(reader)
}

/// Cursor repositioning inside an envelope frame; positions are derived
/// from earlier cursors, so failure means the frame itself is gone.
fn rewind(writer: &mut WriteBuffer, pos: usize) -> Result<(), Error> {
    if writer.set_cursor(pos) {
        Ok(())
    } else {
        Err(Error::EndOfBuffer)
    }
}
