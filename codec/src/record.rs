//! The contract an application record implements, plus whole-record entry
//! points.

use crate::{
    buffer::{Endian, ReadBuffer, WriteBuffer},
    envelope::{self, WriteOptions},
    error::Error,
};
use bytes::Bytes;

/// A value that can travel inside an envelope.
///
/// A record declares a fixed identity and version and knows how to write
/// and read its own body fields, in order, against a buffer. It never
/// frames itself: the envelope owns the header, and the body writer runs
/// exactly once per serialization.
///
/// Records embedded as fields of other records are written by delegating to
/// [`envelope::write_record`] from the parent's body writer, so each nested
/// record carries its own envelope.
///
/// Enumerated id types convert at the boundary:
///
/// ```
/// #[repr(u16)]
/// enum Kind {
///     Telemetry = 1,
///     Command = 2,
/// }
///
/// struct Telemetry;
///
/// impl Telemetry {
///     const ID: u16 = Kind::Telemetry as u16;
/// }
/// # let _ = (Kind::Command, Telemetry::ID);
/// ```
pub trait Record: Sized {
    /// Identity stamped into the header. [`Header::NO_ID`] means "none".
    ///
    /// [`Header::NO_ID`]: crate::envelope::Header::NO_ID
    const ID: u16;

    /// Version stamped into the header. [`Header::NO_VERSION`] means
    /// "none".
    ///
    /// [`Header::NO_VERSION`]: crate::envelope::Header::NO_VERSION
    const VERSION: u8;

    /// Writes the record's fields at the writer's cursor, in order.
    fn write_body(&self, writer: &mut WriteBuffer) -> Result<(), Error>;

    /// Reads the record's fields at the reader's cursor, in order.
    fn read_body(reader: &mut ReadBuffer) -> Result<Self, Error>;
}

/// Serializes one record into a fresh byte vector with default envelope
/// options.
pub fn serialize_record<R: Record>(record: &R, endian: Endian) -> Result<Bytes, Error> {
    serialize_record_with(record, endian, &WriteOptions::default())
}

/// Serializes one record into a fresh byte vector with explicit envelope
/// options.
pub fn serialize_record_with<R: Record>(
    record: &R,
    endian: Endian,
    options: &WriteOptions,
) -> Result<Bytes, Error> {
    let mut writer = WriteBuffer::new(endian);
    envelope::write_record_with(&mut writer, record, options)?;
    writer.finish();
    Ok(writer.into_bytes())
}

/// Deserializes one record from the front of a byte vector.
///
/// Bytes past the record are left unread: a stream may hold several
/// envelopes back to back.
pub fn deserialize_record<R: Record>(
    bytes: impl Into<Vec<u8>>,
    endian: Endian,
) -> Result<R, Error> {
    let mut reader = ReadBuffer::new(bytes, endian);
    envelope::read_record(&mut reader)
}
