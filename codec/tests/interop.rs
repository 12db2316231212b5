//! Golden byte vectors pinning the wire format across hosts.
//!
//! The vectors below were captured once and must never change: a record
//! serialized on any host must reproduce them octet for octet, and either
//! vector must decode on any host into the original value.

use ferrule_codec::{
    deserialize_record, envelope, serialize_record_with, Decode, Encode, Endian, Error,
    ReadBuffer, Record, WriteBuffer, WriteOptions,
};

#[derive(Debug, Clone, PartialEq)]
struct Golden {
    a_u16: u16,
    a_text: String,
}

impl Golden {
    fn sample() -> Self {
        Self {
            a_u16: 655,
            a_text: "hi".into(),
        }
    }
}

impl Record for Golden {
    const ID: u16 = 1;
    const VERSION: u8 = 1;

    fn write_body(&self, writer: &mut WriteBuffer) -> Result<(), Error> {
        writer.write_u16(self.a_u16)?;
        self.a_text.write(writer)
    }

    fn read_body(reader: &mut ReadBuffer) -> Result<Self, Error> {
        Ok(Self {
            a_u16: reader.read_u16()?,
            a_text: String::read(reader)?,
        })
    }
}

/// Deterministic options: checksum on, timestamp off.
fn options() -> WriteOptions {
    WriteOptions {
        timestamp: false,
        ..WriteOptions::default()
    }
}

/// Little-endian capture: header (checksum 0x934D7653, id 1, version 1,
/// flags endian+checksum, body size 12, no timestamp) then the body.
const GOLDEN_LITTLE: [u8; 36] = [
    0x53, 0x76, 0x4D, 0x93, // checksum
    0x01, 0x00, // id
    0x01, // version
    0x03, // flags: little endian, checksum
    0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // body size
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // timestamp absent
    0x8F, 0x02, // a_u16 = 655
    0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // string length
    0x68, 0x69, // "hi"
];

/// Big-endian capture of the same record.
const GOLDEN_BIG: [u8; 36] = [
    0x20, 0xA0, 0xC8, 0x0A, // checksum
    0x00, 0x01, // id
    0x01, // version
    0x02, // flags: big endian, checksum
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, // body size
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // timestamp absent
    0x02, 0x8F, // a_u16 = 655
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, // string length
    0x68, 0x69, // "hi"
];

#[test]
fn test_encode_matches_little_endian_golden() {
    let bytes = serialize_record_with(&Golden::sample(), Endian::Little, &options()).unwrap();
    assert_eq!(&bytes[..], &GOLDEN_LITTLE[..]);
}

#[test]
fn test_encode_matches_big_endian_golden() {
    let bytes = serialize_record_with(&Golden::sample(), Endian::Big, &options()).unwrap();
    assert_eq!(&bytes[..], &GOLDEN_BIG[..]);
}

#[test]
fn test_decode_little_endian_golden() {
    let decoded: Golden = deserialize_record(GOLDEN_LITTLE.to_vec(), Endian::Little).unwrap();
    assert_eq!(decoded, Golden::sample());
}

#[test]
fn test_decode_big_endian_golden() {
    let decoded: Golden = deserialize_record(GOLDEN_BIG.to_vec(), Endian::Big).unwrap();
    assert_eq!(decoded, Golden::sample());
}

#[test]
fn test_goldens_reject_the_wrong_reader() {
    assert_eq!(
        deserialize_record::<Golden>(GOLDEN_LITTLE.to_vec(), Endian::Big),
        Err(Error::InvalidEndian {
            declared: Endian::Big,
            header: Endian::Little,
        })
    );
    assert_eq!(
        deserialize_record::<Golden>(GOLDEN_BIG.to_vec(), Endian::Little),
        Err(Error::InvalidEndian {
            declared: Endian::Little,
            header: Endian::Big,
        })
    );
}

#[test]
fn test_golden_header_fields() {
    let mut reader = ReadBuffer::new(GOLDEN_LITTLE.to_vec(), Endian::Little);
    let header = envelope::read_header(&mut reader).unwrap();
    assert_eq!(header.id(), 1);
    assert_eq!(header.version(), 1);
    assert_eq!(header.body_size(), 12);
    assert_eq!(header.checksum(), 0x934D_7653u32 as i32);
    assert!(header.flags().checksum());
    assert!(!header.flags().timestamp());
    assert!(!header.has_timestamp());
}

#[test]
fn test_golden_body_corruption_is_caught() {
    let mut bytes = GOLDEN_LITTLE.to_vec();
    bytes[24] ^= 0x01; // low octet of a_u16
    assert!(matches!(
        deserialize_record::<Golden>(bytes, Endian::Little),
        Err(Error::ChecksumMismatch { .. })
    ));
}
