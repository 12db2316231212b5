//! Self-describing binary serialization.
//!
//! # Overview
//!
//! A compact, endian-aware framing layer around a typed byte stream,
//! designed to:
//! - Serialize structured records into a binary format that declares its
//!   own identity, version, size, and integrity checksum
//! - Deserialize untrusted binary input with the declared properties
//!   validated before the payload is trusted
//!
//! Records travel inside a 24-octet [`Header`] whose [`Flags`] octet pins
//! the payload's byte order; a reader constructed with the wrong order
//! refuses the payload rather than guessing.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Scalars: `u8`–`u64`, `i8`–`i64`, `f32`, `f64`, `bool`
//! - Strings: `String`/`&str` (UTF-8), [`WideString16`], [`WideString32`],
//!   and raw [`bytes::Bytes`]
//! - Containers: `Option<T>`, tuples up to 12 elements, `[T; N]`, `Vec<T>`,
//!   `VecDeque<T>`, `LinkedList<T>`, `BTreeSet`/`HashSet`,
//!   `BTreeMap`/`HashMap`, and [`BitArray<N>`]
//! - User records via the [`Record`] trait, nested records included
//!
//! Sequence lengths always travel as unsigned 64-bit values, so readers and
//! writers on different architectures agree on the wire format.
//!
//! # Example
//!
//! ```
//! use ferrule_codec::{
//!     deserialize_record, serialize_record, Endian, Error, ReadBuffer, Record, WriteBuffer,
//! };
//! use ferrule_codec::{Decode, Encode};
//!
//! #[derive(Debug, PartialEq)]
//! struct Greeting {
//!     count: u16,
//!     text: String,
//! }
//!
//! impl Record for Greeting {
//!     const ID: u16 = 1;
//!     const VERSION: u8 = 1;
//!
//!     fn write_body(&self, writer: &mut WriteBuffer) -> Result<(), Error> {
//!         writer.write_u16(self.count)?;
//!         self.text.write(writer)
//!     }
//!
//!     fn read_body(reader: &mut ReadBuffer) -> Result<Self, Error> {
//!         Ok(Self {
//!             count: reader.read_u16()?,
//!             text: String::read(reader)?,
//!         })
//!     }
//! }
//!
//! let greeting = Greeting { count: 655, text: "hello world".into() };
//! let bytes = serialize_record(&greeting, Endian::Little).unwrap();
//! let decoded: Greeting = deserialize_record(bytes.to_vec(), Endian::Little).unwrap();
//! assert_eq!(decoded, greeting);
//! ```
//!
//! # Discriminated unions
//!
//! Enums encode as a 64-bit tag followed by the selected alternative, via
//! [`WriteBuffer::write_union_tag`] and [`ReadBuffer::read_union_tag`]:
//!
//! ```
//! use ferrule_codec::{Decode, Encode, Endian, Error, ReadBuffer, WriteBuffer};
//!
//! #[derive(Debug, PartialEq)]
//! enum Value {
//!     Number(i32),
//!     Text(String),
//! }
//!
//! impl Encode for Value {
//!     fn encode_size(&self) -> usize {
//!         8 + match self {
//!             Value::Number(n) => n.encode_size(),
//!             Value::Text(s) => s.encode_size(),
//!         }
//!     }
//!
//!     fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
//!         match self {
//!             Value::Number(n) => {
//!                 buf.write_union_tag(0)?;
//!                 n.write(buf)
//!             }
//!             Value::Text(s) => {
//!                 buf.write_union_tag(1)?;
//!                 s.write(buf)
//!             }
//!         }
//!     }
//! }
//!
//! impl Decode for Value {
//!     fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
//!         match buf.read_union_tag(2)? {
//!             0 => Ok(Value::Number(i32::read(buf)?)),
//!             1 => Ok(Value::Text(String::read(buf)?)),
//!             _ => unreachable!(),
//!         }
//!     }
//! }
//!
//! let value = Value::Text("variant-string".into());
//! let encoded = value.encode(Endian::Little).unwrap();
//! assert_eq!(Value::decode(encoded.to_vec(), Endian::Little).unwrap(), value);
//! ```

pub mod buffer;
pub mod codec;
pub mod envelope;
pub mod error;
pub mod fs;
pub mod record;
pub mod types;
pub mod unicode;

// Re-export main types and traits.
pub use buffer::{Endian, ReadBuffer, WriteBuffer};
pub use codec::{Codec, Decode, Encode};
pub use envelope::{Compression, Encryption, Flags, Header, WriteOptions};
pub use error::Error;
pub use fs::{read_binary_file, FsError};
pub use record::{deserialize_record, serialize_record, serialize_record_with, Record};
pub use types::{BitArray, WideString16, WideString32};
