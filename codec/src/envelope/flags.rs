//! The one-octet flags field carried by every record header.

use crate::buffer::Endian;

/// Compression algorithm selector (two bits). Only `None` is interpreted;
/// the remaining values are reserved on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    None = 0,
    Algo1 = 1,
    Algo2 = 2,
    Algo3 = 3,
}

impl Compression {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            1 => Self::Algo1,
            2 => Self::Algo2,
            3 => Self::Algo3,
            _ => Self::None,
        }
    }
}

/// Encryption algorithm selector (two bits). Only `None` is interpreted;
/// the remaining values are reserved on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encryption {
    #[default]
    None = 0,
    Algo1 = 1,
    Algo2 = 2,
    Algo3 = 3,
}

impl Encryption {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            1 => Self::Algo1,
            2 => Self::Algo2,
            3 => Self::Algo3,
            _ => Self::None,
        }
    }
}

/// The header's feature flags, one octet on the wire.
///
/// Bit layout, LSB first:
///
/// | bits | meaning                                  |
/// |------|------------------------------------------|
/// | 0    | payload endianness: 0 big, 1 little      |
/// | 1    | checksum present                         |
/// | 2    | timestamp present                        |
/// | 3–4  | compression selector (0 = none)          |
/// | 5–6  | encryption selector (0 = none)           |
/// | 7    | strict mode: version mismatch is fatal   |
///
/// Every byte value is representable, so parsing cannot fail; reserved
/// selector values are preserved but never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

const ENDIAN_BIT: u8 = 1 << 0;
const CHECKSUM_BIT: u8 = 1 << 1;
const TIMESTAMP_BIT: u8 = 1 << 2;
const COMPRESSION_SHIFT: u8 = 3;
const ENCRYPTION_SHIFT: u8 = 5;
const SELECTOR_MASK: u8 = 0b11;
const STRICT_BIT: u8 = 1 << 7;

impl Flags {
    /// Rebuilds flags from their wire octet. Infallible: unknown selector
    /// values ride along untouched.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// The wire octet.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Byte order of the payload this header describes.
    pub const fn endian(&self) -> Endian {
        if self.0 & ENDIAN_BIT != 0 {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    pub fn set_endian(&mut self, endian: Endian) {
        match endian {
            Endian::Little => self.0 |= ENDIAN_BIT,
            Endian::Big => self.0 &= !ENDIAN_BIT,
        }
    }

    pub const fn checksum(&self) -> bool {
        self.0 & CHECKSUM_BIT != 0
    }

    pub fn set_checksum(&mut self, enabled: bool) {
        if enabled {
            self.0 |= CHECKSUM_BIT;
        } else {
            self.0 &= !CHECKSUM_BIT;
        }
    }

    pub const fn timestamp(&self) -> bool {
        self.0 & TIMESTAMP_BIT != 0
    }

    pub fn set_timestamp(&mut self, enabled: bool) {
        if enabled {
            self.0 |= TIMESTAMP_BIT;
        } else {
            self.0 &= !TIMESTAMP_BIT;
        }
    }

    pub const fn compression(&self) -> Compression {
        Compression::from_bits(self.0 >> COMPRESSION_SHIFT)
    }

    pub fn set_compression(&mut self, compression: Compression) {
        self.0 &= !(SELECTOR_MASK << COMPRESSION_SHIFT);
        self.0 |= (compression as u8) << COMPRESSION_SHIFT;
    }

    pub const fn encryption(&self) -> Encryption {
        Encryption::from_bits(self.0 >> ENCRYPTION_SHIFT)
    }

    pub fn set_encryption(&mut self, encryption: Encryption) {
        self.0 &= !(SELECTOR_MASK << ENCRYPTION_SHIFT);
        self.0 |= (encryption as u8) << ENCRYPTION_SHIFT;
    }

    pub const fn strict(&self) -> bool {
        self.0 & STRICT_BIT != 0
    }

    pub fn set_strict(&mut self, enabled: bool) {
        if enabled {
            self.0 |= STRICT_BIT;
        } else {
            self.0 &= !STRICT_BIT;
        }
    }
}
