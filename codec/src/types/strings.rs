//! Codec implementations for UTF-8 and wide strings.
//!
//! Strings travel as a 64-bit length followed by UTF-8 octets, no
//! terminator. Wide strings ride the same wire form through the conversion
//! bridge in [`crate::unicode`].

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    codec::{Decode, Encode},
    error::Error,
    unicode,
};

impl Encode for str {
    #[inline]
    fn encode_size(&self) -> usize {
        std::mem::size_of::<u64>() + self.len()
    }

    #[inline]
    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_len(self.len())?;
        buf.put_slice(self.as_bytes())
    }
}

impl Encode for String {
    #[inline]
    fn encode_size(&self) -> usize {
        self.as_str().encode_size()
    }

    #[inline]
    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        self.as_str().write(buf)
    }
}

impl Decode for String {
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let len = buf.read_len()?;
        let raw = buf.take_slice(len)?;
        // A host string cannot carry malformed UTF-8; opaque byte runs
        // belong in `Bytes`, which shares this wire form unvalidated.
        String::from_utf8(raw.to_vec()).map_err(|_| Error::InvalidUtf8)
    }
}

/// A wide string whose host form is 16-bit code units (UTF-16).
///
/// On the wire it is a plain UTF-8 string; the conversion happens at encode
/// and decode time. Encoding a lone or reversed surrogate is a fatal error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString16(pub Vec<u16>);

impl WideString16 {
    /// Converts back to a host string; fails on lone surrogates.
    pub fn to_utf8(&self) -> Result<String, Error> {
        unicode::utf16_to_utf8(&self.0)
    }
}

impl From<&str> for WideString16 {
    fn from(text: &str) -> Self {
        Self(unicode::utf8_to_utf16(text))
    }
}

impl Encode for WideString16 {
    fn encode_size(&self) -> usize {
        // Worst case three UTF-8 octets per BMP unit; pairs shrink.
        std::mem::size_of::<u64>() + self.0.len() * 3
    }

    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        let utf8 = unicode::utf16_to_utf8(&self.0)?;
        utf8.as_str().write(buf)
    }
}

impl Decode for WideString16 {
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let utf8 = String::read(buf)?;
        Ok(Self(unicode::utf8_to_utf16(&utf8)))
    }
}

/// A wide string whose host form is 32-bit code units (one Unicode scalar
/// value each).
///
/// On the wire it is a plain UTF-8 string. Encoding a surrogate-range or
/// out-of-range unit is a fatal error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString32(pub Vec<u32>);

impl WideString32 {
    /// Converts back to a host string; fails on non-scalar units.
    pub fn to_utf8(&self) -> Result<String, Error> {
        unicode::utf32_to_utf8(&self.0)
    }
}

impl From<&str> for WideString32 {
    fn from(text: &str) -> Self {
        Self(unicode::utf8_to_utf32(text))
    }
}

impl Encode for WideString32 {
    fn encode_size(&self) -> usize {
        std::mem::size_of::<u64>() + self.0.len() * 4
    }

    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        let utf8 = unicode::utf32_to_utf8(&self.0)?;
        utf8.as_str().write(buf)
    }
}

impl Decode for WideString32 {
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let utf8 = String::read(buf)?;
        Ok(Self(unicode::utf8_to_utf32(&utf8)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Endian;
    use bytes::Bytes;

    #[test]
    fn test_string_conformity() {
        // Worked example: "hi" little-endian is an 8-byte length then the
        // two octets, 10 bytes total.
        let encoded = "hi".to_string().encode(Endian::Little).unwrap();
        assert_eq!(
            encoded,
            Bytes::from_static(&[0x02, 0, 0, 0, 0, 0, 0, 0, b'h', b'i'])
        );
        assert_eq!(
            String::decode(encoded.to_vec(), Endian::Little).unwrap(),
            "hi"
        );
    }

    #[test]
    fn test_string_round_trip() {
        for endian in [Endian::Big, Endian::Little] {
            for value in ["", "hello world", "héllo wörld", "日本語テキスト"] {
                let encoded = value.to_string().encode(endian).unwrap();
                assert_eq!(
                    String::decode(encoded.to_vec(), endian).unwrap(),
                    value
                );
            }
        }
    }

    #[test]
    fn test_string_decode_rejects_malformed_utf8() {
        // Length prefix of 1 followed by a stray continuation byte.
        let mut wire = 1u64.to_le_bytes().to_vec();
        wire.push(0x80);
        assert_eq!(
            String::decode(wire, Endian::Little),
            Err(Error::InvalidUtf8)
        );
    }

    #[test]
    fn test_string_truncated_after_prefix() {
        let mut wire = 5u64.to_le_bytes().to_vec();
        wire.extend_from_slice(b"hi");
        assert_eq!(String::decode(wire, Endian::Little), Err(Error::EndOfBuffer));
    }

    fn wide16_wire(payload: &[u8], endian: Endian) -> Vec<u8> {
        let mut wire = match endian {
            Endian::Big => (payload.len() as u64).to_be_bytes().to_vec(),
            Endian::Little => (payload.len() as u64).to_le_bytes().to_vec(),
        };
        wire.extend_from_slice(payload);
        wire
    }

    #[test]
    fn test_wide16_round_trip() {
        for endian in [Endian::Big, Endian::Little] {
            for text in ["", "ascii", "wこんにちは", "pair \u{1F600}\u{10FFFF}"] {
                let wide = WideString16::from(text);
                let encoded = wide.encode(endian).unwrap();
                let decoded = WideString16::decode(encoded.to_vec(), endian).unwrap();
                assert_eq!(decoded, wide);
                assert_eq!(decoded.to_utf8().unwrap(), text);
            }
        }
    }

    #[test]
    fn test_wide16_lone_surrogate_encode_fails() {
        let wide = WideString16(vec![0x0041, 0xD800]);
        assert_eq!(
            wide.encode(Endian::Little),
            Err(Error::InvalidSurrogate)
        );
    }

    #[test]
    fn test_wide16_inbound_utf8_rejections() {
        // Each class of malformed UTF-8 must fail the inbound bridge.
        let cases: &[&[u8]] = &[
            &[0x80],                   // lone continuation byte
            &[0xC0, 0xAF],             // overlong '/'
            &[0xC1, 0x81],             // overlong ASCII
            &[0xED, 0xA0, 0x80],       // encoded surrogate U+D800
            &[0xE2, 0x82],             // truncated three-byte sequence
            &[0xF4, 0x90, 0x80, 0x80], // U+110000, past the last code point
            &[0xF5, 0x80, 0x80, 0x80], // invalid lead 0xF5
            &[0xFF],                   // invalid lead 0xFF
            &[0x41, 0x80],             // stray continuation after ASCII
        ];
        for payload in cases {
            let wire = wide16_wire(payload, Endian::Little);
            assert_eq!(
                WideString16::decode(wire, Endian::Little),
                Err(Error::InvalidUtf8),
                "payload {payload:02X?} must be rejected"
            );
        }
    }

    #[test]
    fn test_wide32_round_trip() {
        for endian in [Endian::Big, Endian::Little] {
            for text in ["", "ascii", "wこんにちは", "astral \u{1D11E}"] {
                let wide = WideString32::from(text);
                let encoded = wide.encode(endian).unwrap();
                let decoded = WideString32::decode(encoded.to_vec(), endian).unwrap();
                assert_eq!(decoded, wide);
                assert_eq!(decoded.to_utf8().unwrap(), text);
            }
        }
    }

    #[test]
    fn test_wide32_rejects_surrogate_units() {
        let wide = WideString32(vec![0xD800]);
        assert_eq!(wide.encode(Endian::Big), Err(Error::InvalidSurrogate));

        let wide = WideString32(vec![0x11_0000]);
        assert_eq!(wide.encode(Endian::Big), Err(Error::InvalidUtf8));
    }

    #[test]
    fn test_wide_strings_share_the_string_wire_form() {
        let text = "shared wire";
        let plain = text.to_string().encode(Endian::Little).unwrap();
        let wide16 = WideString16::from(text).encode(Endian::Little).unwrap();
        let wide32 = WideString32::from(text).encode(Endian::Little).unwrap();
        assert_eq!(plain, wide16);
        assert_eq!(plain, wide32);
    }
}
