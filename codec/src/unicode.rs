//! Conversions between host wide-string forms and UTF-8.
//!
//! Wide strings travel as UTF-8 on the wire regardless of the host's code
//! unit width. The inbound path accepts only well-formed UTF-8 (overlong
//! forms, encoded surrogates, truncated sequences, out-of-range code points,
//! and stray continuation bytes are all rejected); the outbound path rejects
//! code units that do not form Unicode scalar values.

use crate::error::Error;

/// The UTF-16 surrogate code unit range, invalid as Unicode scalar values.
const SURROGATE_MIN: u32 = 0xD800;
const SURROGATE_MAX: u32 = 0xDFFF;

/// Converts UTF-16 code units to UTF-8.
///
/// Non-BMP code points must arrive as surrogate pairs; a lone or reversed
/// surrogate fails with [`Error::InvalidSurrogate`].
pub fn utf16_to_utf8(units: &[u16]) -> Result<String, Error> {
    char::decode_utf16(units.iter().copied())
        .collect::<Result<String, _>>()
        .map_err(|_| Error::InvalidSurrogate)
}

/// Converts a UTF-8 string to UTF-16 code units, emitting surrogate pairs
/// for non-BMP code points.
pub fn utf8_to_utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Converts 32-bit code units (one Unicode scalar value each) to UTF-8.
///
/// Surrogate-range units fail with [`Error::InvalidSurrogate`]; units past
/// U+10FFFF fail with [`Error::InvalidUtf8`].
pub fn utf32_to_utf8(units: &[u32]) -> Result<String, Error> {
    units
        .iter()
        .map(|&unit| {
            char::from_u32(unit).ok_or(if (SURROGATE_MIN..=SURROGATE_MAX).contains(&unit) {
                Error::InvalidSurrogate
            } else {
                Error::InvalidUtf8
            })
        })
        .collect()
}

/// Converts a UTF-8 string to 32-bit code units, one per scalar value.
pub fn utf8_to_utf32(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}
