//! Codec implementations for tuples.
//!
//! Fields travel in declared order with no prefix; a pair is just the
//! two-element case.

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    codec::{Decode, Encode},
    error::Error,
};
use paste::paste;

macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Encode ),*> Encode for ( $( [<T $index>], )* ) {
                fn encode_size(&self) -> usize {
                    0 $( + self.$index.encode_size() )*
                }

                fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
                    $( self.$index.write(buf)?; )*
                    Ok(())
                }
            }

            impl<$( [<T $index>]: Decode ),*> Decode for ( $( [<T $index>], )* ) {
                fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
                    Ok(( $( [<T $index>]::read(buf)? , )* ))
                }
            }
        }
    };
}

// Tuple sizes 1 through 12.
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Endian;
    use bytes::Bytes;

    #[test]
    fn test_pair_round_trip() {
        for endian in [Endian::Big, Endian::Little] {
            let value = (-7i32, 77u32);
            let encoded = value.encode(endian).unwrap();
            assert_eq!(encoded.len(), 8);
            assert_eq!(<(i32, u32)>::decode(encoded.to_vec(), endian).unwrap(), value);
        }
    }

    #[test]
    fn test_pair_has_no_prefix() {
        let encoded = (0x01u8, 0x0203u16).encode(Endian::Big).unwrap();
        assert_eq!(encoded, Bytes::from_static(&[0x01, 0x02, 0x03]));
    }

    #[test]
    fn test_mixed_tuple_round_trip() {
        let value = (99i32, "tuple".to_string(), Some(1u8));
        let encoded = value.encode(Endian::Little).unwrap();
        assert_eq!(
            <(i32, String, Option<u8>)>::decode(encoded.to_vec(), Endian::Little).unwrap(),
            value
        );
    }

    #[test]
    fn test_twelve_elements() {
        let value = (1u8, 2u8, 3u8, 4u8, 5u8, 6u8, 7u8, 8u8, 9u8, 10u8, 11u8, 12u8);
        let encoded = value.encode(Endian::Big).unwrap();
        assert_eq!(encoded.len(), 12);
        type T12 = (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8);
        assert_eq!(T12::decode(encoded.to_vec(), Endian::Big).unwrap(), value);
    }

    #[test]
    fn test_truncated_tuple() {
        let encoded = (1u32, 2u32).encode(Endian::Big).unwrap();
        let truncated = encoded[..6].to_vec();
        assert_eq!(
            <(u32, u32)>::decode(truncated, Endian::Big),
            Err(Error::EndOfBuffer)
        );
    }
}
