//! Codec implementations for fixed-width scalars.
//!
//! Integers travel as their unsigned two's-complement bit pattern, floats as
//! their IEEE-754 bit pattern, bool as a single octet. Multi-octet values
//! honor the buffer's declared byte order.

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    codec::{Decode, Encode},
    error::Error,
};
use paste::paste;

macro_rules! impl_primitive {
    ($ty:ty) => {
        paste! {
            impl Encode for $ty {
                #[inline]
                fn encode_size(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }

                #[inline]
                fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
                    buf.[<write_ $ty>](*self)
                }
            }

            impl Decode for $ty {
                #[inline]
                fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
                    buf.[<read_ $ty>]()
                }
            }
        }
    };
}

impl_primitive!(u8);
impl_primitive!(u16);
impl_primitive!(u32);
impl_primitive!(u64);
impl_primitive!(i8);
impl_primitive!(i16);
impl_primitive!(i32);
impl_primitive!(i64);
impl_primitive!(f32);
impl_primitive!(f64);
impl_primitive!(bool);
