//! Codec implementations for the supported type catalogue.
//!
//! Every shape on the wire is one of the implementations below; there is no
//! fall-through to a raw-memory codec. Anything not in the catalogue is
//! composed from it (or framed as a record via [`crate::envelope`]).

pub mod array;
pub mod bitset;
pub mod bytes;
pub mod map;
pub mod option;
pub mod primitives;
pub mod set;
pub mod strings;
pub mod tuple;
pub mod vec;

pub use bitset::BitArray;
pub use strings::{WideString16, WideString32};
