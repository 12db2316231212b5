//! Codec implementations for ordered and unordered sets.
//!
//! Sets share the sequence wire form (64-bit count + elements). Hash sets
//! encode their elements in sorted order so equal sets produce equal bytes.
//! On decode, elements are inserted as they arrive; a duplicate on the wire
//! is tolerated because insertion is idempotent.

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    codec::{Decode, Encode},
    error::Error,
    types::vec::capacity_hint,
};
use std::{
    collections::{BTreeSet, HashSet},
    hash::Hash,
};

// ---------- BTreeSet ----------

impl<T: Ord + Encode> Encode for BTreeSet<T> {
    fn encode_size(&self) -> usize {
        std::mem::size_of::<u64>() + self.iter().map(Encode::encode_size).sum::<usize>()
    }

    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_len(self.len())?;
        // Iteration is already sorted.
        for item in self {
            item.write(buf)?;
        }
        Ok(())
    }
}

impl<T: Ord + Decode> Decode for BTreeSet<T> {
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let count = buf.read_len()?;
        let mut set = BTreeSet::new();
        for _ in 0..count {
            set.insert(T::read(buf)?);
        }
        Ok(set)
    }
}

// ---------- HashSet ----------

impl<T: Ord + Hash + Eq + Encode> Encode for HashSet<T> {
    fn encode_size(&self) -> usize {
        std::mem::size_of::<u64>() + self.iter().map(Encode::encode_size).sum::<usize>()
    }

    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_len(self.len())?;
        // Sort for deterministic encoding.
        let mut items: Vec<_> = self.iter().collect();
        items.sort();
        for item in items {
            item.write(buf)?;
        }
        Ok(())
    }
}

impl<T: Hash + Eq + Decode> Decode for HashSet<T> {
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let count = buf.read_len()?;
        let mut set = HashSet::with_capacity(capacity_hint(count, buf.remaining()));
        for _ in 0..count {
            set.insert(T::read(buf)?);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Endian;

    #[test]
    fn test_btree_set_round_trip() {
        for endian in [Endian::Big, Endian::Little] {
            let set: BTreeSet<i32> = [5, 6, 7].into_iter().collect();
            let encoded = set.encode(endian).unwrap();
            assert_eq!(encoded.len(), 8 + 3 * 4);
            assert_eq!(BTreeSet::<i32>::decode(encoded.to_vec(), endian).unwrap(), set);
        }
    }

    #[test]
    fn test_hash_set_round_trip() {
        let set: HashSet<String> = ["u1".to_string(), "u2".to_string()].into_iter().collect();
        let encoded = set.encode(Endian::Little).unwrap();
        assert_eq!(
            HashSet::<String>::decode(encoded.to_vec(), Endian::Little).unwrap(),
            set
        );
    }

    #[test]
    fn test_hash_set_encoding_is_deterministic() {
        let forward: HashSet<u16> = (0..100).collect();
        let backward: HashSet<u16> = (0..100).rev().collect();
        assert_eq!(
            forward.encode(Endian::Big).unwrap(),
            backward.encode(Endian::Big).unwrap()
        );
    }

    #[test]
    fn test_duplicate_elements_tolerated() {
        // Two copies of the same element on the wire collapse into one.
        let mut wire = 3u64.to_le_bytes().to_vec();
        for item in [7u32, 7, 9] {
            wire.extend_from_slice(&item.to_le_bytes());
        }
        let set = BTreeSet::<u32>::decode(wire.clone(), Endian::Little).unwrap();
        assert_eq!(set, [7, 9].into_iter().collect());

        let set = HashSet::<u32>::decode(wire, Endian::Little).unwrap();
        assert_eq!(set, [7, 9].into_iter().collect());
    }

    #[test]
    fn test_truncated_set() {
        let mut wire = 2u64.to_be_bytes().to_vec();
        wire.extend_from_slice(&1u32.to_be_bytes());
        assert_eq!(
            BTreeSet::<u32>::decode(wire, Endian::Big),
            Err(Error::EndOfBuffer)
        );
    }
}
