//! Codec implementations for ordered and unordered maps.
//!
//! Maps travel as a 64-bit count followed by alternating key and value
//! encodings. Hash maps encode their entries in key order so equal maps
//! produce equal bytes. On decode a duplicate key keeps the first
//! occurrence and never fails the decode.

use crate::{
    buffer::{ReadBuffer, WriteBuffer},
    codec::{Decode, Encode},
    error::Error,
    types::vec::capacity_hint,
};
use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

// ---------- BTreeMap ----------

impl<K: Ord + Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode_size(&self) -> usize {
        let mut size = std::mem::size_of::<u64>();
        for (key, value) in self {
            size += key.encode_size();
            size += value.encode_size();
        }
        size
    }

    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_len(self.len())?;
        // Iteration is already sorted by key.
        for (key, value) in self {
            key.write(buf)?;
            value.write(buf)?;
        }
        Ok(())
    }
}

impl<K: Ord + Decode, V: Decode> Decode for BTreeMap<K, V> {
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let count = buf.read_len()?;
        let mut map = BTreeMap::new();
        for _ in 0..count {
            let key = K::read(buf)?;
            let value = V::read(buf)?;
            map.entry(key).or_insert(value);
        }
        Ok(map)
    }
}

// ---------- HashMap ----------

impl<K: Ord + Hash + Eq + Encode, V: Encode> Encode for HashMap<K, V> {
    fn encode_size(&self) -> usize {
        let mut size = std::mem::size_of::<u64>();
        for (key, value) in self {
            size += key.encode_size();
            size += value.encode_size();
        }
        size
    }

    fn write(&self, buf: &mut WriteBuffer) -> Result<(), Error> {
        buf.write_len(self.len())?;
        // Sort the keys for deterministic encoding.
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort();
        for key in keys {
            key.write(buf)?;
            // The key was just pulled out of this map.
            self.get(key).expect("key from own iterator").write(buf)?;
        }
        Ok(())
    }
}

impl<K: Hash + Eq + Decode, V: Decode> Decode for HashMap<K, V> {
    fn read(buf: &mut ReadBuffer) -> Result<Self, Error> {
        let count = buf.read_len()?;
        let mut map = HashMap::with_capacity(capacity_hint(count, buf.remaining()));
        for _ in 0..count {
            let key = K::read(buf)?;
            let value = V::read(buf)?;
            map.entry(key).or_insert(value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Endian;
    use bytes::Bytes;

    #[test]
    fn test_btree_map_round_trip() {
        for endian in [Endian::Big, Endian::Little] {
            let mut map = BTreeMap::new();
            map.insert("k1".to_string(), 11i32);
            map.insert("k2".to_string(), 22i32);
            let encoded = map.encode(endian).unwrap();
            assert_eq!(
                BTreeMap::<String, i32>::decode(encoded.to_vec(), endian).unwrap(),
                map
            );
        }
    }

    #[test]
    fn test_btree_map_conformity() {
        let mut map = BTreeMap::new();
        map.insert(2u8, 0xBBBBu16);
        map.insert(1u8, 0xAAAAu16);
        // Count, then entries in ascending key order.
        assert_eq!(
            map.encode(Endian::Big).unwrap(),
            Bytes::from_static(&[
                0, 0, 0, 0, 0, 0, 0, 0x02, //
                0x01, 0xAA, 0xAA, //
                0x02, 0xBB, 0xBB,
            ])
        );
    }

    #[test]
    fn test_hash_map_round_trip() {
        let mut map = HashMap::new();
        map.insert(1i32, "one".to_string());
        map.insert(2i32, "two".to_string());
        let encoded = map.encode(Endian::Little).unwrap();
        assert_eq!(
            HashMap::<i32, String>::decode(encoded.to_vec(), Endian::Little).unwrap(),
            map
        );
    }

    #[test]
    fn test_hash_map_matches_btree_map_bytes() {
        let entries = [(5u32, 500u64), (1, 100), (2, 200)];
        let hash: HashMap<_, _> = entries.into_iter().collect();
        let btree: BTreeMap<_, _> = entries.into_iter().collect();
        assert_eq!(
            hash.encode(Endian::Big).unwrap(),
            btree.encode(Endian::Big).unwrap()
        );
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let mut wire = 2u64.to_le_bytes().to_vec();
        wire.extend_from_slice(&1u32.to_le_bytes());
        wire.extend_from_slice(&100u64.to_le_bytes());
        wire.extend_from_slice(&1u32.to_le_bytes());
        wire.extend_from_slice(&200u64.to_le_bytes());

        let map = BTreeMap::<u32, u64>::decode(wire.clone(), Endian::Little).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&100));

        let map = HashMap::<u32, u64>::decode(wire, Endian::Little).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&100));
    }

    #[test]
    fn test_truncated_during_value() {
        let mut map = BTreeMap::new();
        map.insert(1u32, 100u64);
        map.insert(5u32, 500u64);
        let encoded = map.encode(Endian::Big).unwrap();
        let truncated = encoded[..encoded.len() - 4].to_vec();
        assert_eq!(
            BTreeMap::<u32, u64>::decode(truncated, Endian::Big),
            Err(Error::EndOfBuffer)
        );
    }

    #[test]
    fn test_truncated_during_key() {
        let mut map = BTreeMap::new();
        map.insert(1u32, 100u64);
        map.insert(5u32, 500u64);
        let encoded = map.encode(Endian::Big).unwrap();
        let truncated = encoded[..encoded.len() - 10].to_vec();
        assert_eq!(
            BTreeMap::<u32, u64>::decode(truncated, Endian::Big),
            Err(Error::EndOfBuffer)
        );
    }

    #[test]
    fn test_nested_map_values() {
        let mut map = BTreeMap::new();
        map.insert("apple".to_string(), vec![1u8, 2]);
        map.insert("banana".to_string(), vec![3u8, 4, 5]);
        map.insert("cherry".to_string(), vec![]);
        let encoded = map.encode(Endian::Little).unwrap();
        assert_eq!(
            BTreeMap::<String, Vec<u8>>::decode(encoded.to_vec(), Endian::Little).unwrap(),
            map
        );
    }
}
