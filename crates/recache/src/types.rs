//! # Common Types
//!
//! Hash map aliases for the pattern tables.

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> CommonHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CommonHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> CommonHashMap<K, V> {
            CommonHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CommonHashMap<K, V> {
            CommonHashMap::with_capacity(capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_ctors() {
        let mut map: CommonHashMap<String, u32> = hash_map_new();
        assert!(map.is_empty());
        map.insert("a".to_string(), 1);
        assert_eq!(map.get("a"), Some(&1));

        let map: CommonHashMap<String, u32> = hash_map_with_capacity(16);
        assert!(map.capacity() >= 16);
    }
}
