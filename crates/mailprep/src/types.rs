//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a vocabulary index.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max index in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type PrepHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PrepHashMap<K, V> {
            PrepHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type PrepHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type PrepHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PrepHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type PrepHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type PrepHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PrepHashMap<K, V> {
            PrepHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type PrepHashSet<V> = std::collections::HashSet<V>;
    }
}
