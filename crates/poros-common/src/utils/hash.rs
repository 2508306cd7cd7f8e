//! Fast hashing aliases.
//!
//! Graph compilation hashes vertex labels heavily; these aliases pick a
//! non-cryptographic hasher over the default SipHash.

/// A hash map keyed with a fast non-cryptographic hasher.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// A hash set keyed with a fast non-cryptographic hasher.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
