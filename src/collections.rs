use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Insertion order is preserved, which keeps snapshot output deterministic
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
