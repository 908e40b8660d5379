//! Fast hash collections.
//!
//! Keys in the engine are short strings (rule ids, lowercase tokens), where
//! FxHash beats SipHash by a wide margin. Nothing here is exposed to
//! attacker-chosen keys at a scale where HashDoS matters.

pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
