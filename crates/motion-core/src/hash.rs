//! Key hashing for effect restarts.

use std::hash::{Hash, Hasher};

/// Identity of an effect's key set, compared to decide whether to restart it.
pub type Key = u64;

#[cfg(feature = "std-hash")]
mod default {
    pub use std::collections::hash_map::DefaultHasher;

    #[inline]
    pub fn new() -> DefaultHasher {
        DefaultHasher::new()
    }
}

#[cfg(not(feature = "std-hash"))]
mod default {
    // fast branch
    pub use ahash::AHasher as DefaultHasher;

    #[inline]
    pub fn new() -> DefaultHasher {
        DefaultHasher::default()
    }
}

/// Hashes an arbitrary key set into a [`Key`].
pub fn hash_key<K: Hash + ?Sized>(keys: &K) -> Key {
    let mut hasher = default::new();
    keys.hash(&mut hasher);
    hasher.finish()
}
