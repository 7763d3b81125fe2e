//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] as the hashing provider.
///
/// # Examples
///
/// ```
/// use bp_utils::hash::HashMap;
///
/// let mut map = HashMap::default();
/// map.insert("subBean1", 1);
/// assert_eq!(map.get("subBean1"), Some(&1));
/// ```
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] as the hashing provider.
///
/// # Examples
///
/// ```
/// use bp_utils::hash::HashSet;
///
/// let mut seen = HashSet::default();
/// assert!(seen.insert("getName"));
/// assert!(!seen.insert("getName"));
/// ```
pub type HashSet<T> = hashbrown::HashSet<T, FixedHashState>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
