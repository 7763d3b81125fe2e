use core::fmt::Debug;

use crate::hash::FixedHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypePathMap

/// A specialized map container with a `&'static str` type path as the fixed key type.
///
/// Type paths are unique per type, so they are used as the identity of a
/// type wherever a [`TypeId`](core::any::TypeId) would be too precise
/// (every instantiation of a generic type has its own `TypeId`).
///
/// The container's interface is fully abstracted, exposing no [`HashMap`]
/// specific APIs.
///
/// # Examples
///
/// ```
/// use bp_utils::TypePathMap;
///
/// let mut map = TypePathMap::new();
/// assert!(map.try_insert("my_crate::SimpleBean", || 1));
/// assert!(!map.try_insert("my_crate::SimpleBean", || 2));
/// assert_eq!(map.get("my_crate::SimpleBean"), Some(&1));
/// ```
pub struct TypePathMap<V>(HashMap<&'static str, V, FixedHashState>);

impl<V> TypePathMap<V> {
    /// Creates an empty `TypePathMap`.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(FixedHashState))
    }

    /// Creates an empty `TypePathMap` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, FixedHashState))
    }

    /// Attempts to insert a key-value pair into the map.
    ///
    /// - Returns `true` if the key was not present and the pair was successfully inserted.
    /// - Returns `false` if the key already exists, leaving the map unchanged.
    ///
    /// The closure `f` is only called if the key is not present.
    #[inline]
    pub fn try_insert(&mut self, type_path: &'static str, f: impl FnOnce() -> V) -> bool {
        match self.0.entry(type_path) {
            Entry::Vacant(entry) => {
                entry.insert(f());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns a reference to the value corresponding to the type path.
    pub fn get(&self, type_path: &str) -> Option<&V> {
        self.0.get(type_path)
    }

    /// Returns a mutable reference to the value corresponding to the type path.
    pub fn get_mut(&mut self, type_path: &str) -> Option<&mut V> {
        self.0.get_mut(type_path)
    }

    /// Inserts a key-value pair into the map, returning the replaced value.
    pub fn insert(&mut self, type_path: &'static str, v: V) -> Option<V> {
        self.0.insert(type_path, v)
    }

    /// Removes a key from the map, returning the value at the key if the key was previously in the map.
    pub fn remove(&mut self, type_path: &str) -> Option<V> {
        self.0.remove(type_path)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains(&self, type_path: &str) -> bool {
        self.0.contains_key(type_path)
    }

    /// Returns the number of elements in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An iterator visiting all key-value pairs in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&&'static str, &V)> {
        self.0.iter()
    }

    /// An iterator visiting all keys in arbitrary order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &&'static str> {
        self.0.keys()
    }

    /// An iterator visiting all values in arbitrary order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypePathMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for TypePathMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypePathMap;

    #[test]
    fn try_insert_keeps_first() {
        let mut map = TypePathMap::new();
        assert!(map.try_insert("a::A", || 1));
        assert!(!map.try_insert("a::A", || unreachable!()));
        assert_eq!(map.get("a::A"), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn insert_overwrites() {
        let mut map = TypePathMap::new();
        assert_eq!(map.insert("a::A", 1), None);
        assert_eq!(map.insert("a::A", 2), Some(1));
        assert!(map.contains("a::A"));
        assert_eq!(map.remove("a::A"), Some(2));
        assert!(map.is_empty());
    }
}
