use core::hash::{BuildHasher, Hash};

use super::OrderedMap;
use crate::raw::{KeyIndex, OrderTree};

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with capacity for at least `capacity` elements.
    ///
    /// Only the hash index is pre-sized; tree nodes are allocated one per key
    /// as entries arrive.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = OrderedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Creates an empty map which will use the given hash builder to hash keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    /// use ordered_hash_tree::DefaultHashBuilder;
    ///
    /// let mut map = OrderedMap::with_hasher(DefaultHashBuilder::default());
    /// map.insert(1, 2);
    /// ```
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        OrderedMap {
            index: KeyIndex::with_hasher(hash_builder),
            tree: OrderTree::new(),
        }
    }

    /// Creates an empty map with capacity for at least `capacity` elements,
    /// using `hash_builder` to hash the keys.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        OrderedMap {
            index: KeyIndex::with_capacity_and_hasher(capacity, hash_builder),
            tree: OrderTree::new(),
        }
    }

    /// Returns the number of elements the hash index can hold without
    /// reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    /// Returns a reference to the map's [`BuildHasher`].
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.index.hasher()
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Reserves capacity for at least `additional` more elements in the hash
    /// index.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, i32> = OrderedMap::new();
    /// map.reserve(10);
    /// assert!(map.capacity() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.index.reserve(additional);
    }

    /// Shrinks the capacity of the hash index as much as possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, i32> = OrderedMap::with_capacity(100);
    /// map.insert(1, 2);
    /// map.insert(3, 4);
    /// map.shrink_to_fit();
    /// assert!(map.capacity() >= 2);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.index.shrink_to_fit();
    }
}
