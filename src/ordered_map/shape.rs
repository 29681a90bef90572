use super::OrderedMap;

impl<K, V, S> OrderedMap<K, V, S> {
    /// Returns the height of the ordering tree: the number of nodes on its
    /// longest root-to-leaf path, or `0` for an empty map.
    ///
    /// The tree is never rebalanced, so the height depends on insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut shuffled = OrderedMap::new();
    /// for key in [4, 2, 6, 1, 3, 5, 7] {
    ///     shuffled.insert(key, ());
    /// }
    /// assert_eq!(shuffled.height(), 3);
    ///
    /// let mut sorted = OrderedMap::new();
    /// for key in 1..=7 {
    ///     sorted.insert(key, ());
    /// }
    /// assert_eq!(sorted.height(), 7);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the key stored at the root of the ordering tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.root_key(), None);
    /// map.insert(10, "a");
    /// map.insert(5, "b");
    /// assert_eq!(map.root_key(), Some(&10));
    /// // Erasing the root promotes its only child.
    /// map.erase(&10);
    /// assert_eq!(map.root_key(), Some(&5));
    /// ```
    #[must_use]
    pub fn root_key(&self) -> Option<&K> {
        self.tree.root_key()
    }
}
