use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::ops::Index;

use alloc::vec::Vec;
use hashbrown::DefaultHashBuilder;

use crate::raw::{InOrder, KeyIndex, OrderTree};

mod capacity;
mod shape;

/// An ordered map combining a hash index with an unbalanced binary search tree.
///
/// Every entry lives in two places: the value is stored in a hash index keyed
/// by `K`, and a copy of the key is placed in a binary search tree. The hash
/// index answers membership, lookup and size queries in average O(1); the tree
/// provides enumeration in ascending key order. Both structures always hold
/// exactly the same set of keys.
///
/// Keys must therefore be [`Hash`] + [`Eq`] for the index, [`Ord`] for the
/// tree, and [`Clone`] so each structure can own a copy.
///
/// Unlike [`BTreeMap::insert`], inserting a key that is already present is a
/// no-op: the first value written for a key is kept until the key is erased.
///
/// It is a logic error for a key to be modified in such a way that its hash or
/// its ordering relative to any other key changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `OrderedMap` that observed it and not result in undefined
/// behavior.
///
/// # Examples
///
/// ```
/// use ordered_hash_tree::OrderedMap;
///
/// let mut scores = OrderedMap::new();
/// scores.insert(10, "ten");
/// scores.insert(5, "five");
/// scores.insert(15, "fifteen");
///
/// // O(1) average membership and size.
/// assert!(scores.contains_key(&5));
/// assert_eq!(scores.len(), 3);
///
/// // The first write wins.
/// assert!(!scores.insert(5, "FIVE"));
/// assert_eq!(scores[&5], "five");
///
/// // Enumeration is in ascending key order.
/// let keys: Vec<_> = scores.keys().copied().collect();
/// assert_eq!(keys, [5, 10, 15]);
///
/// scores.erase(&10);
/// for (key, value) in &scores {
///     println!("{key}: {value}");
/// }
/// ```
///
/// An `OrderedMap` with a known list of items can be initialized from an array:
///
/// ```
/// use ordered_hash_tree::OrderedMap;
///
/// let planets = OrderedMap::from([(3, "Earth"), (1, "Mercury"), (2, "Venus")]);
/// assert_eq!(planets.first_key_value(), Some((&1, &"Mercury")));
/// ```
///
/// # Background
///
/// The tree is deliberately left unbalanced: there are no rotations and no
/// height bookkeeping. Keys inserted in random order give a tree of expected
/// logarithmic height, but keys inserted in sorted order produce a tree that
/// is a single path, and each insertion or erasure then costs O(n).
/// [`OrderedMap::height`] makes the shape observable.
///
/// Membership, lookup and size never touch the tree, so they stay O(1) on
/// average regardless of its shape.
///
/// [`BTreeMap::insert`]: alloc::collections::BTreeMap::insert
pub struct OrderedMap<K, V, S = DefaultHashBuilder> {
    index: KeyIndex<K, V, S>,
    tree: OrderTree<K>,
}

/// An iterator over the entries of an `OrderedMap`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use ordered_hash_tree::OrderedMap;
///
/// let map = OrderedMap::from([(2, "b"), (1, "a")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, S = DefaultHashBuilder> {
    keys: InOrder<'a, K>,
    index: &'a KeyIndex<K, V, S>,
}

/// An iterator over the keys of an `OrderedMap`, in ascending order.
///
/// This `struct` is created by the [`keys`] method on [`OrderedMap`]. Keys are
/// read from the tree alone; the hash index is not consulted.
///
/// [`keys`]: OrderedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K> {
    inner: InOrder<'a, K>,
}

/// An iterator over the values of an `OrderedMap`, in order by key.
///
/// This `struct` is created by the [`values`] method on [`OrderedMap`].
///
/// [`values`]: OrderedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, S = DefaultHashBuilder> {
    inner: Iter<'a, K, V, S>,
}

/// An owning iterator over the entries of an `OrderedMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An owning iterator over the keys of an `OrderedMap`, in ascending order.
///
/// This `struct` is created by the [`into_keys`] method on [`OrderedMap`].
///
/// [`into_keys`]: OrderedMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K> {
    inner: alloc::vec::IntoIter<K>,
}

/// An owning iterator over the values of an `OrderedMap`, in order by key.
///
/// This `struct` is created by the [`into_values`] method on [`OrderedMap`].
///
/// [`into_values`]: OrderedMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub fn new() -> OrderedMap<K, V> {
        OrderedMap {
            index: KeyIndex::new(),
            tree: OrderTree::new(),
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Clears the map, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.index.clear();
        self.tree.clear();
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) to create the iterator, where h is the height of the tree; O(1)
    /// amortized per step plus one hash lookup for the value.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            keys: self.tree.iter(),
            index: &self.index,
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let keys: Vec<_> = a.keys().cloned().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            inner: self.tree.iter(),
        }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values { inner: self.iter() }
    }

    /// Creates a consuming iterator visiting all the keys, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let keys: Vec<i32> = a.into_keys().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn into_keys(mut self) -> IntoKeys<K> {
        IntoKeys {
            inner: self.tree.drain_to_vec().into_iter(),
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// The key may be any borrowed form of the map's key type, but [`Hash`] and
    /// [`Eq`] on the borrowed form *must* match those for the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.contains_key(&1), true);
    /// assert_eq!(map.contains_key(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) average.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains(key)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) average.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.find(key)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_key_value(&2), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.find_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// Only the value can be changed; the set of keys, and therefore the
    /// tree, is unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.find_mut(key)
    }

    /// Calls `visit` with every entry, in ascending key order.
    ///
    /// Each key is visited exactly once; its value is fetched from the hash
    /// index as the tree walk reaches it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let map = OrderedMap::from([(10, 100), (5, 50), (15, 150)]);
    /// let mut seen = Vec::new();
    /// map.for_each(|key, value| seen.push((*key, *value)));
    /// assert_eq!(seen, [(5, 50), (10, 100), (15, 150)]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        self.tree.traverse(|key| visit(key, self.index.get(key)));
    }

    /// Returns the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(2, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    #[allow(clippy::must_use_candidate)]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let key = self.tree.first()?;
        Some((key, self.index.get(key)))
    }

    /// Returns the entry with the maximum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.last_key_value(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.last_key_value(), Some((&2, &"a")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    #[allow(clippy::must_use_candidate)]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let key = self.tree.last()?;
        Some((key, self.index.get(key)))
    }

    /// Creates a consuming iterator visiting all the values, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.into_values().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Ord + Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Inserts a key-value pair if the key is not already present.
    ///
    /// Returns `true` if the entry was inserted. If the key is already present
    /// nothing changes: the existing value is kept and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.is_empty());
    ///
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map[&37], "a");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) average for the duplicate check; O(h) to place the key in the
    /// tree, where h is its height.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.index.contains(&key) {
            return false;
        }
        self.index.put(key.clone(), value);
        self.tree.insert(key);
        debug_assert_eq!(self.tree.len(), self.index.len(), "index and tree out of step after insert");
        true
    }

    /// Removes a key from the map, returning its value if the key was present.
    ///
    /// Erasing an absent key is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.erase(&1), Some("a"));
    /// assert_eq!(map.erase(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) average for the membership check; O(h) to unlink the key from the
    /// tree, where h is its height.
    pub fn erase<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord + Hash + Eq,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning its value if the key was present.
    ///
    /// Same as [`erase`](OrderedMap::erase); provided for parity with
    /// `BTreeMap` and `HashMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord + Hash + Eq,
    {
        self.erase(key)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord + Hash + Eq,
    {
        let entry = self.index.remove(key)?;
        self.tree.remove(key);
        debug_assert_eq!(self.tree.len(), self.index.len(), "index and tree out of step after erase");
        Some(entry)
    }

    /// Removes and returns the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// Draining elements in ascending order, while keeping a usable map each iteration.
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// while let Some((key, _val)) = map.pop_first() {
    ///     assert!(map.iter().all(|(k, _v)| *k > key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let key = self.tree.first()?.clone();
        self.remove_entry(&key)
    }

    /// Removes and returns the entry with the maximum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// while let Some((key, _val)) = map.pop_last() {
    ///     assert!(map.iter().all(|(k, _v)| *k < key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let key = self.tree.last()?.clone();
        self.remove_entry(&key)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, erases all pairs `(k, v)` for which `f(&k, &mut v)`
    /// returns `false`. The elements are visited in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// // Keep only the elements with even-numbered keys.
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert!(map.into_iter().eq(vec![(0, 0), (2, 20), (4, 40), (6, 60)]));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let keys: Vec<K> = self.tree.iter().cloned().collect();
        for key in keys {
            let keep = self.index.find_mut(&key).is_none_or(|value| f(&key, value));
            if !keep {
                self.erase(&key);
            }
        }
    }
}

impl<K: Ord + Hash + Eq + Clone, V: Clone, S: Clone> Clone for OrderedMap<K, V, S> {
    fn clone(&self) -> Self {
        OrderedMap {
            index: self.index.clone(),
            tree: self.tree.clone(),
        }
    }
}

impl<K, V, S> PartialEq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, S> Eq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> fmt::Debug for OrderedMap<K, V, S>
where
    K: fmt::Debug + Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    fn default() -> Self {
        OrderedMap::with_hasher(S::default())
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Ord + Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    /// Builds a map from `(key, value)` pairs; for a repeated key the first
    /// value wins.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Ord + Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for OrderedMap<K, V, S>
where
    K: Ord + Hash + Eq + Copy,
    V: Copy,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Iter<'a, K, V, S> {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_hash_tree::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        let keys = self.tree.drain_to_vec();
        let entries: Vec<(K, V)> = keys.into_iter().map(|key| self.index.take(&key)).collect();
        IntoIter {
            inner: entries.into_iter(),
        }
    }
}

impl<K, Q, V, S> Index<&Q> for OrderedMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: ?Sized + Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V>
where
    K: Ord + Hash + Eq + Clone,
{
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let key = self.keys.next()?;
        Some((key, index.get(key)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let key = self.keys.next_back()?;
        Some((key, index.get(key)))
    }
}

impl<K, V, S> ExactSizeIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        self.keys.remaining()
    }
}

impl<K, V, S> FusedIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Clone for Iter<'_, K, V, S> {
    fn clone(&self) -> Self {
        Iter {
            keys: self.keys.clone(),
            index: self.index,
        }
    }
}

impl<K, V, S> fmt::Debug for Iter<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.keys.remaining()).finish()
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {
    fn len(&self) -> usize {
        self.inner.remaining()
    }
}

impl<K> FusedIterator for Keys<'_, K> {}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K> fmt::Debug for Keys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.inner.remaining()).finish()
    }
}

impl<'a, K, V, S> Iterator for Values<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<K, V, S> DoubleEndedIterator for Values<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V, S> ExactSizeIterator for Values<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, S> FusedIterator for Values<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Clone for Values<'_, K, V, S> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V, S> fmt::Debug for Values<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.inner.keys.remaining()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K> Iterator for IntoKeys<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for IntoKeys<K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for IntoKeys<K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for IntoKeys<K> {}

impl<K: fmt::Debug> fmt::Debug for IntoKeys<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for IntoValues<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(_, v)| v)).finish()
    }
}
