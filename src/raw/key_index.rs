use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use hashbrown::{DefaultHashBuilder, HashMap};

/// Hash index backing `OrderedMap`: the authoritative store for values,
/// membership and entry count.
#[derive(Clone)]
pub(crate) struct KeyIndex<K, V, S = DefaultHashBuilder> {
    map: HashMap<K, V, S>,
}

impl<K, V> KeyIndex<K, V> {
    pub(crate) fn new() -> Self {
        Self { map: HashMap::new() }
    }
}

impl<K, V, S> KeyIndex<K, V, S> {
    pub(crate) fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: HashMap::with_hasher(hash_builder),
        }
    }

    pub(crate) fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.map.capacity()
    }

    pub(crate) fn hasher(&self) -> &S {
        self.map.hasher()
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K, V, S> KeyIndex<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Stores `value` under `key` unless the key is already present.
    ///
    /// Returns `true` if the entry was inserted. An existing value is never
    /// overwritten.
    pub(crate) fn put(&mut self, key: K, value: V) -> bool {
        match self.map.entry(key) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(vacant) => {
                vacant.insert(value);
                true
            }
        }
    }

    /// Removes `key`, returning the stored key and value if it was present.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove_entry(key)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the value stored under a key known to be present.
    ///
    /// # Panics
    ///
    /// Panics if `key` is absent.
    #[inline]
    pub(crate) fn get<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).expect("`KeyIndex::get()` - `key` is absent!")
    }

    /// Removes a key known to be present.
    ///
    /// # Panics
    ///
    /// Panics if `key` is absent.
    pub(crate) fn take<Q>(&mut self, key: &Q) -> (K, V)
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove_entry(key).expect("`KeyIndex::take()` - `key` is absent!")
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key)
    }

    pub(crate) fn find_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_key_value(key)
    }

    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_mut(key)
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.map.shrink_to_fit();
    }
}
