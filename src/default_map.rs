use std::borrow::Borrow;
use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::hash::Hash;

/// A `HashMap` that fills in missing keys. Looking a key up through
/// [`get_or_default`] inserts the value returned by the map's factory
/// when the key is absent; the other lookups never insert.
///
/// # Examples
///
/// ```
/// use named_collections::DefaultMap;
///
/// let mut counts: DefaultMap<&str, usize> = DefaultMap::new();
///
/// for word in "a b a c a".split(' ') {
///     *counts.get_or_default(word) += 1;
/// }
///
/// assert_eq!(Some(&3), counts.get("a"));
/// assert_eq!(None, counts.get("d"));
/// ```
///
/// [`get_or_default`]: #method.get_or_default
#[derive(Clone)]
pub struct DefaultMap<K, V, F = fn() -> V> {
    map: HashMap<K, V>,
    factory: F,
}

impl<K, V> DefaultMap<K, V>
where
    K: Eq + Hash,
    V: Default,
{
    /// Creates an empty map whose missing values are `V::default()`.
    pub fn new() -> Self {
        DefaultMap {
            map: HashMap::new(),
            factory: V::default,
        }
    }
}

impl<K, V> Default for DefaultMap<K, V>
where
    K: Eq + Hash,
    V: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, F> DefaultMap<K, V, F>
where
    K: Eq + Hash,
    F: Fn() -> V,
{
    /// Creates an empty map whose missing values are produced by
    /// `factory`.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::DefaultMap;
    ///
    /// let mut groups = DefaultMap::with_factory(|| vec![0]);
    ///
    /// groups.get_or_default("odd").push(1);
    /// groups.get_or_default("odd").push(3);
    ///
    /// assert_eq!(Some(&vec![0, 1, 3]), groups.get("odd"));
    /// ```
    pub fn with_factory(factory: F) -> Self {
        DefaultMap {
            map: HashMap::new(),
            factory,
        }
    }

    /// The function producing values for missing keys.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// The value for `key`, inserting one from the factory first if the
    /// key is absent.
    pub fn get_or_default(&mut self, key: K) -> &mut V {
        let factory = &self.factory;
        self.map.entry(key).or_insert_with(factory)
    }

    /// The value for `key`, without inserting anything.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// The value for `key` as a mutable reference, without inserting
    /// anything.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get_mut(key)
    }

    /// True if `key` has a value.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Set the value for `key`, returning the previous one.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Remove the value for `key` and return it.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(key)
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no key has a value.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Iterate over keys and values, in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.map.iter()
    }

    /// Iterate over keys, in arbitrary order.
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.map.keys()
    }

    /// Iterate over values, in arbitrary order.
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.map.values()
    }

    /// Consumes the map, returning the underlying `HashMap`.
    pub fn into_inner(self) -> HashMap<K, V> {
        self.map
    }
}

impl<K, V, F> fmt::Debug for DefaultMap<K, V, F>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K, V, F> Extend<(K, V)> for DefaultMap<K, V, F>
where
    K: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.map.extend(iter)
    }
}

impl<'m, K, V, F> IntoIterator for &'m DefaultMap<K, V, F> {
    type Item = (&'m K, &'m V);
    type IntoIter = hash_map::Iter<'m, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K, V, F> IntoIterator for DefaultMap<K, V, F> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}
