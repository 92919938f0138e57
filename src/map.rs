use crate::entry::Entry;
use crate::ordered_tree::OrderedTree;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};
use std::result;

/// An ordered map backed by any balanced tree implementing `OrderedTree`.
///
/// Each key-value pair is stored as an `Entry<K, V>`, ordered by its key. Use the `AvlMap` and
/// `RedBlackMap` aliases to pick a backend.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlTree;
/// use balanced_trees::{Entry, TreeMap};
///
/// let mut map: TreeMap<u32, &str, AvlTree<Entry<u32, &str>>> = TreeMap::new();
/// map.insert(2, "two");
/// map.insert(1, "one");
///
/// assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&1, &"one"), (&2, &"two")]);
/// ```
pub struct TreeMap<K, V, B> {
    pub(crate) tree: B,
    marker: PhantomData<(K, V)>,
}

impl<K, V, B> TreeMap<K, V, B>
where
    K: Ord,
    B: OrderedTree<Entry<K, V>>,
{
    /// Constructs a new, empty `TreeMap<K, V, B>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        TreeMap {
            tree: B::default(),
            marker: PhantomData,
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will
    /// return and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(entry) = self.tree.search_by_mut(|entry| key.cmp(&entry.key)) {
            let Entry { key, value } = mem::replace(entry, Entry { key, value });
            return Some((key, value));
        }
        self.tree.insert(Entry { key, value });
        None
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .take_by(|entry| key.cmp(entry.key.borrow()))
            .map(|Entry { key, value }| (key, value))
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(String::from("a"), 1);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("b"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .search_by(|entry| key.cmp(entry.key.borrow()))
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .search_by_mut(|entry| key.cmp(entry.key.borrow()))
            .map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .floor_by(|entry| key.cmp(entry.key.borrow()))
            .map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .ceil_by(|entry| key.cmp(entry.key.borrow()))
            .map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        self.tree.min().map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&K> {
        self.tree.max().map(|entry| &entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreeMapIter<'_, K, V, B> {
        TreeMapIter {
            inner: self.tree.iter(),
        }
    }
}

impl<K, V, B> IntoIterator for TreeMap<K, V, B>
where
    K: Ord,
    B: OrderedTree<Entry<K, V>>,
{
    type IntoIter = TreeMapIntoIter<K, V, B>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        TreeMapIntoIter {
            inner: self.tree.into_iter(),
            marker: PhantomData,
        }
    }
}

impl<'a, K, V, B> IntoIterator for &'a TreeMap<K, V, B>
where
    K: Ord + 'a,
    V: 'a,
    B: OrderedTree<Entry<K, V>> + 'a,
{
    type IntoIter = TreeMapIter<'a, K, V, B>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreeMap<K, V, B>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct TreeMapIntoIter<K, V, B>
where
    K: Ord,
    B: OrderedTree<Entry<K, V>>,
{
    inner: <B as IntoIterator>::IntoIter,
    marker: PhantomData<(K, V)>,
}

impl<K, V, B> Iterator for TreeMapIntoIter<K, V, B>
where
    K: Ord,
    B: OrderedTree<Entry<K, V>>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|Entry { key, value }| (key, value))
    }
}

/// An iterator for `TreeMap<K, V, B>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct TreeMapIter<'a, K, V, B>
where
    K: Ord + 'a,
    V: 'a,
    B: OrderedTree<Entry<K, V>> + 'a,
{
    inner: B::Iter<'a>,
}

impl<'a, K, V, B> Iterator for TreeMapIter<'a, K, V, B>
where
    K: Ord + 'a,
    V: 'a,
    B: OrderedTree<Entry<K, V>> + 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V, B> Default for TreeMap<K, V, B>
where
    K: Ord,
    B: OrderedTree<Entry<K, V>>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, B> fmt::Debug for TreeMap<K, V, B>
where
    K: Ord + fmt::Debug,
    V: fmt::Debug,
    B: OrderedTree<Entry<K, V>>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, B> PartialEq for TreeMap<K, V, B>
where
    K: Ord,
    V: PartialEq,
    B: OrderedTree<Entry<K, V>>,
{
    fn eq(&self, other: &TreeMap<K, V, B>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, B> Eq for TreeMap<K, V, B>
where
    K: Ord,
    V: Eq,
    B: OrderedTree<Entry<K, V>>,
{
}

impl<K, V, B> FromIterator<(K, V)> for TreeMap<K, V, B>
where
    K: Ord,
    B: OrderedTree<Entry<K, V>>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = TreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V, B> Extend<(K, V)> for TreeMap<K, V, B>
where
    K: Ord,
    B: OrderedTree<Entry<K, V>>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, B, Q> Index<&'a Q> for TreeMap<K, V, B>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    B: OrderedTree<Entry<K, V>>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, K, V, B, Q> IndexMut<&'a Q> for TreeMap<K, V, B>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    B: OrderedTree<Entry<K, V>>,
{
    fn index_mut(&mut self, key: &Q) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<K, V, B> Serialize for TreeMap<K, V, B>
where
    K: Ord + Serialize,
    V: Serialize,
    B: OrderedTree<Entry<K, V>>,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

struct TreeMapVisitor<K, V, B> {
    marker: PhantomData<fn() -> TreeMap<K, V, B>>,
}

impl<'de, K, V, B> Visitor<'de> for TreeMapVisitor<K, V, B>
where
    K: Ord + Deserialize<'de>,
    V: Deserialize<'de>,
    B: OrderedTree<Entry<K, V>>,
{
    type Value = TreeMap<K, V, B>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = TreeMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V, B> Deserialize<'de> for TreeMap<K, V, B>
where
    K: Ord + Deserialize<'de>,
    V: Deserialize<'de>,
    B: OrderedTree<Entry<K, V>>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TreeMapVisitor {
            marker: PhantomData,
        })
    }
}
