use crate::entry::Entry;
use crate::map::{TreeMap, TreeMapIntoIter, TreeMapIter};
use crate::ordered_tree::OrderedTree;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::result;

/// An ordered set backed by any balanced tree implementing `OrderedTree`.
///
/// The set is a thin wrapper around `TreeMap<T, (), B>`. Use the `AvlSet` and `RedBlackSet`
/// aliases to pick a backend.
pub struct TreeSet<T, B> {
    map: TreeMap<T, (), B>,
}

impl<T, B> TreeSet<T, B>
where
    T: Ord,
    B: OrderedTree<Entry<T, ()>>,
{
    /// Constructs a new, empty `TreeSet<T, B>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        TreeSet {
            map: TreeMap::new(),
        }
    }

    /// Inserts a key into the set. Returns `false` and keeps the stored key if an equal key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.map.tree.insert(Entry { key, value: () })
    }

    /// Removes a key from the set. Returns `false` if the key was absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns the stored key. Returns `None` if the key was
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(String::from("a"));
    /// assert_eq!(set.take("a"), Some(String::from("a")));
    /// assert_eq!(set.take("a"), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.remove(key).map(|(key, _)| key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn ceil<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreeSetIter<'_, T, B> {
        TreeSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T, B> IntoIterator for TreeSet<T, B>
where
    T: Ord,
    B: OrderedTree<Entry<T, ()>>,
{
    type IntoIter = TreeSetIntoIter<T, B>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        TreeSetIntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T, B> IntoIterator for &'a TreeSet<T, B>
where
    T: Ord + 'a,
    B: OrderedTree<Entry<T, ()>> + 'a,
{
    type IntoIter = TreeSetIter<'a, T, B>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreeSet<T, B>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct TreeSetIntoIter<T, B>
where
    T: Ord,
    B: OrderedTree<Entry<T, ()>>,
{
    map_iter: TreeMapIntoIter<T, (), B>,
}

impl<T, B> Iterator for TreeSetIntoIter<T, B>
where
    T: Ord,
    B: OrderedTree<Entry<T, ()>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|(key, _)| key)
    }
}

/// An iterator for `TreeSet<T, B>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct TreeSetIter<'a, T, B>
where
    T: Ord + 'a,
    B: OrderedTree<Entry<T, ()>> + 'a,
{
    map_iter: TreeMapIter<'a, T, (), B>,
}

impl<'a, T, B> Iterator for TreeSetIter<'a, T, B>
where
    T: Ord + 'a,
    B: OrderedTree<Entry<T, ()>> + 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|(key, _)| key)
    }
}

impl<T, B> Default for TreeSet<T, B>
where
    T: Ord,
    B: OrderedTree<Entry<T, ()>>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> fmt::Debug for TreeSet<T, B>
where
    T: Ord + fmt::Debug,
    B: OrderedTree<Entry<T, ()>>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, B> PartialEq for TreeSet<T, B>
where
    T: Ord,
    B: OrderedTree<Entry<T, ()>>,
{
    fn eq(&self, other: &TreeSet<T, B>) -> bool {
        self.map == other.map
    }
}

impl<T, B> Eq for TreeSet<T, B>
where
    T: Ord,
    B: OrderedTree<Entry<T, ()>>,
{
}

impl<T, B> FromIterator<T> for TreeSet<T, B>
where
    T: Ord,
    B: OrderedTree<Entry<T, ()>>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = TreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T, B> Extend<T> for TreeSet<T, B>
where
    T: Ord,
    B: OrderedTree<Entry<T, ()>>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T, B> Serialize for TreeSet<T, B>
where
    T: Ord + Serialize,
    B: OrderedTree<Entry<T, ()>>,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_seq(Some(self.len()))?;
        for key in self.iter() {
            state.serialize_element(key)?;
        }
        state.end()
    }
}

struct TreeSetVisitor<T, B> {
    marker: PhantomData<fn() -> TreeSet<T, B>>,
}

impl<'de, T, B> Visitor<'de> for TreeSetVisitor<T, B>
where
    T: Ord + Deserialize<'de>,
    B: OrderedTree<Entry<T, ()>>,
{
    type Value = TreeSet<T, B>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = TreeSet::new();
        while let Some(key) = access.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

impl<'de, T, B> Deserialize<'de> for TreeSet<T, B>
where
    T: Ord + Deserialize<'de>,
    B: OrderedTree<Entry<T, ()>>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeSetVisitor {
            marker: PhantomData,
        })
    }
}
