//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.

mod node;
mod tree;

pub use self::tree::{RedBlackTree, RedBlackTreeIntoIter, RedBlackTreeIter};

use crate::entry::Entry;
use crate::map::TreeMap;
use crate::set::TreeSet;

/// An ordered map implemented using a red black tree.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub type RedBlackMap<K, V> = TreeMap<K, V, RedBlackTree<Entry<K, V>>>;

/// An ordered set implemented using a red black tree.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub type RedBlackSet<T> = TreeSet<T, RedBlackTree<Entry<T, ()>>>;
