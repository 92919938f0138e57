//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod tree;

pub use self::tree::{AvlTree, AvlTreeIntoIter, AvlTreeIter};

use crate::entry::Entry;
use crate::map::TreeMap;
use crate::set::TreeSet;

/// An ordered map implemented using an avl tree.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
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
pub type AvlMap<K, V> = TreeMap<K, V, AvlTree<Entry<K, V>>>;

/// An ordered set implemented using an avl tree.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
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
pub type AvlSet<T> = TreeSet<T, AvlTree<Entry<T, ()>>>;
