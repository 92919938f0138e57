//! Self-balancing binary search trees behind a single ordered contract.
//!
//! Two interchangeable backends are provided: an [`AvlTree`](avl_tree::AvlTree), which keeps
//! the heights of sibling subtrees within one of each other, and a
//! [`RedBlackTree`](red_black_tree::RedBlackTree), which keeps the tree approximately balanced
//! using a color bit per node. Both implement [`OrderedTree`], and the [`TreeMap`] and
//! [`TreeSet`] adapters work on top of either.
//!
//! # Examples
//!
//! ```
//! use balanced_trees::avl_tree::AvlMap;
//! use balanced_trees::red_black_tree::RedBlackMap;
//!
//! let mut avl = AvlMap::new();
//! let mut red_black = RedBlackMap::new();
//! for key in 0..100 {
//!     avl.insert(key, key * 2);
//!     red_black.insert(key, key * 2);
//! }
//!
//! assert!(avl.iter().eq(red_black.iter()));
//! assert_eq!(avl.floor(&50), red_black.floor(&50));
//! ```

mod arena;
mod element;
mod entry;
mod error;
mod map;
mod ordered_tree;
mod set;

pub mod avl_tree;
pub mod red_black_tree;

pub use crate::element::Element;
pub use crate::entry::Entry;
pub use crate::error::{Error, Result};
pub use crate::map::{TreeMap, TreeMapIntoIter, TreeMapIter};
pub use crate::ordered_tree::OrderedTree;
pub use crate::set::{TreeSet, TreeSetIntoIter, TreeSetIter};
