use crate::element::Element;
use crate::error::Result;
use std::cmp::Ordering;

/// The contract shared by every balanced tree in this crate: an ordered collection of
/// elements keyed by `Element::compare`.
///
/// Methods suffixed with `_by` take a closure that returns the ordering of the search key
/// relative to a stored element, i.e. the result of `key.cmp(element)`. This lets adapters look
/// elements up by a borrowed key without constructing a full element.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlTree;
/// use balanced_trees::red_black_tree::RedBlackTree;
/// use balanced_trees::OrderedTree;
///
/// fn fill<T: OrderedTree<u32>>(tree: &mut T) {
///     for key in &[5, 1, 4, 1, 3] {
///         tree.insert(*key);
///     }
/// }
///
/// let mut avl = AvlTree::new();
/// let mut red_black = RedBlackTree::new();
/// fill(&mut avl);
/// fill(&mut red_black);
///
/// assert!(avl.iter().eq(red_black.iter()));
/// assert_eq!(avl.len(), 4);
/// ```
pub trait OrderedTree<E>: Default + IntoIterator<Item = E>
where
    E: Element,
{
    /// In-order iterator over borrowed elements.
    type Iter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    /// Inserts an element. Returns `false` and leaves the tree untouched if an equal element is
    /// already present.
    fn insert(&mut self, element: E) -> bool;

    /// Removes and returns the element matched by `cmp`.
    fn take_by<F>(&mut self, cmp: F) -> Option<E>
    where
        F: FnMut(&E) -> Ordering;

    /// Returns the element matched by `cmp`.
    fn search_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering;

    /// Returns a mutable reference to the element matched by `cmp`. The ordering of the element
    /// must not be changed through the returned reference.
    fn search_by_mut<F>(&mut self, cmp: F) -> Option<&mut E>
    where
        F: FnMut(&E) -> Ordering;

    /// Returns the greatest element that is less than or equal to the search key.
    fn floor_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering;

    /// Returns the least element that is greater than or equal to the search key.
    fn ceil_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering;

    fn min(&self) -> Option<&E>;

    fn max(&self) -> Option<&E>;

    fn len(&self) -> usize;

    fn clear(&mut self);

    fn iter(&self) -> Self::Iter<'_>;

    /// Checks every structural invariant of the tree, returning the first violation found.
    fn validate(&self) -> Result<()>;

    /// Removes and returns the element equal to `element`.
    fn take(&mut self, element: &E) -> Option<E> {
        self.take_by(|other| element.compare(other))
    }

    /// Removes the element equal to `element`. Returns `false` if it was absent.
    fn remove(&mut self, element: &E) -> bool {
        self.take(element).is_some()
    }

    fn search(&self, element: &E) -> Option<&E> {
        self.search_by(|other| element.compare(other))
    }

    fn contains(&self, element: &E) -> bool {
        self.search(element).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
