use crate::arena::{Arena, NodeId};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::ordered_tree::OrderedTree;
use crate::red_black_tree::node::{self, Color, Link, Node};
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// A self-balancing binary search tree that uses a color bit to keep the tree approximately
/// balanced during insertions and deletions.
///
/// Nodes live in an arena and refer to their parent and children by index, so the parent
/// back-reference used by the fixup algorithms never owns anything. Empty subtrees are
/// sentinel leaves: they are black, carry no element and are represented by an absent link.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// assert_eq!(tree.root(), Some(&20));
/// assert_eq!(tree.black_height(), 1);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&10, &20, &30]);
///
/// assert!(tree.remove(&20));
/// assert!(!tree.remove(&20));
/// assert_eq!(tree.search(&30), Some(&30));
/// ```
pub struct RedBlackTree<E> {
    arena: Arena<Node<E>>,
    root: Link,
}

impl<E> RedBlackTree<E> {
    /// Constructs a new, empty `RedBlackTree<E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RedBlackTree {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Constructs a new, empty `RedBlackTree<E>` with room for `capacity` elements before its
    /// node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::with_capacity(1024);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackTree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all elements.
    pub fn clear(&mut self) {
        debug!("red-black: clearing {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    /// Returns the element stored at the root of the tree.
    pub fn root(&self) -> Option<&E> {
        self.root.map(|id| &self.arena[id].element)
    }

    /// Returns the number of black nodes on any path from the root down to a sentinel leaf. An
    /// empty tree has a black height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = (0..7).collect();
    /// assert_eq!(tree.black_height(), 2);
    /// ```
    pub fn black_height(&self) -> usize {
        let mut curr = self.root;
        let mut black_height = 0;
        while let Some(id) = curr {
            if self.arena[id].color == Color::Black {
                black_height += 1;
            }
            curr = self.arena[id].left;
        }
        black_height
    }

    /// Formats the nodes of the tree in pre-order as `element:color`, where the color is `B` or
    /// `R`, separated by spaces. Sentinel leaves are omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = vec![10, 20, 30].into_iter().collect();
    /// assert_eq!(tree.pre_order_string(), "20:B 10:R 30:R");
    /// ```
    pub fn pre_order_string(&self) -> String
    where
        E: fmt::Debug,
    {
        let mut nodes = Vec::new();
        let mut stack = Vec::new();
        stack.extend(self.root);
        while let Some(id) = stack.pop() {
            let node = &self.arena[id];
            let color = match node.color {
                Color::Red => 'R',
                Color::Black => 'B',
            };
            nodes.push(format!("{:?}:{}", node.element, color));
            stack.extend(node.right);
            stack.extend(node.left);
        }
        nodes.join(" ")
    }

    /// Returns the minimum element of the tree.
    pub fn min(&self) -> Option<&E> {
        self.root.map(|id| &self.arena[self.subtree_min(id)].element)
    }

    /// Returns the maximum element of the tree.
    pub fn max(&self) -> Option<&E> {
        self.root.map(|id| &self.arena[self.subtree_max(id)].element)
    }

    /// Returns an iterator over the tree. The iterator yields elements using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackTreeIter<'_, E> {
        RedBlackTreeIter {
            arena: &self.arena,
            current: self.root,
            stack: Vec::new(),
        }
    }

    /// Returns the element matched by `cmp`, a closure returning the ordering of the search key
    /// relative to the element it is given.
    pub fn search_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        self.find_by(cmp).map(|id| &self.arena[id].element)
    }

    /// Removes and returns the element matched by `cmp`.
    ///
    /// A node with two children takes over the element of its in-order predecessor, and the
    /// predecessor's node is spliced out instead.
    pub fn take_by<F>(&mut self, cmp: F) -> Option<E>
    where
        F: FnMut(&E) -> Ordering,
    {
        let target = self.find_by(cmp)?;
        let element = match (self.arena[target].left, self.arena[target].right) {
            (Some(left), Some(_)) => {
                let predecessor = self.subtree_max(left);
                let predecessor_element = self.remove_node(predecessor);
                mem::replace(&mut self.arena[target].element, predecessor_element)
            },
            _ => self.remove_node(target),
        };
        Some(element)
    }

    /// Returns the greatest element that is less than or equal to the search key matched by `cmp`.
    pub fn floor_by<F>(&self, mut cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        let mut curr = self.root;
        let mut floor = None;
        while let Some(id) = curr {
            let node = &self.arena[id];
            match cmp(&node.element) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => {
                    floor = Some(&node.element);
                    curr = node.right;
                },
                Ordering::Equal => return Some(&node.element),
            }
        }
        floor
    }

    /// Returns the least element that is greater than or equal to the search key matched by `cmp`.
    pub fn ceil_by<F>(&self, mut cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        let mut curr = self.root;
        let mut ceil = None;
        while let Some(id) = curr {
            let node = &self.arena[id];
            match cmp(&node.element) {
                Ordering::Less => {
                    ceil = Some(&node.element);
                    curr = node.left;
                },
                Ordering::Greater => curr = node.right,
                Ordering::Equal => return Some(&node.element),
            }
        }
        ceil
    }

    fn find_by<F>(&self, mut cmp: F) -> Option<NodeId>
    where
        F: FnMut(&E) -> Ordering,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            curr = match cmp(&self.arena[id].element) {
                Ordering::Less => self.arena[id].left,
                Ordering::Greater => self.arena[id].right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    fn subtree_min(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    fn subtree_max(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    fn color(&self, link: Link) -> Color {
        match link {
            Some(id) => self.arena[id].color,
            None => Color::Black,
        }
    }

    fn is_red(&self, link: Link) -> bool {
        self.color(link) == Color::Red
    }

    // Points `parent`'s link to `old` at `new` instead, or makes `new` the root when `old` has
    // no parent.
    fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
        }
    }

    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let parent = self.arena[id].parent;
        let pivot = node::rotate_left(&mut self.arena, id);
        self.replace_child(parent, id, Some(pivot));
        pivot
    }

    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let parent = self.arena[id].parent;
        let pivot = node::rotate_right(&mut self.arena, id);
        self.replace_child(parent, id, Some(pivot));
        pivot
    }

    fn insert_fixup(&mut self, mut id: NodeId) {
        loop {
            let parent = match self.arena[id].parent {
                None => {
                    trace!("red-black insert: case 1 at {:?}", id);
                    self.arena[id].color = Color::Black;
                    return;
                },
                Some(parent) => parent,
            };

            if self.arena[parent].color == Color::Black {
                return;
            }

            let grandparent = self.arena[parent]
                .parent
                .expect("Expected a red node to have a parent.");
            let parent_is_left = self.arena[grandparent].left == Some(parent);
            let uncle = if parent_is_left {
                self.arena[grandparent].right
            } else {
                self.arena[grandparent].left
            };

            if self.is_red(uncle) {
                trace!("red-black insert: case 3 at {:?}", id);
                self.arena[parent].color = Color::Black;
                if let Some(uncle) = uncle {
                    self.arena[uncle].color = Color::Black;
                }
                self.arena[grandparent].color = Color::Red;
                id = grandparent;
                continue;
            }

            let parent = if parent_is_left && self.arena[parent].right == Some(id) {
                trace!("red-black insert: case 4 at {:?}", id);
                self.rotate_left(parent)
            } else if !parent_is_left && self.arena[parent].left == Some(id) {
                trace!("red-black insert: case 4 at {:?}", id);
                self.rotate_right(parent)
            } else {
                parent
            };

            trace!("red-black insert: case 5 at {:?}", grandparent);
            self.arena[parent].color = Color::Black;
            self.arena[grandparent].color = Color::Red;
            if parent_is_left {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }
            return;
        }
    }

    // Splices out a node with at most one child and returns its element.
    fn remove_node(&mut self, id: NodeId) -> E {
        let (parent, child) = {
            let node = &self.arena[id];
            debug_assert!(node.left.is_none() || node.right.is_none());
            (node.parent, node.left.or(node.right))
        };

        if let Some(child) = child {
            self.arena[child].parent = parent;
        }
        self.replace_child(parent, id, child);

        let node = self.arena.free(id);
        if node.color == Color::Black {
            match child {
                Some(child) if self.arena[child].color == Color::Red => {
                    self.arena[child].color = Color::Black;
                },
                _ => self.remove_fixup(child, parent),
            }
        }
        node.element
    }

    // `link` is one black short on every path through it. `parent` is passed separately since
    // `link` may be a sentinel.
    fn remove_fixup(&mut self, mut link: Link, mut parent: Link) {
        loop {
            let parent_id = match parent {
                None => {
                    trace!("red-black remove: case 1");
                    if let Some(id) = link {
                        self.arena[id].color = Color::Black;
                    }
                    return;
                },
                Some(parent_id) => parent_id,
            };

            let is_left = self.arena[parent_id].left == link;
            let mut sibling = self.sibling(parent_id, is_left);

            if self.arena[sibling].color == Color::Red {
                trace!("red-black remove: case 2 at {:?}", parent_id);
                self.arena[sibling].color = Color::Black;
                self.arena[parent_id].color = Color::Red;
                if is_left {
                    self.rotate_left(parent_id);
                } else {
                    self.rotate_right(parent_id);
                }
                sibling = self.sibling(parent_id, is_left);
            }

            let (near, far) = if is_left {
                (self.arena[sibling].left, self.arena[sibling].right)
            } else {
                (self.arena[sibling].right, self.arena[sibling].left)
            };

            if !self.is_red(near) && !self.is_red(far) {
                if self.arena[parent_id].color == Color::Black {
                    trace!("red-black remove: case 3 at {:?}", parent_id);
                    self.arena[sibling].color = Color::Red;
                    link = Some(parent_id);
                    parent = self.arena[parent_id].parent;
                    continue;
                }

                trace!("red-black remove: case 4 at {:?}", parent_id);
                self.arena[sibling].color = Color::Red;
                self.arena[parent_id].color = Color::Black;
                return;
            }

            if !self.is_red(far) {
                trace!("red-black remove: case 5 at {:?}", sibling);
                let near = near.expect("Expected the near nephew to be red.");
                self.arena[sibling].color = Color::Red;
                self.arena[near].color = Color::Black;
                sibling = if is_left {
                    self.rotate_right(sibling)
                } else {
                    self.rotate_left(sibling)
                };
            }

            trace!("red-black remove: case 6 at {:?}", parent_id);
            let far = if is_left {
                self.arena[sibling].right
            } else {
                self.arena[sibling].left
            };
            let far = far.expect("Expected the far nephew to be red.");
            let parent_color = self.arena[parent_id].color;
            self.arena[sibling].color = parent_color;
            self.arena[parent_id].color = Color::Black;
            self.arena[far].color = Color::Black;
            if is_left {
                self.rotate_left(parent_id);
            } else {
                self.rotate_right(parent_id);
            }
            return;
        }
    }

    fn sibling(&self, parent: NodeId, is_left: bool) -> NodeId {
        let sibling = if is_left {
            self.arena[parent].right
        } else {
            self.arena[parent].left
        };
        sibling.expect("Expected a node that is short a black node to have a sibling.")
    }
}

impl<E> RedBlackTree<E>
where
    E: Element,
{
    /// Inserts an element into the tree. Returns `false` if an equal element already exists, in
    /// which case the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: E) -> bool {
        let mut parent = None;
        let mut curr = self.root;
        let mut ordering = Ordering::Equal;
        while let Some(id) = curr {
            ordering = element.compare(&self.arena[id].element);
            parent = curr;
            curr = match ordering {
                Ordering::Less => self.arena[id].left,
                Ordering::Greater => self.arena[id].right,
                Ordering::Equal => return false,
            };
        }

        let id = self.arena.allocate(Node::new(element, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) => {
                if ordering == Ordering::Less {
                    self.arena[parent].left = Some(id);
                } else {
                    self.arena[parent].right = Some(id);
                }
            },
        }

        self.insert_fixup(id);
        true
    }

    /// Removes an element from the tree. Returns `false` if the element does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove(&mut self, element: &E) -> bool {
        self.take(element).is_some()
    }

    /// Removes and returns the element equal to `element`.
    pub fn take(&mut self, element: &E) -> Option<E> {
        self.take_by(|other| element.compare(other))
    }

    /// Returns the stored element equal to `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.search(&0), None);
    /// assert_eq!(tree.search(&1), Some(&1));
    /// ```
    pub fn search(&self, element: &E) -> Option<&E> {
        self.search_by(|other| element.compare(other))
    }

    /// Checks if an element equal to `element` exists in the tree.
    pub fn contains(&self, element: &E) -> bool {
        self.search(element).is_some()
    }

    /// Checks ordering, parent links and the red-black coloring rules of every node, and the
    /// tracked length.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = (0..100).collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.is_red(self.root) {
            return Err(Error::RedRoot);
        }
        let mut count = 0;
        self.check(self.root, None, None, None, &mut count)?;
        if count != self.len() {
            return Err(Error::LengthMismatch { expected: self.len(), actual: count });
        }
        Ok(())
    }

    // Returns the black height of the subtree at `link`.
    fn check(
        &self,
        link: Link,
        parent: Link,
        lower: Option<&E>,
        upper: Option<&E>,
        count: &mut usize,
    ) -> Result<usize> {
        let id = match link {
            None => return Ok(0),
            Some(id) => id,
        };
        let node = &self.arena[id];
        *count += 1;

        if node.parent != parent {
            return Err(Error::BrokenParentLink);
        }

        let above_lower = lower.map_or(true, |lower| node.element.compare(lower) == Ordering::Greater);
        let below_upper = upper.map_or(true, |upper| node.element.compare(upper) == Ordering::Less);
        if !above_lower || !below_upper {
            return Err(Error::OutOfOrder);
        }

        if node.color == Color::Red && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(Error::RedViolation);
        }

        let left = self.check(node.left, link, lower, Some(&node.element), count)?;
        let right = self.check(node.right, link, Some(&node.element), upper, count)?;
        if left != right {
            return Err(Error::BlackHeightMismatch { left, right });
        }

        match node.color {
            Color::Black => Ok(left + 1),
            Color::Red => Ok(left),
        }
    }
}

impl<E> OrderedTree<E> for RedBlackTree<E>
where
    E: Element,
{
    type Iter<'a> = RedBlackTreeIter<'a, E>
    where
        E: 'a;

    fn insert(&mut self, element: E) -> bool {
        RedBlackTree::insert(self, element)
    }

    fn take_by<F>(&mut self, cmp: F) -> Option<E>
    where
        F: FnMut(&E) -> Ordering,
    {
        RedBlackTree::take_by(self, cmp)
    }

    fn search_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        RedBlackTree::search_by(self, cmp)
    }

    fn search_by_mut<F>(&mut self, cmp: F) -> Option<&mut E>
    where
        F: FnMut(&E) -> Ordering,
    {
        let id = self.find_by(cmp)?;
        Some(&mut self.arena[id].element)
    }

    fn floor_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        RedBlackTree::floor_by(self, cmp)
    }

    fn ceil_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        RedBlackTree::ceil_by(self, cmp)
    }

    fn min(&self) -> Option<&E> {
        RedBlackTree::min(self)
    }

    fn max(&self) -> Option<&E> {
        RedBlackTree::max(self)
    }

    fn len(&self) -> usize {
        RedBlackTree::len(self)
    }

    fn clear(&mut self) {
        RedBlackTree::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        RedBlackTree::iter(self)
    }

    fn validate(&self) -> Result<()> {
        RedBlackTree::validate(self)
    }
}

impl<E> Default for RedBlackTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for RedBlackTree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E> FromIterator<E> for RedBlackTree<E>
where
    E: Element,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

impl<E> Extend<E> for RedBlackTree<E>
where
    E: Element,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = E>,
    {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<E> IntoIterator for RedBlackTree<E> {
    type IntoIter = RedBlackTreeIntoIter<E>;
    type Item = E;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            arena: self.arena,
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, E> IntoIterator for &'a RedBlackTree<E>
where
    E: 'a,
{
    type IntoIter = RedBlackTreeIter<'a, E>;
    type Item = &'a E;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackTree<E>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned elements.
pub struct RedBlackTreeIntoIter<E> {
    arena: Arena<Node<E>>,
    current: Link,
    stack: Vec<NodeId>,
}

impl<E> Iterator for RedBlackTreeIntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.current = self.arena[id].left;
            self.stack.push(id);
        }
        self.stack.pop().map(|id| {
            let Node { element, right, .. } = self.arena.free(id);
            self.current = right;
            element
        })
    }
}

/// An iterator for `RedBlackTree<E>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct RedBlackTreeIter<'a, E>
where
    E: 'a,
{
    arena: &'a Arena<Node<E>>,
    current: Link,
    stack: Vec<NodeId>,
}

impl<'a, E> Iterator for RedBlackTreeIter<'a, E>
where
    E: 'a,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while let Some(id) = self.current {
            self.current = arena[id].left;
            self.stack.push(id);
        }
        let id = self.stack.pop()?;
        self.current = arena[id].right;
        Some(&arena[id].element)
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackTree;
    use crate::error::Error;
    use crate::red_black_tree::node::Color;
    use rand::{Rng, SeedableRng, XorShiftRng};

    fn color_of(tree: &RedBlackTree<u32>, element: u32) -> Option<Color> {
        tree.find_by(|other| element.cmp(other)).map(|id| tree.arena[id].color)
    }

    fn children_of(tree: &RedBlackTree<u32>, element: u32) -> (Option<u32>, Option<u32>) {
        let id = tree.find_by(|other| element.cmp(other)).unwrap();
        let node = &tree.arena[id];
        (
            node.left.map(|id| tree.arena[id].element),
            node.right.map(|id| tree.arena[id].element),
        )
    }

    #[test]
    fn test_len_empty() {
        let tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.black_height(), 0);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_first_insert_is_black_root() {
        let mut tree = RedBlackTree::new();
        tree.insert(7);
        assert_eq!(color_of(&tree, 7), Some(Color::Black));
        assert_eq!(tree.black_height(), 1);
    }

    #[test]
    fn test_ascending_inserts() {
        let mut tree = RedBlackTree::new();
        for key in &[10, 20, 30] {
            tree.insert(*key);
            assert_eq!(tree.validate(), Ok(()));
        }

        assert_eq!(tree.root(), Some(&20));
        assert_eq!(color_of(&tree, 20), Some(Color::Black));
        assert_eq!(color_of(&tree, 10), Some(Color::Red));
        assert_eq!(color_of(&tree, 30), Some(Color::Red));
        assert_eq!(children_of(&tree, 10), (None, None));
        assert_eq!(children_of(&tree, 30), (None, None));
        assert_eq!(tree.black_height(), 1);
    }

    #[test]
    fn test_insert_recolors_red_uncle() {
        let mut tree = RedBlackTree::new();
        for key in &[20, 10, 30, 5] {
            tree.insert(*key);
        }
        assert_eq!(color_of(&tree, 20), Some(Color::Black));
        assert_eq!(color_of(&tree, 10), Some(Color::Black));
        assert_eq!(color_of(&tree, 30), Some(Color::Black));
        assert_eq!(color_of(&tree, 5), Some(Color::Red));
        assert_eq!(tree.black_height(), 2);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_insert_inner_grandchild() {
        let mut tree = RedBlackTree::new();
        for key in &[30, 10, 20] {
            tree.insert(*key);
        }
        assert_eq!(tree.root(), Some(&20));
        assert_eq!(children_of(&tree, 20), (Some(10), Some(30)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_rotation_at_root_updates_root() {
        let mut tree = RedBlackTree::new();
        for key in &[1, 2, 3] {
            tree.insert(*key);
        }
        let root = tree.root.unwrap();
        let pivot = tree.rotate_left(root);
        assert_eq!(tree.root, Some(pivot));
        assert_eq!(tree.root(), Some(&3));
        assert_eq!(tree.arena[pivot].parent, None);
        assert_eq!(children_of(&tree, 3), (Some(2), None));
        assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rotation_below_root_reattaches() {
        let mut tree: RedBlackTree<u32> = (1..8).collect();
        assert_eq!(tree.root(), Some(&2));
        let six = tree.find_by(|other| 6u32.cmp(other)).unwrap();
        let four = tree.find_by(|other| 4u32.cmp(other)).unwrap();
        assert_eq!(tree.arena[six].parent, Some(four));

        let pivot = tree.rotate_right(six);
        assert_eq!(tree.arena[four].right, Some(pivot));
        assert_eq!(tree.arena[pivot].parent, Some(four));
        assert_eq!(children_of(&tree, 5), (None, Some(6)));
        assert_eq!(tree.root(), Some(&2));
        assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), (1..8).collect::<Vec<u32>>());
    }

    #[test]
    fn test_duplicate_insert_keeps_colors() {
        let mut tree = RedBlackTree::new();
        for key in &[10, 20, 30] {
            tree.insert(*key);
        }
        assert!(!tree.insert(10));
        assert_eq!(color_of(&tree, 10), Some(Color::Red));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_remove_red_leaf() {
        let mut tree: RedBlackTree<u32> = vec![10, 20, 30].into_iter().collect();
        assert!(tree.remove(&30));
        assert_eq!(children_of(&tree, 20), (Some(10), None));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_remove_black_with_red_child() {
        let mut tree: RedBlackTree<u32> = vec![20, 10, 30, 5].into_iter().collect();
        assert!(tree.remove(&10));
        assert_eq!(color_of(&tree, 5), Some(Color::Black));
        assert_eq!(children_of(&tree, 20), (Some(5), Some(30)));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_remove_black_leaf_red_parent() {
        let mut tree: RedBlackTree<u32> = (1..=6).collect();
        // 4 is red with black children 3 and 5, and 6 hangs red below 5
        assert_eq!(color_of(&tree, 4), Some(Color::Red));
        assert!(tree.remove(&6));
        assert!(tree.remove(&5));
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_two_children_uses_predecessor() {
        // 2 is the black root with black child 1 and red child 4
        let mut tree: RedBlackTree<u32> = (1..8).collect();
        assert!(tree.remove(&2));
        assert_eq!(tree.root(), Some(&4));
        assert_eq!(children_of(&tree, 4), (Some(1), Some(6)));
        assert_eq!(children_of(&tree, 1), (None, Some(3)));
        assert_eq!(color_of(&tree, 3), Some(Color::Red));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_remove_until_empty() {
        let mut tree: RedBlackTree<u32> = (0..32).collect();
        for key in (0..32).rev() {
            assert!(tree.remove(&key));
            assert_eq!(tree.validate(), Ok(()));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.black_height(), 0);
        assert!(tree.insert(1));
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_fixups_under_random_workload() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut tree = RedBlackTree::new();
        for _ in 0..2_000 {
            let key = rng.gen_range(0, 256u32);
            if rng.gen_weighted_bool(3) {
                tree.remove(&key);
            } else {
                tree.insert(key);
            }
            assert_eq!(tree.validate(), Ok(()), "{}", tree.pre_order_string());
        }
    }

    #[test]
    fn test_validate_detects_red_root() {
        let mut tree: RedBlackTree<u32> = vec![1].into_iter().collect();
        let root = tree.root.unwrap();
        tree.arena[root].color = Color::Red;
        assert_eq!(tree.validate(), Err(Error::RedRoot));
    }

    #[test]
    fn test_validate_detects_red_violation() {
        let mut tree: RedBlackTree<u32> = vec![20, 10, 30, 5].into_iter().collect();
        let ten = tree.find_by(|other| 10u32.cmp(other)).unwrap();
        tree.arena[ten].color = Color::Red;
        assert_eq!(tree.validate(), Err(Error::RedViolation));
    }

    #[test]
    fn test_validate_detects_black_height_mismatch() {
        let mut tree: RedBlackTree<u32> = vec![10, 20, 30].into_iter().collect();
        let ten = tree.find_by(|other| 10u32.cmp(other)).unwrap();
        tree.arena[ten].color = Color::Black;
        assert_eq!(
            tree.validate(),
            Err(Error::BlackHeightMismatch { left: 1, right: 0 }),
        );
    }

    #[test]
    fn test_validate_detects_broken_parent_link() {
        let mut tree: RedBlackTree<u32> = vec![10, 20, 30].into_iter().collect();
        let ten = tree.find_by(|other| 10u32.cmp(other)).unwrap();
        tree.arena[ten].parent = None;
        assert_eq!(tree.validate(), Err(Error::BrokenParentLink));
    }

    #[test]
    fn test_pre_order_string() {
        let mut tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.pre_order_string(), "");

        for key in &[20, 10, 30, 5] {
            tree.insert(*key);
        }
        assert_eq!(tree.pre_order_string(), "20:B 10:B 5:R 30:B");

        tree.remove(&10);
        assert_eq!(tree.pre_order_string(), "20:B 5:B 30:B");
    }

    #[test]
    fn test_into_iter() {
        let tree: RedBlackTree<u32> = vec![5, 1, 3].into_iter().collect();
        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }
}
