use crate::avl_tree::node::Node;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::ordered_tree::OrderedTree;
use log::trace;
use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FromIterator;
use std::mem;

pub type Tree<E> = Option<Box<Node<E>>>;

pub fn height<E>(tree: &Tree<E>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.height,
    }
}

fn rotate_left<E>(mut node: Box<Node<E>>) -> Box<Node<E>> {
    let mut child = node.right.take().expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<E>(mut node: Box<Node<E>>) -> Box<Node<E>> {
    let mut child = node.left.take().expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the height and balance of the root of `tree`, assuming both subtrees are balanced.
fn balance<E>(tree: &mut Tree<E>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let balance_factor = node.balance_factor();
    if balance_factor > 1 {
        if let Some(child) = node.right.take() {
            if child.balance_factor() < 0 {
                trace!("avl: right-left rotation");
                node.right = Some(rotate_right(child));
            } else {
                trace!("avl: left rotation");
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    } else if balance_factor < -1 {
        if let Some(child) = node.left.take() {
            if child.balance_factor() > 0 {
                trace!("avl: left-right rotation");
                node.left = Some(rotate_left(child));
            } else {
                trace!("avl: right rotation");
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    }

    *tree = Some(node);
}

// precondition: there exists a maximum node in the tree
fn remove_max<E>(tree: &mut Tree<E>) -> Box<Node<E>> {
    if let Some(node) = tree {
        if node.right.is_some() {
            let ret = remove_max(&mut node.right);
            balance(tree);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.left.take();
    node
}

pub fn insert<E>(tree: &mut Tree<E>, element: E) -> bool
where
    E: Element,
{
    let inserted = match tree {
        Some(node) => match element.compare(&node.element) {
            Ordering::Less => insert(&mut node.left, element),
            Ordering::Greater => insert(&mut node.right, element),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(element)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

pub fn remove_by<E, F>(tree: &mut Tree<E>, mut cmp: F) -> Option<E>
where
    F: FnMut(&E) -> Ordering,
{
    let ret = match tree.take() {
        Some(mut node) => match cmp(&node.element) {
            Ordering::Less => {
                let ret = remove_by(&mut node.left, cmp);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove_by(&mut node.right, cmp);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    let Node { element: predecessor, .. } = *remove_max(&mut node.left);
                    let ret = mem::replace(&mut node.element, predecessor);
                    *tree = Some(node);
                    Some(ret)
                } else {
                    let Node { element, left, right, .. } = *node;
                    *tree = left.or(right);
                    Some(element)
                }
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn search_by<E, F>(tree: &Tree<E>, mut cmp: F) -> Option<&E>
where
    F: FnMut(&E) -> Ordering,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match cmp(&node.element) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.element),
        }
    }
    None
}

pub fn search_by_mut<E, F>(tree: &mut Tree<E>, mut cmp: F) -> Option<&mut E>
where
    F: FnMut(&E) -> Ordering,
{
    match tree {
        None => None,
        Some(node) => match cmp(&node.element) {
            Ordering::Less => search_by_mut(&mut node.left, cmp),
            Ordering::Greater => search_by_mut(&mut node.right, cmp),
            Ordering::Equal => Some(&mut node.element),
        },
    }
}

pub fn floor_by<E, F>(tree: &Tree<E>, mut cmp: F) -> Option<&E>
where
    F: FnMut(&E) -> Ordering,
{
    let mut curr = tree;
    let mut floor = None;
    while let Some(node) = curr {
        match cmp(&node.element) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                floor = Some(&node.element);
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.element),
        }
    }
    floor
}

pub fn ceil_by<E, F>(tree: &Tree<E>, mut cmp: F) -> Option<&E>
where
    F: FnMut(&E) -> Ordering,
{
    let mut curr = tree;
    let mut ceil = None;
    while let Some(node) = curr {
        match cmp(&node.element) {
            Ordering::Less => {
                ceil = Some(&node.element);
                curr = &node.left;
            },
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.element),
        }
    }
    ceil
}

pub fn min<E>(tree: &Tree<E>) -> Option<&E> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(left_node) = &curr.left {
            curr = left_node;
        }
        &curr.element
    })
}

pub fn max<E>(tree: &Tree<E>) -> Option<&E> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(right_node) = &curr.right {
            curr = right_node;
        }
        &curr.element
    })
}

// Returns the height of `tree` after checking ordering against the exclusive bounds, cached
// heights and balance factors of every node in it.
fn check<'a, E>(tree: &'a Tree<E>, lower: Option<&'a E>, upper: Option<&'a E>) -> Result<usize>
where
    E: Element,
{
    let node = match tree {
        None => return Ok(0),
        Some(node) => node,
    };

    let above_lower = lower.map_or(true, |lower| node.element.compare(lower) == Ordering::Greater);
    let below_upper = upper.map_or(true, |upper| node.element.compare(upper) == Ordering::Less);
    if !above_lower || !below_upper {
        return Err(Error::OutOfOrder);
    }

    let left_height = check(&node.left, lower, Some(&node.element))?;
    let right_height = check(&node.right, Some(&node.element), upper)?;

    let expected = cmp::max(left_height, right_height) + 1;
    if node.height != expected {
        return Err(Error::HeightMismatch { expected, actual: node.height });
    }

    let balance_factor = right_height as isize - left_height as isize;
    if balance_factor.abs() > 1 {
        return Err(Error::Unbalanced { balance_factor });
    }

    Ok(node.height)
}

/// A self-balancing binary search tree where the heights of the two child subtrees of any node
/// differ by at most one.
///
/// Every insertion and removal rebalances the ancestors of the modified node on the way back
/// up, using single or double rotations. Equal elements collapse: inserting an element that
/// compares equal to a stored one is a no-op.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::with_root(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// assert_eq!(tree.root(), Some(&20));
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&10, &20, &30]);
///
/// assert!(tree.remove(&20));
/// assert!(!tree.remove(&20));
/// assert_eq!(tree.search(&30), Some(&30));
/// ```
pub struct AvlTree<E> {
    tree: Tree<E>,
    len: usize,
}

impl<E> AvlTree<E> {
    /// Constructs a new, empty `AvlTree<E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree { tree: None, len: 0 }
    }

    /// Constructs a tree holding a single element.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::with_root(1);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn with_root(element: E) -> Self {
        AvlTree {
            tree: Some(Box::new(Node::new(element))),
            len: 1,
        }
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree. An empty tree has height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        height(&self.tree)
    }

    /// Returns the element stored at the root of the tree.
    pub fn root(&self) -> Option<&E> {
        self.tree.as_ref().map(|node| &node.element)
    }

    /// Returns the minimum element of the tree.
    pub fn min(&self) -> Option<&E> {
        min(&self.tree)
    }

    /// Returns the maximum element of the tree.
    pub fn max(&self) -> Option<&E> {
        max(&self.tree)
    }

    /// Returns an iterator over the tree. The iterator yields elements using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<'_, E> {
        AvlTreeIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Formats the nodes of the tree in pre-order as `element:height`, separated by spaces.
    /// Unlike `Debug`, the output shows the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = vec![10, 20, 30].into_iter().collect();
    /// assert_eq!(tree.pre_order_string(), "20:2 10:1 30:1");
    /// ```
    pub fn pre_order_string(&self) -> String
    where
        E: fmt::Debug,
    {
        let mut nodes = Vec::new();
        let mut stack = Vec::new();
        stack.extend(self.tree.as_ref());
        while let Some(node) = stack.pop() {
            nodes.push(format!("{:?}:{}", node.element, node.height));
            stack.extend(node.right.as_ref());
            stack.extend(node.left.as_ref());
        }
        nodes.join(" ")
    }

    /// Returns the element matched by `cmp`, a closure returning the ordering of the search key
    /// relative to the element it is given.
    pub fn search_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        search_by(&self.tree, cmp)
    }

    /// Removes and returns the element matched by `cmp`.
    pub fn take_by<F>(&mut self, cmp: F) -> Option<E>
    where
        F: FnMut(&E) -> Ordering,
    {
        let AvlTree { tree, len } = self;
        remove_by(tree, cmp).map(|element| {
            *len -= 1;
            element
        })
    }

    /// Returns the greatest element that is less than or equal to the search key matched by `cmp`.
    pub fn floor_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        floor_by(&self.tree, cmp)
    }

    /// Returns the least element that is greater than or equal to the search key matched by `cmp`.
    pub fn ceil_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        ceil_by(&self.tree, cmp)
    }
}

impl<E> AvlTree<E>
where
    E: Element,
{
    /// Inserts an element into the tree. Returns `false` if an equal element already exists, in
    /// which case the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: E) -> bool {
        let AvlTree { tree, len } = self;
        let inserted = insert(tree, element);
        if inserted {
            *len += 1;
        }
        inserted
    }

    /// Removes an element from the tree. Returns `false` if the element does not exist.
    ///
    /// A node with two children takes over the maximum element of its left subtree, which is
    /// then removed from that subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
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
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
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

    /// Checks the ordering, cached heights and balance of every node, and the tracked length.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = (0..100).collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<()> {
        check(&self.tree, None, None)?;
        let actual = self.iter().count();
        if actual != self.len {
            return Err(Error::LengthMismatch { expected: self.len, actual });
        }
        Ok(())
    }
}

impl<E> OrderedTree<E> for AvlTree<E>
where
    E: Element,
{
    type Iter<'a> = AvlTreeIter<'a, E>
    where
        E: 'a;

    fn insert(&mut self, element: E) -> bool {
        AvlTree::insert(self, element)
    }

    fn take_by<F>(&mut self, cmp: F) -> Option<E>
    where
        F: FnMut(&E) -> Ordering,
    {
        AvlTree::take_by(self, cmp)
    }

    fn search_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        AvlTree::search_by(self, cmp)
    }

    fn search_by_mut<F>(&mut self, cmp: F) -> Option<&mut E>
    where
        F: FnMut(&E) -> Ordering,
    {
        search_by_mut(&mut self.tree, cmp)
    }

    fn floor_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        AvlTree::floor_by(self, cmp)
    }

    fn ceil_by<F>(&self, cmp: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        AvlTree::ceil_by(self, cmp)
    }

    fn min(&self) -> Option<&E> {
        AvlTree::min(self)
    }

    fn max(&self) -> Option<&E> {
        AvlTree::max(self)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn clear(&mut self) {
        AvlTree::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        AvlTree::iter(self)
    }

    fn validate(&self) -> Result<()> {
        AvlTree::validate(self)
    }
}

impl<E> Default for AvlTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for AvlTree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E> FromIterator<E> for AvlTree<E>
where
    E: Element,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<E> Extend<E> for AvlTree<E>
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

impl<E> IntoIterator for AvlTree<E> {
    type IntoIter = AvlTreeIntoIter<E>;
    type Item = E;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, E> IntoIterator for &'a AvlTree<E>
where
    E: 'a,
{
    type IntoIter = AvlTreeIter<'a, E>;
    type Item = &'a E;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlTree<E>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned elements.
pub struct AvlTreeIntoIter<E> {
    current: Tree<E>,
    stack: Vec<Node<E>>,
}

impl<E> Iterator for AvlTreeIntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { element, right, .. } = node;
            self.current = right;
            element
        })
    }
}

/// An iterator for `AvlTree<E>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct AvlTreeIter<'a, E>
where
    E: 'a,
{
    current: &'a Tree<E>,
    stack: Vec<&'a Node<E>>,
}

impl<'a, E> Iterator for AvlTreeIter<'a, E>
where
    E: 'a,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.element
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{insert, rotate_left, rotate_right, AvlTree, Tree};
    use crate::avl_tree::node::Node;
    use crate::error::Error;

    fn leaf(element: u32) -> Tree<u32> {
        Some(Box::new(Node::new(element)))
    }

    fn in_order(tree: &Tree<u32>, out: &mut Vec<u32>) {
        if let Some(node) = tree {
            in_order(&node.left, out);
            out.push(node.element);
            in_order(&node.right, out);
        }
    }

    #[test]
    fn test_len_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn test_min_max_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_rotate_left_preserves_order() {
        let mut root = Node::new(10);
        let mut child = Node::new(20);
        child.left = leaf(15);
        child.right = leaf(30);
        child.update();
        root.right = Some(Box::new(child));
        root.left = leaf(5);
        root.update();

        let rotated = Some(rotate_left(Box::new(root)));
        let mut out = Vec::new();
        in_order(&rotated, &mut out);
        assert_eq!(out, vec![5, 10, 15, 20, 30]);

        let node = rotated.as_ref().unwrap();
        assert_eq!(node.element, 20);
        assert_eq!(node.height, 3);
        assert_eq!(node.left.as_ref().map(|node| node.element), Some(10));
        assert_eq!(node.left.as_ref().map(|node| node.height), Some(2));
    }

    #[test]
    fn test_rotate_right_preserves_order() {
        let mut root = Node::new(30);
        let mut child = Node::new(20);
        child.left = leaf(10);
        child.update();
        root.left = Some(Box::new(child));
        root.update();

        let rotated = Some(rotate_right(Box::new(root)));
        let mut out = Vec::new();
        in_order(&rotated, &mut out);
        assert_eq!(out, vec![10, 20, 30]);

        let node = rotated.as_ref().unwrap();
        assert_eq!(node.element, 20);
        assert_eq!(node.height, 2);
        assert_eq!(node.right.as_ref().map(|node| node.height), Some(1));
    }

    #[test]
    fn test_ascending_inserts_rotate_left() {
        let mut tree = AvlTree::with_root(10);
        tree.insert(20);
        assert_eq!(tree.root(), Some(&10));
        tree.insert(30);

        assert_eq!(tree.root(), Some(&20));
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&10, &20, &30]);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_double_rotations() {
        let mut right_left = AvlTree::new();
        for key in &[10, 30, 20] {
            right_left.insert(*key);
        }
        assert_eq!(right_left.root(), Some(&20));
        assert_eq!(right_left.validate(), Ok(()));

        let mut left_right = AvlTree::new();
        for key in &[30, 10, 20] {
            left_right.insert(*key);
        }
        assert_eq!(left_right.root(), Some(&20));
        assert_eq!(left_right.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_insert() {
        let mut tree = AvlTree::new();
        for key in &[5, 3, 8] {
            tree.insert(*key);
        }
        let before = tree.iter().cloned().collect::<Vec<u32>>();
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), before);
    }

    #[test]
    fn test_remove_root_of_complete_tree() {
        let mut tree = AvlTree::new();
        for key in &[4, 2, 6, 1, 3, 5, 7] {
            tree.insert(*key);
        }
        assert_eq!(tree.root(), Some(&4));
        assert_eq!(tree.height(), 3);

        assert!(tree.remove(&4));
        assert_eq!(tree.root(), Some(&3));
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(
            tree.iter().cloned().collect::<Vec<u32>>(),
            vec![1, 2, 3, 5, 6, 7],
        );
    }

    #[test]
    fn test_remove_absent() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.insert(2);
        assert_eq!(tree.take(&3), None);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_remove_rebalances_predecessor_path() {
        // removing the root pulls 5 out of the left subtree, which must rebalance there
        let mut tree = AvlTree::new();
        for key in &[8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15, 16] {
            tree.insert(*key);
        }
        for key in &[8, 7, 6, 5] {
            assert!(tree.remove(key));
            assert_eq!(tree.validate(), Ok(()));
        }
    }

    #[test]
    fn test_remove_everything() {
        let mut tree: AvlTree<u32> = (0..64).collect();
        for key in (0..64).rev().step_by(3).chain(0..64) {
            tree.remove(&key);
            assert_eq!(tree.validate(), Ok(()), "{}", tree.pre_order_string());
        }
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn test_floor_ceil() {
        let tree: AvlTree<u32> = vec![1, 3, 5].into_iter().collect();

        assert_eq!(tree.floor_by(|other| 0u32.cmp(other)), None);
        assert_eq!(tree.floor_by(|other| 2u32.cmp(other)), Some(&1));
        assert_eq!(tree.floor_by(|other| 5u32.cmp(other)), Some(&5));
        assert_eq!(tree.floor_by(|other| 6u32.cmp(other)), Some(&5));

        assert_eq!(tree.ceil_by(|other| 0u32.cmp(other)), Some(&1));
        assert_eq!(tree.ceil_by(|other| 4u32.cmp(other)), Some(&5));
        assert_eq!(tree.ceil_by(|other| 6u32.cmp(other)), None);
    }

    #[test]
    fn test_validate_detects_stale_height() {
        let mut tree = AvlTree::new();
        for key in &[2, 1, 3] {
            tree.insert(*key);
        }
        if let Some(node) = tree.tree.as_mut() {
            node.height = 5;
        }
        assert_eq!(
            tree.validate(),
            Err(Error::HeightMismatch { expected: 2, actual: 5 }),
        );
    }

    #[test]
    fn test_validate_detects_imbalance() {
        let mut tree = leaf(1);
        if let Some(node) = tree.as_mut() {
            node.right = leaf(2);
            if let Some(child) = node.right.as_mut() {
                child.right = leaf(3);
                child.update();
            }
            node.update();
        }
        let tree = AvlTree { tree, len: 3 };
        assert_eq!(tree.validate(), Err(Error::Unbalanced { balance_factor: 2 }));
    }

    #[test]
    fn test_validate_detects_disorder() {
        let mut tree: Tree<u32> = None;
        insert(&mut tree, 2);
        if let Some(node) = tree.as_mut() {
            node.left = leaf(7);
            node.update();
        }
        let tree = AvlTree { tree, len: 2 };
        assert_eq!(tree.validate(), Err(Error::OutOfOrder));
    }

    #[test]
    fn test_into_iter() {
        let tree: AvlTree<u32> = vec![5, 1, 3].into_iter().collect();
        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_pre_order_string() {
        let mut tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.pre_order_string(), "");

        for key in &[4, 2, 6, 1, 3, 5, 7, 8] {
            tree.insert(*key);
        }
        assert_eq!(tree.pre_order_string(), "4:4 2:2 1:1 3:1 6:3 5:1 7:2 8:1");

        tree.remove(&4);
        assert_eq!(tree.pre_order_string(), "3:4 2:2 1:1 6:3 5:1 7:2 8:1");
    }

    #[test]
    fn test_debug() {
        let tree: AvlTree<u32> = vec![2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "[1, 2]");
    }
}
