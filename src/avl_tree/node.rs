use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<E> {
    pub element: E,
    pub height: usize,
    pub left: tree::Tree<E>,
    pub right: tree::Tree<E>,
}

impl<E> Node<E> {
    pub fn new(element: E) -> Self {
        Node {
            element,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { height, left, right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    // height(right) - height(left)
    pub fn balance_factor(&self) -> isize {
        (tree::height(&self.right) as isize) - (tree::height(&self.left) as isize)
    }
}
