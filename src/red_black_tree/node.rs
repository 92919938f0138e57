use crate::arena::{Arena, NodeId};

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A link to a child or parent. `None` stands for a sentinel leaf, which is always black and
/// carries no element.
pub type Link = Option<NodeId>;

/// A struct representing an internal node of a red black tree.
pub struct Node<E> {
    pub element: E,
    pub color: Color,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl<E> Node<E> {
    /// A new red node with two sentinel children.
    pub fn new(element: E, parent: Link) -> Self {
        Node {
            element,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }
}

/// Rotates the subtree rooted at `id` to the left and returns its new root.
///
/// The parent links of the rotated nodes are updated, including the new root's link to the old
/// root's parent, but that parent's child link is left untouched: the caller must re-attach the
/// returned node, or make it the tree root if there is no parent.
pub fn rotate_left<E>(arena: &mut Arena<Node<E>>, id: NodeId) -> NodeId {
    let pivot = arena[id].right.expect("Expected right child node to be `Some`.");
    let inner = arena[pivot].left;
    let parent = arena[id].parent;

    arena[id].right = inner;
    if let Some(inner) = inner {
        arena[inner].parent = Some(id);
    }
    arena[pivot].left = Some(id);
    arena[pivot].parent = parent;
    arena[id].parent = Some(pivot);
    pivot
}

/// Mirror image of `rotate_left`.
pub fn rotate_right<E>(arena: &mut Arena<Node<E>>, id: NodeId) -> NodeId {
    let pivot = arena[id].left.expect("Expected left child node to be `Some`.");
    let inner = arena[pivot].right;
    let parent = arena[id].parent;

    arena[id].left = inner;
    if let Some(inner) = inner {
        arena[inner].parent = Some(id);
    }
    arena[pivot].right = Some(id);
    arena[pivot].parent = parent;
    arena[id].parent = Some(pivot);
    pivot
}

#[cfg(test)]
mod tests {
    use super::{rotate_left, rotate_right, Node};
    use crate::arena::Arena;

    #[test]
    fn test_rotate_left_relinks_parents() {
        let mut arena = Arena::new();
        let top = arena.allocate(Node::new(1, None));
        let pivot = arena.allocate(Node::new(3, Some(top)));
        let inner = arena.allocate(Node::new(2, Some(pivot)));
        arena[top].right = Some(pivot);
        arena[pivot].left = Some(inner);

        assert_eq!(rotate_left(&mut arena, top), pivot);
        assert_eq!(arena[pivot].parent, None);
        assert_eq!(arena[pivot].left, Some(top));
        assert_eq!(arena[top].parent, Some(pivot));
        assert_eq!(arena[top].right, Some(inner));
        assert_eq!(arena[inner].parent, Some(top));
    }

    #[test]
    fn test_rotate_right_keeps_outer_parent() {
        let mut arena = Arena::new();
        let outer = arena.allocate(Node::new(10, None));
        let top = arena.allocate(Node::new(5, Some(outer)));
        let pivot = arena.allocate(Node::new(3, Some(top)));
        arena[outer].left = Some(top);
        arena[top].left = Some(pivot);

        assert_eq!(rotate_right(&mut arena, top), pivot);
        assert_eq!(arena[pivot].parent, Some(outer));
        assert_eq!(arena[pivot].right, Some(top));
        assert_eq!(arena[top].left, None);
        // re-attaching is the caller's job
        assert_eq!(arena[outer].left, Some(top));
    }
}
