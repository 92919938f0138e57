//! Index-based node storage.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to an object stored in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

enum Slot<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A growable slab of objects addressed by `NodeId`.
///
/// Freed slots are threaded onto a free list and reused by later allocations, so handles stay
/// small and stable for as long as their object is alive. Links between objects are plain
/// handles, which makes back-references non-owning by construction.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs an empty arena with room for `capacity` objects before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            head: None,
            len: 0,
        }
    }

    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            },
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(value)) {
                    Slot::Vacant(next) => self.head = next,
                    Slot::Occupied(_) => panic!("Error: free list points at an occupied slot."),
                }
                NodeId(index)
            },
        }
    }

    /// Deallocates an object and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds or refers to a vacant slot.
    pub fn free(&mut self, id: NodeId) -> T {
        if id.0 >= self.slots.len() {
            panic!("Error: attempting to free invalid slot.");
        }
        match mem::replace(&mut self.slots[id.0], Slot::Vacant(self.head)) {
            Slot::Occupied(value) => {
                self.head = Some(id.0);
                self.len -= 1;
                value
            },
            Slot::Vacant(next) => {
                self.slots[id.0] = Slot::Vacant(next);
                panic!("Error: attempting to free vacant slot.");
            },
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: node id out of bounds.")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: node id out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, NodeId};

    #[test]
    #[should_panic]
    fn test_free_invalid_slot() {
        let mut arena: Arena<u32> = Arena::new();
        arena.free(NodeId(0));
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_slot() {
        let mut arena = Arena::new();
        let id = arena.allocate(0);
        arena.free(id);
        arena.free(id);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::with_capacity(2);
        assert_eq!(arena.allocate(0), NodeId(0));
        assert_eq!(arena.allocate(0), NodeId(1));
        assert_eq!(arena.allocate(0), NodeId(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slot() {
        let mut arena = Arena::new();
        let a = arena.allocate(1);
        let b = arena.allocate(2);
        assert_eq!(arena.free(a), 1);
        assert_eq!(arena.free(b), 2);
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.allocate(3), b);
        assert_eq!(arena.allocate(4), a);
        assert_eq!(arena.allocate(5), NodeId(2));
    }

    #[test]
    fn test_get_vacant_slot() {
        let mut arena = Arena::new();
        let id = arena.allocate(7);
        arena.free(id);
        assert_eq!(arena.get(id), None);
        assert_eq!(arena.get(NodeId(9)), None);
    }

    #[test]
    fn test_index_mut() {
        let mut arena = Arena::new();
        let id = arena.allocate(1);
        arena[id] += 1;
        assert_eq!(arena[id], 2);
        *arena.get_mut(id).unwrap() = 5;
        assert_eq!(arena.get(id), Some(&5));
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        arena.allocate(1);
        arena.allocate(2);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.allocate(3), NodeId(0));
    }
}
