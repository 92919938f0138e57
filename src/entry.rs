use crate::element::Element;
use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A key-value pair ordered solely by its key.
///
/// `Entry` is the element type stored by the map and set adapters: its key drives the tree's
/// ordering and its value is the element's payload.
///
/// # Examples
///
/// ```
/// use balanced_trees::{Element, Entry};
/// use std::cmp::Ordering;
///
/// let a = Entry { key: 1, value: "one" };
/// let b = Entry { key: 2, value: "two" };
/// assert_eq!(a.compare(&b), Ordering::Less);
/// assert_eq!(*b.value(), "two");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Element for Entry<K, V>
where
    K: Ord,
{
    type Value = V;

    fn value(&self) -> &V {
        &self.value
    }

    fn compare(&self, other: &Entry<K, V>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> Ord for Entry<K, V>
where
    K: Ord,
{
    fn cmp(&self, other: &Entry<K, V>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> PartialOrd for Entry<K, V>
where
    K: Ord,
{
    fn partial_cmp(&self, other: &Entry<K, V>) -> Option<Ordering> {
        Some(self.key.cmp(&other.key))
    }
}

impl<K, V> PartialEq for Entry<K, V>
where
    K: Ord,
{
    fn eq(&self, other: &Entry<K, V>) -> bool {
        self.key == other.key
    }
}

impl<K, V> Eq for Entry<K, V> where K: Ord {}

#[cfg(test)]
mod tests {
    use super::Entry;
    use crate::element::Element;
    use std::cmp::Ordering;

    #[test]
    fn test_entries_ignore_value() {
        let a = Entry { key: 3, value: 10 };
        let b = Entry { key: 3, value: 20 };
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn test_payload_is_value() {
        let entry = Entry { key: "k", value: vec![1, 2] };
        assert_eq!(entry.value(), &vec![1, 2]);
    }
}
