use std::cmp::Ordering;

/// The capability every value stored in a balanced tree must provide.
///
/// An element carries an opaque payload and knows how to order itself against another element
/// of the same type. The comparison is the only ordering mechanism used by the trees; there is
/// no separate key type.
///
/// `compare` must be a total order: antisymmetric, transitive, and returning `Ordering::Equal`
/// only for elements that should collapse into one. Violating the contract leaves the tree in
/// an unspecified (but memory-safe) state.
///
/// # Examples
///
/// ```
/// use balanced_trees::Element;
/// use std::cmp::Ordering;
///
/// struct Score {
///     player: String,
///     points: u32,
/// }
///
/// impl Element for Score {
///     type Value = String;
///
///     fn value(&self) -> &String {
///         &self.player
///     }
///
///     fn compare(&self, other: &Score) -> Ordering {
///         self.points.cmp(&other.points)
///     }
/// }
///
/// let low = Score { player: String::from("a"), points: 1 };
/// let high = Score { player: String::from("b"), points: 7 };
/// assert_eq!(low.compare(&high), Ordering::Less);
/// assert_eq!(high.value(), "b");
/// ```
pub trait Element {
    /// The payload exposed by the element.
    type Value: ?Sized;

    /// Returns the payload of the element.
    fn value(&self) -> &Self::Value;

    /// Three-way comparison against another element.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! ord_element_impls {
    ($($type_name:ty),* $(,)*) => {
        $(
            impl Element for $type_name {
                type Value = $type_name;

                fn value(&self) -> &Self::Value {
                    self
                }

                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    }
}

ord_element_impls!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    char, bool, String,
);

impl<'a> Element for &'a str {
    type Value = str;

    fn value(&self) -> &str {
        self
    }

    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(*self, *other)
    }
}
