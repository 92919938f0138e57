use std::error;
use std::fmt;
use std::result;

/// A structural invariant violation found while validating a tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// An element is not strictly between the bounds imposed by its ancestors.
    OutOfOrder,
    /// A node's cached height disagrees with the heights of its subtrees.
    HeightMismatch { expected: usize, actual: usize },
    /// The subtree heights of a node differ by more than one.
    Unbalanced { balance_factor: isize },
    /// The root of a red-black tree is red.
    RedRoot,
    /// A red node has a red child.
    RedViolation,
    /// Two paths from the same node to its sentinels cross different numbers of black nodes.
    BlackHeightMismatch { left: usize, right: usize },
    /// A node's parent link does not point back at the node that owns it.
    BrokenParentLink,
    /// The tracked element count disagrees with the number of reachable nodes.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfOrder => write!(f, "element is out of order"),
            Error::HeightMismatch { expected, actual } => {
                write!(f, "cached height {} should be {}", actual, expected)
            },
            Error::Unbalanced { balance_factor } => {
                write!(f, "node has balance factor {}", balance_factor)
            },
            Error::RedRoot => write!(f, "root is red"),
            Error::RedViolation => write!(f, "red node has a red child"),
            Error::BlackHeightMismatch { left, right } => {
                write!(f, "black heights differ: left {} and right {}", left, right)
            },
            Error::BrokenParentLink => write!(f, "parent link does not match tree structure"),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "tree reports {} elements but holds {}", expected, actual)
            },
        }
    }
}

impl error::Error for Error {}

/// Convenience `Result` alias for invariant checks.
pub type Result<T> = result::Result<T, Error>;
