//! Errors returned by [`List`](crate::List) operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

/// The ways a [`List`](crate::List) operation can fail.
///
/// A failed operation never modifies the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ListError {
    /// An index was not less than the list's length.
    /// Raised by `get`, `set`, `remove` and `swap`.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The list had no elements.
    /// Raised by `head`, `tail`, `pop` and `dequeue`.
    #[error("list is empty")]
    EmptyCollection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ListError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of bounds for list of length 2");
        assert_eq!(ListError::EmptyCollection.to_string(), "list is empty");
    }

    #[test]
    fn test_boxes_as_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(ListError::EmptyCollection);
        assert_eq!(boxed.to_string(), "list is empty");
    }
}
