//! A small library providing [`List`], a generic ordered collection.
//!
//! A `List` owns a single contiguous buffer and offers:
//! - index-based access and mutation ([`get`](List::get), [`set`](List::set), [`remove`](List::remove), [`swap`](List::swap)),
//! - stack/queue-style access at both ends ([`head`](List::head), [`tail`](List::tail), [`pop`](List::pop), [`dequeue`](List::dequeue)),
//! - in-place reordering ([`reverse`](List::reverse), [`sort`](List::sort)),
//! - set-like combinators that build a new list ([`union`](List::union), [`intersection`](List::intersection)).
//!
//! Operations that can fail return a [`ListError`] rather than panicking.
//!
//! ```
//! use linguine::{List, ListError};
//! let mut list = List::new();
//! list.add(3);
//! list.add_all(&[1, 5]);
//! list.sort(|a, b| a < b);
//! assert_eq!(list.to_string(), "[1, 3, 5]");
//! assert_eq!(list.get(10), Err(ListError::IndexOutOfBounds { index: 10, len: 3 }));
//! ```

mod error;
mod list;

pub use error::{ListError, Result};
pub use list::List;

#[cfg(test)]
mod property_tests;
