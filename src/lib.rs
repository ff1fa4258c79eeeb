//! This crate provides a doubly-linked list with owned nodes, driven by
//! equality and ordering capability traits that element types opt into.
//!
//! The [`List`] allows inserting and removing elements at both ends in
//! constant time, and at any zero-based index in *O*(*n*) time. Indexed
//! operations are fallible and return a [`ListError`] instead of panicking.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use able_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([22, 21, 33]);
//! list.push_back(7);
//!
//! let mut kept = list.filter(|n| *n > 10); // keeps 22, 21, 33
//! kept.sort_by(|a, b| a < b);
//!
//! assert_eq!(kept.to_string(), "{21, 22, 33}");
//! assert_eq!(list.len(), 4); // `filter` never touches the receiver
//! ```
//!
//! # Capabilities
//!
//! Operations that compare elements state the capability they need as a
//! bound on that method alone: [`List::has`] demands [`Equatable`], and
//! [`List::sort`] demands [`Sortable`]. Element types declare the
//! capabilities they support; a comparator-driven sort via
//! [`List::sort_by`] needs neither.
//!
//! ```
//! use able_list::{Equatable, List, Sortable};
//!
//! #[derive(Clone, Copy, Debug, Default, PartialEq)]
//! struct Score(i32);
//!
//! impl Equatable for Score {
//!     fn equals(&self, other: &Self) -> bool {
//!         self.0 == other.0
//!     }
//! }
//!
//! impl Sortable for Score {
//!     fn less_than(&self, other: &Self) -> bool {
//!         self.0 < other.0
//!     }
//! }
//!
//! let mut list = List::new();
//! list.push_back(Score(22));
//! list.push_back(Score(21));
//!
//! assert!(list.has(&Score(21)));
//!
//! list.sort();
//! assert_eq!(list.first_or_default(), Score(21));
//! ```
//!
//! # Memory Layout
//!
//! The list is cyclic around a payload-free ghost node:
//!
//! ```text
//!          ┌──────────────────────────────────────────────┐
//!          ↓                              (Ghost) Node N  │
//!    ╔═══════════╗              ╔═══════════╗   ┌──────┐  │
//!    ║   next    ║ ──→ ┄┄ ────→ ║   next    ║ → │ next │ ─┘
//!    ╟───────────╢              ╟───────────╢   ├──────┤
//! ┌─ ║   prev    ║ ←── ┄┄ ←──── ║   prev    ║ ← │ prev │
//! │  ╟───────────╢              ╟───────────╢   ├──────┤
//! │  ║ payload T ║              ║ payload T ║   ┊  ──  ┊
//! │  ╚═══════════╝              ╚═══════════╝   └──────┘
//! │     Node 0                    Node N - 1      ↑  ↑
//! └───────────────────────────────────────────────┘  │
//! ╔═══════════╗                                      │
//! ║   ghost   ║ ─────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//!
//! In an empty list the ghost node's `next` and `prev` point to itself;
//! otherwise `ghost.next` is the first element and `ghost.prev` the last.
//! The ghost node stands in for the absent link at both ends, so every
//! node of a well-formed list always has two valid neighbors.
//!
//! # Iteration
//!
//! [`List::iter`] and [`List::backwards`] each produce a fresh lazy
//! cursor over the elements, forward from the front or reverse from the
//! back; [`List::iter_mut`] additionally provides mutability of the
//! elements (but not of the linked structure). Iterators are fused,
//! single-pass, and independent of each other; a sequence is restarted by
//! calling the producing method again, not by replaying an exhausted
//! iterator.
//!
//! ```
//! use able_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//!
//! let forward = Vec::from_iter(list.iter().copied());
//! let reverse = Vec::from_iter(list.backwards().copied());
//!
//! assert_eq!(forward, vec![1, 2, 3]);
//! assert_eq!(reverse, vec![3, 2, 1]);
//! ```

pub use able::{Equatable, Sortable};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{List, ListError};

pub mod able;
pub mod list;

mod experiments;
