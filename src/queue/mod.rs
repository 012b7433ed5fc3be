//! A singly linked FIFO/LIFO queue of owned text values.
//!
//! [`TextQueue`] keeps its nodes in a slot arena and links them by index
//! instead of by pointer: every node owns one `String` and the index of its
//! successor, the queue holds the indices of the first and last node plus an
//! element count, and slots freed by removal are recycled through a free
//! list. The arena owns every node and the tail is a plain index alias, so
//! the whole structure is safe code with no raw pointers.
//!
//! Insertion copies the caller's string into newly owned storage and reports
//! allocation failure as [`TryReserveError`](alloc::collections::TryReserveError)
//! instead of aborting; a failed insertion leaves the queue exactly as it
//! was. Removal is from the front, either moving the owned value out
//! ([`TextQueue::pop_front`]) or copying it into a bounded caller buffer
//! ([`TextQueue::pop_front_into`]). [`TextQueue::reverse`] rewires the links
//! in place in O(n), and [`TextQueue::sort`] reorders the nodes with a
//! stable, allocation-free merge sort in O(n log n).
//!
//! The queue is single-threaded: mutation requires `&mut` access, so the
//! borrow checker enforces the exclusive-access contract. Wrap it in a lock
//! if you need to share it.
//!
//! # Examples
//!
//! ```
//! use textqueue::queue::TextQueue;
//!
//! let mut queue = TextQueue::new();
//! queue.try_push_back("b").unwrap();
//! queue.try_push_back("a").unwrap();
//! queue.try_push_back("c").unwrap();
//! assert_eq!(queue.len(), 3);
//!
//! queue.sort();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
//!
//! queue.reverse();
//! assert_eq!(queue.pop_front().as_deref(), Some("c"));
//! assert_eq!(queue.len(), 2);
//! ```

mod arena;
mod iter;
mod sort;
mod text;

#[cfg(test)]
mod tests;

pub use iter::{IntoIter, Iter};
pub use text::TextQueue;
