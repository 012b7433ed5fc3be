use alloc::collections::TryReserveError;
use alloc::string::String;
use core::fmt;
use core::mem;

use super::arena::{Node, NodeArena};
use super::iter::{IntoIter, Iter};
use super::sort;

/// A singly linked FIFO/LIFO queue of owned text values.
///
/// Values can be pushed at either end and are popped from the front, so the
/// queue works as a FIFO (`try_push_back` + `pop_front`) or a LIFO
/// (`try_push_front` + `pop_front`). Nodes live in a slot arena and are
/// linked by index; see the [module docs](super) for the layout.
pub struct TextQueue {
    arena: NodeArena,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl TextQueue {
    /// Creates a new, empty queue. Does not allocate.
    pub const fn new() -> Self {
        TextQueue {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of values in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value at the front, if any.
    pub fn front(&self) -> Option<&str> {
        self.head.map(|index| self.arena.node(index).value.as_str())
    }

    /// The value at the back, if any.
    pub fn back(&self) -> Option<&str> {
        self.tail.map(|index| self.arena.node(index).value.as_str())
    }

    /// Copies `value` into newly owned storage and links it in front of the
    /// current front value.
    ///
    /// On allocation failure the queue is unchanged and any partially built
    /// node has already been released.
    pub fn try_push_front(&mut self, value: &str) -> Result<(), TryReserveError> {
        let node = Node::try_copied(value, self.head)?;
        let index = self.arena.try_insert(node)?;
        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.head = Some(index);
        self.len += 1;
        self.debug_verify();
        Ok(())
    }

    /// Copies `value` into newly owned storage and appends it after the
    /// current back value.
    ///
    /// Same failure contract as [`try_push_front`](TextQueue::try_push_front).
    pub fn try_push_back(&mut self, value: &str) -> Result<(), TryReserveError> {
        let node = Node::try_copied(value, None)?;
        let index = self.arena.try_insert(node)?;
        match self.tail {
            Some(tail) => self.arena.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        self.debug_verify();
        Ok(())
    }

    /// Unlinks the front node and returns its value, or `None` when the
    /// queue is empty. The vacated slot is kept for reuse.
    pub fn pop_front(&mut self) -> Option<String> {
        let index = self.head?;
        let node = self.arena.remove(index);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        self.debug_verify();
        Some(node.value)
    }

    /// Removes the front value, copying at most `out.len() - 1` of its bytes
    /// into `out` followed by one NUL byte.
    ///
    /// Returns the number of bytes copied (the terminator not counted), or
    /// `None` when the queue is empty, in which case nothing is written.
    /// `out` is NUL-terminated whenever it is non-empty, even if that leaves
    /// room for no value bytes at all; an empty `out` removes the value
    /// without copying anything. The copy is byte-wise, so an `out` shorter
    /// than the stored text may end mid-character.
    pub fn pop_front_into(&mut self, out: &mut [u8]) -> Option<usize> {
        let value = self.pop_front()?;
        let Some(capacity) = out.len().checked_sub(1) else {
            return Some(0);
        };
        let copied = value.len().min(capacity);
        out[..copied].copy_from_slice(&value.as_bytes()[..copied]);
        out[copied] = 0;
        Some(copied)
    }

    /// Drops every value, leaving the queue empty. The backing storage is
    /// kept for reuse; dropping the queue itself releases everything.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.debug_verify();
    }

    /// Reverses the queue in place by rewiring every link, so the front
    /// value becomes the back value and vice versa.
    ///
    /// Runs in O(n) with O(1) extra space; no value is copied or moved.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            cursor = mem::replace(&mut self.arena.node_mut(index).next, reversed);
            reversed = Some(index);
        }
        self.tail = self.head;
        self.head = reversed;
        self.debug_verify();
    }

    /// Sorts the values ascending, in place, by relinking the existing
    /// nodes; no allocation happens.
    ///
    /// The sort is a stable merge sort: values comparing equal keep their
    /// relative order. Comparison is `&str` order, which is byte-wise
    /// lexicographic. Queues of length 0 or 1 are left untouched.
    pub fn sort(&mut self) {
        if self.len <= 1 {
            return;
        }
        self.head = sort::merge_sort(&mut self.arena, self.head);
        // The sort only tracks heads; walk to the new last node.
        let mut tail = self.head;
        while let Some(index) = tail {
            match self.arena.node(index).next {
                Some(next) => tail = Some(next),
                None => break,
            }
        }
        self.tail = tail;
        self.debug_verify();
    }

    /// Iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.arena, self.head, self.len)
    }

    /// Walks the whole structure and asserts the queue invariants: `len`
    /// nodes reachable from the front, the last of them is the tail, and
    /// every slot is either on the chain or on the free list. Debug builds
    /// only; compiles to nothing in release.
    fn debug_verify(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut steps = 0;
        let mut last = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            assert!(steps < self.len, "chain holds more nodes than len");
            steps += 1;
            last = Some(index);
            cursor = self.arena.node(index).next;
        }
        assert_eq!(steps, self.len, "chain holds fewer nodes than len");
        assert_eq!(last, self.tail, "tail is not the last reachable node");
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(
            self.arena.slot_count(),
            self.len + self.arena.vacant_count(),
            "a slot is neither on the chain nor on the free list"
        );
    }
}

impl Default for TextQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Clone for TextQueue {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for TextQueue {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for TextQueue {}

impl<S: AsRef<str>> FromIterator<S> for TextQueue {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut queue = TextQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<S: AsRef<str>> Extend<S> for TextQueue {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>,
    {
        for value in iter {
            self.try_push_back(value.as_ref())
                .expect("allocation failed while extending the queue");
        }
    }
}

impl<'a> IntoIterator for &'a TextQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for TextQueue {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter::new(self)
    }
}
