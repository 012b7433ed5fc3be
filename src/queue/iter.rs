use alloc::string::String;
use core::iter::FusedIterator;

use super::arena::NodeArena;
use super::text::TextQueue;

/// Borrowing iterator over a queue's values, front to back.
pub struct Iter<'a> {
    arena: &'a NodeArena,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(arena: &'a NodeArena, head: Option<usize>, len: usize) -> Self {
        Iter {
            arena,
            cursor: head,
            remaining: len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let index = self.cursor?;
        let node = self.arena.node(index);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(node.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Consuming iterator over a queue's values, popping from the front.
pub struct IntoIter {
    queue: TextQueue,
}

impl IntoIter {
    pub(super) fn new(queue: TextQueue) -> Self {
        IntoIter { queue }
    }
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
