//! Merge sort over an index-linked chain.
//!
//! The chain is reordered purely by rewriting `next` indices; no node is
//! allocated, freed, or moved. Values compare as `&str`, which for UTF-8
//! text is byte-wise lexicographic order.

use super::arena::NodeArena;

/// Sorts the chain starting at `head` ascending and returns its new head.
///
/// Chains of length 0 or 1 are already sorted. Longer chains are cut in
/// half, sorted recursively (depth O(log n)), and merged.
pub(super) fn merge_sort(arena: &mut NodeArena, head: Option<usize>) -> Option<usize> {
    let Some(first) = head else {
        return None;
    };
    if arena.node(first).next.is_none() {
        return head;
    }

    let second = split(arena, first);
    let left = merge_sort(arena, Some(first));
    let right = merge_sort(arena, second);
    merge(arena, left, right)
}

/// Cuts the chain after its midpoint and returns the head of the second
/// half.
///
/// The fast cursor takes two steps for every step of the slow cursor; when
/// it falls off the end, the slow cursor sits on the last node of the first
/// half. A chain of n nodes splits into halves of n/2 rounded up and down.
pub(super) fn split(arena: &mut NodeArena, head: usize) -> Option<usize> {
    let mut slow = head;
    let mut fast = arena.node(head).next;
    while let Some(first_step) = fast {
        fast = arena.node(first_step).next;
        if let Some(second_step) = fast {
            fast = arena.node(second_step).next;
            if let Some(next_slow) = arena.node(slow).next {
                slow = next_slow;
            }
        }
    }
    arena.node_mut(slow).next.take()
}

/// Merges two sorted chains into one sorted chain and returns its head.
///
/// Repeatedly relinks whichever head node holds the smaller value; on equal
/// values the left node goes first, which keeps the sort stable. Once one
/// chain runs out the other is appended whole.
pub(super) fn merge(
    arena: &mut NodeArena,
    mut left: Option<usize>,
    mut right: Option<usize>,
) -> Option<usize> {
    let mut head = None;
    let mut last: Option<usize> = None;
    loop {
        let picked = match (left, right) {
            (None, remainder) | (remainder, None) => {
                match last {
                    Some(index) => arena.node_mut(index).next = remainder,
                    None => head = remainder,
                }
                break;
            }
            (Some(l), Some(r)) => {
                if arena.node(l).value <= arena.node(r).value {
                    left = arena.node(l).next;
                    l
                } else {
                    right = arena.node(r).next;
                    r
                }
            }
        };
        match last {
            Some(index) => arena.node_mut(index).next = Some(picked),
            None => head = Some(picked),
        }
        last = Some(picked);
    }
    head
}
