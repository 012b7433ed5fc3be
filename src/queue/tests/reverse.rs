extern crate std;

use alloc::vec::Vec;

use crate::queue::TextQueue;

#[test]
fn test_reverse_reverses_order() {
    let mut queue: TextQueue = ["a", "b", "c"].into_iter().collect();
    queue.reverse();
    assert_eq!(queue.iter().collect::<Vec<_>>(), ["c", "b", "a"]);
    assert_eq!(queue.front(), Some("c"));
    assert_eq!(queue.back(), Some("a"));
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_reverse_twice_is_identity() {
    let original: TextQueue = ["a", "b", "c", "d"].into_iter().collect();
    let mut queue = original.clone();
    queue.reverse();
    queue.reverse();
    assert_eq!(queue, original);
}

#[test]
fn test_reverse_empty_is_a_noop() {
    let mut queue = TextQueue::new();
    queue.reverse();
    assert!(queue.is_empty());
    assert_eq!(queue.front(), None);
    assert_eq!(queue.back(), None);
}

#[test]
fn test_reverse_single_keeps_both_ends() {
    let mut queue: TextQueue = ["only"].into_iter().collect();
    queue.reverse();
    assert_eq!(queue.front(), Some("only"));
    assert_eq!(queue.back(), Some("only"));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_reverse_two_swaps_ends() {
    let mut queue: TextQueue = ["a", "b"].into_iter().collect();
    queue.reverse();
    assert_eq!(queue.front(), Some("b"));
    assert_eq!(queue.back(), Some("a"));
}

#[test]
fn test_reverse_then_push_and_pop() {
    let mut queue: TextQueue = ["a", "b"].into_iter().collect();
    queue.reverse();
    queue.try_push_back("c").unwrap();
    assert_eq!(queue.pop_front().as_deref(), Some("b"));
    assert_eq!(queue.pop_front().as_deref(), Some("a"));
    assert_eq!(queue.pop_front().as_deref(), Some("c"));
    assert_eq!(queue.pop_front(), None);
}
