use alloc::collections::TryReserveError;
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

/// A chain element: one owned string and the arena index of its successor.
#[derive(Debug)]
pub(super) struct Node {
    pub(super) value: String,
    pub(super) next: Option<usize>,
}

impl Node {
    /// Builds an unlinked node owning an independent copy of `value`.
    pub(super) fn try_copied(value: &str, next: Option<usize>) -> Result<Self, TryReserveError> {
        let mut copy = String::new();
        copy.try_reserve_exact(value.len())?;
        copy.push_str(value);
        Ok(Node { value: copy, next })
    }
}

#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

/// Flat storage for chain nodes, addressed by index.
///
/// Slots freed by [`remove`](NodeArena::remove) are threaded onto a free
/// list and handed back out by [`try_insert`](NodeArena::try_insert), so a
/// queue that churns does not keep growing its backing vector.
#[derive(Debug)]
pub(super) struct NodeArena {
    slots: Vec<Slot>,
    free: Option<usize>,
}

impl NodeArena {
    pub(super) const fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free: None,
        }
    }

    /// Stores `node`, reusing a vacant slot when one exists.
    ///
    /// Fails only when the backing vector cannot grow; the arena is left
    /// unchanged in that case.
    pub(super) fn try_insert(&mut self, node: Node) -> Result<usize, TryReserveError> {
        match self.free {
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(node)) {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                Ok(index)
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Slot::Occupied(node));
                Ok(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of `index` and puts the slot on the free list.
    pub(super) fn remove(&mut self, index: usize) -> Node {
        let slot = mem::replace(
            &mut self.slots[index],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(index);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("removed a vacant slot"),
        }
    }

    pub(super) fn node(&self, index: usize) -> &Node {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain link points at a vacant slot"),
        }
    }

    pub(super) fn node_mut(&mut self, index: usize) -> &mut Node {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain link points at a vacant slot"),
        }
    }

    /// Drops every slot, occupied or vacant. Keeps the allocation.
    pub(super) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    /// Total number of slots, occupied or vacant.
    pub(super) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots on the free list.
    pub(super) fn vacant_count(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.free;
        while let Some(index) = cursor {
            count += 1;
            assert!(count <= self.slots.len(), "free list cycle");
            cursor = match &self.slots[index] {
                Slot::Vacant { next_free } => *next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            };
        }
        count
    }
}
