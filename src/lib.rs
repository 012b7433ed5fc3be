//! A singly linked queue of owned text values.
//!
//! The crate is `no_std` and depends only on `alloc`. The one collection it
//! provides lives in [`queue`]: a FIFO/LIFO queue of strings backed by an
//! index-linked slot arena, with in-place reversal and a stable in-place
//! merge sort. See the module documentation for the full picture.

#![no_std]

extern crate alloc;

pub mod queue;
