// Copyright (c) 2024-present, chunked-seq contributors
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A K.I.S.S. implementation of chunked sequences.
//!
//! ##### About
//!
//! A chunked sequence packs consecutive elements into fixed-capacity
//! chunks and hangs the interior chunks off a balanced spine annotated
//! with a monoidal cached measure. Compared to a flat ring buffer this
//! keeps pushes and pops at both ends amortized O(1) while also providing
//! O(log n) split-at-index, concatenation and measure-guided search, and
//! cache-friendly segment-wise iteration.
//!
//! The crate exports the raw engine ([`ChunkedSeq`]) plus four front ends
//! built on it:
//!
//! - [`Deque`]: double-ended queue with indexed access, split and append
//! - [`Stack`]: back-biased subset
//! - [`Bag`]: unordered, with a cheap approximate split for work
//!   distribution
//! - [`SortedMap`]: ordered map keyed through a max-key measure
//!
//! Sequences are plain single-owner values: no internal locking, deep
//! `clone`, O(1) `swap`. Iterators and cursors borrow the sequence, so
//! mutating while one is alive is rejected at compile time.
//!
//! # Example usage
//!
//! ```
//! use chunked_seq::Deque;
//!
//! // a deque with the default chunk capacity of 512
//! let mut numbers: Deque<u64> = (0..10_000).collect();
//!
//! numbers.push_front(42);
//! assert_eq!(Some(&42), numbers.front());
//! assert_eq!(Some(&1_234), numbers.get(1_235));
//!
//! // split and append are logarithmic, not linear
//! let mut tail = numbers.split_off(5_000)?;
//! assert_eq!(5_000, numbers.len());
//! numbers.append(&mut tail);
//! assert_eq!(10_001, numbers.len());
//!
//! // iterate over physically contiguous runs
//! let mut total = 0u64;
//! numbers.for_each_segment(|run| total += run.iter().sum::<u64>());
//! assert_eq!(42 + (0..10_000u64).sum::<u64>(), total);
//! # Ok::<(), chunked_seq::Error>(())
//! ```
//!
//! The chunk capacity is a compile-time parameter; small capacities (2, 8)
//! are useful to stress the spine in tests, large ones (512, 1024) for
//! throughput.

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]

mod bag;
mod chunk;
mod deque;
mod error;
mod map;
mod measure;
mod seq;
mod spine;
mod stack;

pub use {
    bag::Bag,
    chunk::Chunk,
    deque::Deque,
    error::{Error, Result},
    map::SortedMap,
    measure::{Keyed, MaxKey, Measure, Size, Summary, Trivial, Weight, WeightOf},
    seq::{ChunkedSeq, Cursor, IntoIter, Iter, Segments},
    spine::{Bootstrapped, FingerTree, Spine},
    stack::Stack,
};

/// A chunked sequence running the bootstrapped spine flavor.
pub type BootstrappedSeq<T, M, const K: usize> = ChunkedSeq<T, M, Bootstrapped<T, M, K>, K>;

/// A chunked sequence running the finger-tree spine flavor.
pub type FingerTreeSeq<T, M, const K: usize> = ChunkedSeq<T, M, FingerTree<T, M, K>, K>;
