// Copyright (c) 2024-present, chunked-seq contributors
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Balanced trees of leaf chunks.
//!
//! A spine stores the interior chunks of a sequence and annotates its nodes
//! with cached [`Summary`] values, so that searching for an element index or
//! an accumulated measure descends the tree instead of scanning it. Two
//! interchangeable flavors are provided: [`Bootstrapped`], a chunked
//! sequence of chunks one level of recursion down, and [`FingerTree`], a
//! classic 2–3 finger tree. The sequence engine only sees the [`Spine`]
//! trait.

pub(crate) mod bootstrapped;
pub(crate) mod finger_tree;

pub use bootstrapped::Bootstrapped;
pub use finger_tree::FingerTree;

use crate::{chunk::Chunk, measure::Measure, measure::Summary};

/// The abstract contract of a spine: a balanced tree of leaf chunks with
/// cached summaries.
///
/// Leaf chunks are admitted by the engine only when at least half full, so
/// the tree depth is logarithmic in the element count. The predicates given
/// to [`Spine::split`] and [`Spine::locate`] must be monotone over the
/// accumulated summary (once true, true for every longer prefix).
pub trait Spine<T, M: Measure<T>, const K: usize>: Default {
    /// Returns `true` if the spine holds no chunks.
    fn is_empty(&self) -> bool;

    /// Total number of elements across all leaf chunks.
    fn len(&self) -> usize;

    /// Combined summary of all leaf chunks, O(1).
    fn summary(&self) -> Summary<M::Value>;

    /// Inserts a leaf chunk before all others.
    fn push_front_chunk(&mut self, chunk: Chunk<T, M, K>);

    /// Inserts a leaf chunk after all others.
    fn push_back_chunk(&mut self, chunk: Chunk<T, M, K>);

    /// Removes and returns the first leaf chunk.
    fn pop_front_chunk(&mut self) -> Option<Chunk<T, M, K>>;

    /// Removes and returns the last leaf chunk.
    fn pop_back_chunk(&mut self) -> Option<Chunk<T, M, K>>;

    /// Borrows the first leaf chunk.
    fn peek_front_chunk(&self) -> Option<&Chunk<T, M, K>>;

    /// Borrows the last leaf chunk.
    fn peek_back_chunk(&self) -> Option<&Chunk<T, M, K>>;

    /// Splits at the first leaf chunk whose inclusive accumulated summary
    /// satisfies `pred`.
    ///
    /// `self` keeps the chunks before the straddling chunk; returns the
    /// straddling chunk itself, the spine of the chunks after it, and the
    /// summary accumulated before it.
    ///
    /// The predicate must flip somewhere inside the spine: `pred` must be
    /// false on the empty summary and true on [`Spine::summary`].
    fn split<F>(&mut self, pred: F) -> (Chunk<T, M, K>, Self, Summary<M::Value>)
    where
        F: FnMut(&Summary<M::Value>) -> bool;

    /// Moves all of `other`'s chunks behind `self`'s, leaving `other`
    /// empty.
    fn append(&mut self, other: &mut Self);

    /// Finds the leaf chunk at which `pred` over the inclusive accumulated
    /// summary first becomes true, without restructuring.
    ///
    /// Returns the chunk and the summary accumulated before it, or `None`
    /// if the predicate never fires.
    fn locate<F>(&self, pred: F) -> Option<(&Chunk<T, M, K>, Summary<M::Value>)>
    where
        F: FnMut(&Summary<M::Value>) -> bool;

    /// Mutable [`Spine::locate`].
    ///
    /// Callers must not change an element's measure contribution through
    /// the returned chunk.
    fn locate_mut<F>(&mut self, pred: F) -> Option<(&mut Chunk<T, M, K>, Summary<M::Value>)>
    where
        F: FnMut(&Summary<M::Value>) -> bool;

    /// Visits every leaf chunk, front to back.
    fn for_each_chunk<F>(&self, f: &mut F)
    where
        F: FnMut(&Chunk<T, M, K>);

    /// Collects references to every leaf chunk, front to back.
    ///
    /// Unlike [`Spine::for_each_chunk`], the references outlive the walk;
    /// the engine's iterators are built on this.
    fn chunks<'s>(&'s self, out: &mut Vec<&'s Chunk<T, M, K>>);

    /// Mutable [`Spine::for_each_chunk`].
    ///
    /// If the callback changes measure contributions, follow up with
    /// [`Spine::refresh_measures`].
    fn for_each_chunk_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut Chunk<T, M, K>);

    /// Recomputes every cached measure bottom-up.
    ///
    /// Needed after elements were mutated in place under a measure policy
    /// whose `lift` reads the element payload.
    fn refresh_measures(&mut self);

    /// Walks the whole tree asserting the structural and cached-measure
    /// invariants. Verification helper; O(n).
    fn check(&self);
}

pub(crate) fn empty_summary<T, M: Measure<T>>() -> Summary<M::Value> {
    Summary::new(0, M::identity())
}

pub(crate) fn join<T, M: Measure<T>>(
    a: Summary<M::Value>,
    b: Summary<M::Value>,
) -> Summary<M::Value> {
    Summary::new(a.count + b.count, M::combine(a.value, b.value))
}

pub(crate) fn chunk_summary<T, M: Measure<T>, const K: usize>(
    chunk: &Chunk<T, M, K>,
) -> Summary<M::Value> {
    Summary::new(chunk.len(), chunk.measure())
}
