// Copyright (c) 2024-present, chunked-seq contributors
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use std::marker::PhantomData;

/// A monoidal annotation folded over the elements of a sequence.
///
/// Chunks and spine nodes cache the combined measure of their contents,
/// which lets the engine search by accumulated measure in logarithmic time
/// (split at an index with [`Size`], seek a key with [`MaxKey`], balance by
/// weight with [`Weight`]).
///
/// `combine` must be associative with `identity` as its neutral element.
/// It is *not* required to be commutative; the engine always folds in
/// sequence order.
pub trait Measure<T> {
    /// The measure value
    type Value: Clone + std::fmt::Debug + PartialEq;

    /// Whether [`Measure::uncombine`] is available
    ///
    /// When `false`, a chunk recomputes its cached measure by rescanning its
    /// (at most `K`) elements after a removal.
    const HAS_INVERSE: bool;

    /// Whether `lift` reads the element payload
    ///
    /// When `true`, mutating elements in place (see
    /// `ChunkedSeq::for_each_segment_mut`) forces a bottom-up refresh of all
    /// cached measures.
    const DEPENDS_ON_VALUE: bool;

    /// The neutral element of `combine`.
    fn identity() -> Self::Value;

    /// Measures a single element.
    fn lift(item: &T) -> Self::Value;

    /// Combines two adjacent measures (left-to-right, associative).
    fn combine(a: Self::Value, b: Self::Value) -> Self::Value;

    /// Removes `part` from `total`, such that
    /// `uncombine(combine(a, b), b) == a`.
    ///
    /// Only called when [`Measure::HAS_INVERSE`] is `true`.
    fn uncombine(total: Self::Value, part: Self::Value) -> Self::Value {
        let _ = part;
        unreachable!("measure policy does not supply an inverse: {total:?}");
    }
}

/// The no-op measure for containers that never search by position or key
/// (see `Bag`).
pub struct Trivial;

impl<T> Measure<T> for Trivial {
    type Value = ();

    const HAS_INVERSE: bool = true;
    const DEPENDS_ON_VALUE: bool = false;

    fn identity() -> Self::Value {}

    fn lift(_item: &T) -> Self::Value {}

    fn combine(_a: Self::Value, _b: Self::Value) -> Self::Value {}

    fn uncombine(_total: Self::Value, _part: Self::Value) -> Self::Value {}
}

/// Counts elements; the measure behind indexed access and `split_off`.
pub struct Size;

impl<T> Measure<T> for Size {
    type Value = usize;

    const HAS_INVERSE: bool = true;
    const DEPENDS_ON_VALUE: bool = false;

    fn identity() -> Self::Value {
        0
    }

    fn lift(_item: &T) -> Self::Value {
        1
    }

    fn combine(a: Self::Value, b: Self::Value) -> Self::Value {
        a + b
    }

    fn uncombine(total: Self::Value, part: Self::Value) -> Self::Value {
        total - part
    }
}

/// Assigns a weight to an element for the [`Weight`] measure.
pub trait WeightOf<T> {
    /// The element's weight.
    fn weight(item: &T) -> u64;
}

/// Sums a per-element weight, enabling search by accumulated weight
/// (e.g. splitting a graph frontier by total out-degree).
pub struct Weight<W>(PhantomData<W>);

impl<T, W: WeightOf<T>> Measure<T> for Weight<W> {
    type Value = u64;

    const HAS_INVERSE: bool = true;
    const DEPENDS_ON_VALUE: bool = true;

    fn identity() -> Self::Value {
        0
    }

    fn lift(item: &T) -> Self::Value {
        W::weight(item)
    }

    fn combine(a: Self::Value, b: Self::Value) -> Self::Value {
        a + b
    }

    fn uncombine(total: Self::Value, part: Self::Value) -> Self::Value {
        total - part
    }
}

/// Exposes the ordering key of an element for the [`MaxKey`] measure.
pub trait Keyed {
    /// The key type.
    type Key: Ord + Clone + std::fmt::Debug;

    /// Borrows the element's key.
    fn key(&self) -> &Self::Key;
}

/// Tracks the maximum key of a run of elements; `None` is the identity
/// (no key yet, smaller than everything).
///
/// Over a key-sorted sequence the accumulated maximum at any position is
/// simply the key *at* that position, which turns key lookup into a
/// monotone-predicate search (see `SortedMap`).
pub struct MaxKey;

impl<E: Keyed> Measure<E> for MaxKey {
    type Value = Option<E::Key>;

    const HAS_INVERSE: bool = false;
    const DEPENDS_ON_VALUE: bool = true;

    fn identity() -> Self::Value {
        None
    }

    fn lift(item: &E) -> Self::Value {
        Some(item.key().clone())
    }

    fn combine(a: Self::Value, b: Self::Value) -> Self::Value {
        a.max(b)
    }
}

/// An element count paired with a measure value.
///
/// The spines annotate their interior nodes with a `Summary` rather than a
/// bare measure value, so split-at-index stays available no matter which
/// measure policy the sequence runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary<V> {
    /// Number of elements covered.
    pub count: usize,

    /// Combined measure of the covered elements.
    pub value: V,
}

impl<V> Summary<V> {
    /// Creates a new summary.
    #[must_use]
    pub const fn new(count: usize, value: V) -> Self {
        Self { count, value }
    }
}
