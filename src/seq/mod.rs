// Copyright (c) 2024-present, chunked-seq contributors
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

mod iter;

pub use iter::{Cursor, IntoIter, Iter, Segments};

use crate::{
    chunk::Chunk,
    measure::Measure,
    spine::Spine,
    Error,
};

/// The chunked sequence engine.
///
/// Elements live in a front shortcut chunk, a spine of interior chunks and
/// a back shortcut chunk, in that order. The shortcuts may hold any number
/// of elements up to `K`; chunks inside the spine hold at least `K / 2`.
/// This gives amortized O(1) pushes and pops at both ends, O(log n)
/// indexed access, split and append, and cache-friendly segment iteration.
///
/// The measure policy `M` annotates the spine, enabling
/// [`ChunkedSeq::search_by_measure`]; the spine flavor `S` is
/// interchangeable (see [`crate::Bootstrapped`] and [`crate::FingerTree`]).
/// Most users want the [`crate::Deque`], [`crate::Stack`], [`crate::Bag`]
/// or [`crate::SortedMap`] front ends instead of this type.
pub struct ChunkedSeq<T, M, S, const K: usize>
where
    M: Measure<T>,
{
    front: Chunk<T, M, K>,
    back: Chunk<T, M, K>,
    spine: S,
    len: usize,
}

impl<T, M, S, const K: usize> ChunkedSeq<T, M, S, K>
where
    M: Measure<T>,
    S: Spine<T, M, K>,
{
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            front: Chunk::new(),
            back: Chunk::new(),
            spine: S::default(),
            len: 0,
        }
    }

    /// Number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Combined measure of all elements, O(1).
    #[must_use]
    pub fn total_measure(&self) -> M::Value {
        M::combine(
            M::combine(self.front.measure(), self.spine.summary().value),
            self.back.measure(),
        )
    }

    /// Pushes an element before all others.
    pub fn push_front(&mut self, item: T) {
        if self.front.is_full() {
            self.spine
                .push_front_chunk(std::mem::take(&mut self.front));
        }
        self.front.push_front(item);
        self.len += 1;
    }

    /// Pushes an element after all others.
    pub fn push_back(&mut self, item: T) {
        if self.back.is_full() {
            self.spine.push_back_chunk(std::mem::take(&mut self.back));
        }
        self.back.push_back(item);
        self.len += 1;
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        if let Some(item) = self.front.pop_front() {
            self.len -= 1;
            return Some(item);
        }
        if let Some(chunk) = self.spine.pop_front_chunk() {
            self.front = chunk;
            let item = self.front.pop_front();
            debug_assert!(item.is_some());
            if item.is_some() {
                self.len -= 1;
            }
            return item;
        }
        let item = self.back.pop_front();
        if item.is_some() {
            self.len -= 1;
        }
        item
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        if let Some(item) = self.back.pop_back() {
            self.len -= 1;
            return Some(item);
        }
        if let Some(chunk) = self.spine.pop_back_chunk() {
            self.back = chunk;
            let item = self.back.pop_back();
            debug_assert!(item.is_some());
            if item.is_some() {
                self.len -= 1;
            }
            return item;
        }
        let item = self.front.pop_back();
        if item.is_some() {
            self.len -= 1;
        }
        item
    }

    /// Fallible [`ChunkedSeq::pop_front`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] on an empty sequence.
    pub fn try_pop_front(&mut self) -> crate::Result<T> {
        self.pop_front().ok_or(Error::Empty)
    }

    /// Fallible [`ChunkedSeq::pop_back`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] on an empty sequence.
    pub fn try_pop_back(&mut self) -> crate::Result<T> {
        self.pop_back().ok_or(Error::Empty)
    }

    /// Borrows the first element.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        if let Some(item) = self.front.front() {
            return Some(item);
        }
        if let Some(chunk) = self.spine.peek_front_chunk() {
            return chunk.front();
        }
        self.back.front()
    }

    /// Borrows the last element.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if let Some(item) = self.back.back() {
            return Some(item);
        }
        if let Some(chunk) = self.spine.peek_back_chunk() {
            return chunk.back();
        }
        self.front.back()
    }

    /// Borrows the element at `index`, O(log n).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let (chunk, start) = self.leaf_holding(index);
        chunk.get(index - start)
    }

    /// Mutably borrows the element at `index`.
    ///
    /// The element's measure contribution must not change through the
    /// returned reference (irrelevant for [`crate::Size`] and
    /// [`crate::Trivial`], where the measure ignores the payload).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.front.len() {
            return self.front.get_mut(index);
        }
        let mut index = index - self.front.len();
        if index < self.spine.len() {
            let (chunk, before) = match self.spine.locate_mut(|s| s.count > index) {
                Some(hit) => hit,
                None => unreachable!("index inside spine not located"),
            };
            return chunk.get_mut(index - before.count);
        }
        index -= self.spine.len();
        self.back.get_mut(index)
    }

    /// Splits the sequence at `at`; `self` keeps `[0, at)` and the tail is
    /// returned. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] (sequence unchanged) if `at > len`.
    pub fn split_off(&mut self, at: usize) -> crate::Result<Self> {
        if at > self.len {
            return Err(Error::OutOfRange);
        }
        let total = self.len;

        if at <= self.front.len() {
            let tail = self.front.split_off_back(self.front.len() - at);
            self.len = at;
            return Ok(Self {
                front: tail,
                back: std::mem::take(&mut self.back),
                spine: std::mem::take(&mut self.spine),
                len: total - at,
            });
        }

        let in_spine = at - self.front.len();
        if in_spine <= self.spine.len() {
            log::trace!("splitting spine at element {at} of {total}");
            let (mut chunk, right_spine, before) = self.spine.split(|s| s.count >= in_spine);
            let keep = in_spine - before.count;
            let tail = chunk.split_off_back(chunk.len() - keep);
            let right = Self {
                front: tail,
                back: std::mem::take(&mut self.back),
                spine: right_spine,
                len: total - at,
            };
            self.back = chunk;
            self.len = at;
            return Ok(right);
        }

        let in_back = at - self.front.len() - self.spine.len();
        let tail = self.back.split_off_back(self.back.len() - in_back);
        self.len = at;
        Ok(Self {
            front: tail,
            back: Chunk::new(),
            spine: S::default(),
            len: total - at,
        })
    }

    /// Moves all elements of `other` behind `self`'s, leaving `other`
    /// empty. O(log n).
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.swap(other);
            return;
        }
        log::trace!(
            "appending chunked sequences: {} + {} elements",
            self.len,
            other.len
        );
        let total = self.len + other.len;
        let mut seam_left = std::mem::take(&mut self.back);
        let mut seam_right = std::mem::take(&mut other.front);
        if seam_left.len() + seam_right.len() <= K {
            seam_left.append(&mut seam_right);
            self.push_back_into_spine(seam_left);
        } else {
            // rebalance so that both seam chunks are admissible
            if !seam_left.is_more_than_half_full() {
                let need = K / 2 + 1 - seam_left.len();
                let mut moved = seam_right.split_off_front(need);
                seam_left.append(&mut moved);
            } else if !seam_right.is_more_than_half_full() {
                let need = K / 2 + 1 - seam_right.len();
                let mut merged = seam_left.split_off_back(need);
                merged.append(&mut seam_right);
                seam_right = merged;
            }
            self.push_back_into_spine(seam_left);
            self.push_back_into_spine(seam_right);
        }
        self.spine.append(&mut other.spine);
        self.back = std::mem::take(&mut other.back);
        self.len = total;
        other.len = 0;
    }

    // Admits a chunk at the back of the spine, merging or rebalancing with
    // the rightmost leaf when the chunk is below half full.
    fn push_back_into_spine(&mut self, chunk: Chunk<T, M, K>) {
        if chunk.is_empty() {
            return;
        }
        if 2 * chunk.len() >= K {
            self.spine.push_back_chunk(chunk);
            return;
        }
        let mut chunk = chunk;
        if let Some(mut last) = self.spine.pop_back_chunk() {
            if last.len() + chunk.len() <= K {
                last.append(&mut chunk);
                self.spine.push_back_chunk(last);
            } else {
                let total = last.len() + chunk.len();
                let need = total.div_ceil(2) - chunk.len();
                let mut moved = last.split_off_back(need);
                moved.append(&mut chunk);
                self.spine.push_back_chunk(last);
                self.spine.push_back_chunk(moved);
            }
        } else if self.front.len() + chunk.len() <= K {
            self.front.append(&mut chunk);
        } else {
            let need = K / 2 + 1 - chunk.len();
            let mut moved = self.front.split_off_back(need);
            moved.append(&mut chunk);
            self.spine.push_back_chunk(moved);
        }
    }

    /// Inserts `item` before position `index`. Amortized O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] (sequence unchanged) if `index > len`.
    pub fn insert_at(&mut self, index: usize, item: T) -> crate::Result<()> {
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        if index == 0 {
            self.push_front(item);
            return Ok(());
        }
        if index == self.len {
            self.push_back(item);
            return Ok(());
        }
        let mut tail = self.split_off(index)?;
        self.push_back(item);
        self.append(&mut tail);
        Ok(())
    }

    /// Removes and returns the element at `index`. Amortized O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] (sequence unchanged) if
    /// `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> crate::Result<T> {
        if index >= self.len {
            return Err(Error::OutOfRange);
        }
        let mut tail = self.split_off(index)?;
        let item = match tail.pop_front() {
            Some(item) => item,
            None => unreachable!("non-empty tail after in-range split"),
        };
        self.append(&mut tail);
        Ok(item)
    }

    /// Removes the elements in `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] (sequence unchanged) if the range is
    /// inverted or reaches past the end.
    pub fn erase_range(&mut self, start: usize, end: usize) -> crate::Result<()> {
        if start > end || end > self.len {
            return Err(Error::OutOfRange);
        }
        if start == end {
            return Ok(());
        }
        let mut tail = self.split_off(end)?;
        drop(self.split_off(start)?);
        self.append(&mut tail);
        Ok(())
    }

    /// Appends clones of `items`, chunk by chunk.
    pub fn push_n_back(&mut self, items: &[T])
    where
        T: Clone,
    {
        let mut rest = items;
        while !rest.is_empty() {
            if self.back.is_full() {
                self.spine.push_back_chunk(std::mem::take(&mut self.back));
            }
            let take = (K - self.back.len()).min(rest.len());
            let (now, later) = rest.split_at(take);
            match self.back.push_n_back(now) {
                Ok(()) => {}
                Err(_) => unreachable!("bulk push exceeded measured room"),
            }
            rest = later;
        }
        self.len += items.len();
    }

    /// Prepends clones of `items`, preserving their order.
    pub fn push_n_front(&mut self, items: &[T])
    where
        T: Clone,
    {
        let mut rest = items;
        while !rest.is_empty() {
            if self.front.is_full() {
                self.spine
                    .push_front_chunk(std::mem::take(&mut self.front));
            }
            let take = (K - self.front.len()).min(rest.len());
            let (later, now) = rest.split_at(rest.len() - take);
            match self.front.push_n_front(now) {
                Ok(()) => {}
                Err(_) => unreachable!("bulk push exceeded measured room"),
            }
            rest = later;
        }
        self.len += items.len();
    }

    /// Removes the last `n` elements, returned in sequence order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] (sequence unchanged) if `n > len`.
    pub fn pop_n_back(&mut self, n: usize) -> crate::Result<Vec<T>> {
        if n > self.len {
            return Err(Error::Underflow);
        }
        let mut parts = Vec::new();
        let mut remaining = n;
        while remaining > 0 {
            if self.back.is_empty() {
                if let Some(chunk) = self.spine.pop_back_chunk() {
                    self.back = chunk;
                } else {
                    std::mem::swap(&mut self.front, &mut self.back);
                }
                continue;
            }
            let take = remaining.min(self.back.len());
            match self.back.pop_n_back(take) {
                Ok(part) => parts.push(part),
                Err(_) => unreachable!("bulk pop exceeded measured length"),
            }
            remaining -= take;
        }
        self.len -= n;
        let mut out = Vec::with_capacity(n);
        for part in parts.into_iter().rev() {
            out.extend(part);
        }
        Ok(out)
    }

    /// Removes the first `n` elements, returned in sequence order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] (sequence unchanged) if `n > len`.
    pub fn pop_n_front(&mut self, n: usize) -> crate::Result<Vec<T>> {
        if n > self.len {
            return Err(Error::Underflow);
        }
        let mut out = Vec::with_capacity(n);
        let mut remaining = n;
        while remaining > 0 {
            if self.front.is_empty() {
                if let Some(chunk) = self.spine.pop_front_chunk() {
                    self.front = chunk;
                } else {
                    std::mem::swap(&mut self.front, &mut self.back);
                }
                continue;
            }
            let take = remaining.min(self.front.len());
            match self.front.pop_n_front(take) {
                Ok(part) => out.extend(part),
                Err(_) => unreachable!("bulk pop exceeded measured length"),
            }
            remaining -= take;
        }
        self.len -= n;
        Ok(out)
    }

    /// Clones the first `n` elements without removing them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if `n > len`.
    pub fn front_n(&self, n: usize) -> crate::Result<Vec<T>>
    where
        T: Clone,
    {
        if n > self.len {
            return Err(Error::Underflow);
        }
        Ok(self.iter().take(n).cloned().collect())
    }

    /// Clones the last `n` elements (in sequence order) without removing
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if `n > len`.
    pub fn back_n(&self, n: usize) -> crate::Result<Vec<T>>
    where
        T: Clone,
    {
        if n > self.len {
            return Err(Error::Underflow);
        }
        let mut out: Vec<T> = self.iter().rev().take(n).cloned().collect();
        out.reverse();
        Ok(out)
    }

    /// Calls `f` on every element, front to back.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.for_each_segment(|segment| {
            for item in segment {
                f(item);
            }
        });
    }

    /// Calls `f` on every physically contiguous run of elements, front to
    /// back.
    ///
    /// The slices borrow chunk storage directly; a full pass touches each
    /// element exactly once with at most two runs per chunk.
    pub fn for_each_segment<F>(&self, mut f: F)
    where
        F: FnMut(&[T]),
    {
        visit_segments(&self.front, &mut f);
        let mut visit = |chunk: &Chunk<T, M, K>| visit_segments(chunk, &mut f);
        self.spine.for_each_chunk(&mut visit);
        visit_segments(&self.back, &mut f);
    }

    /// Mutable [`ChunkedSeq::for_each_segment`].
    ///
    /// `f` may rewrite elements in place but must not change the sequence
    /// structure. When the measure policy reads element payloads, all
    /// cached measures are recomputed after the traversal.
    pub fn for_each_segment_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut [T]),
    {
        visit_segments_mut(&mut self.front, &mut f);
        let mut visit = |chunk: &mut Chunk<T, M, K>| visit_segments_mut(chunk, &mut f);
        self.spine.for_each_chunk_mut(&mut visit);
        visit_segments_mut(&mut self.back, &mut f);
        if M::DEPENDS_ON_VALUE {
            self.front.recompute_measure();
            self.back.recompute_measure();
            self.spine.refresh_measures();
        }
    }

    /// [`ChunkedSeq::for_each_segment`] restricted to the index range
    /// `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the range is inverted or reaches
    /// past the end.
    pub fn for_each_segment_in_range<F>(
        &self,
        start: usize,
        end: usize,
        mut f: F,
    ) -> crate::Result<()>
    where
        F: FnMut(&[T]),
    {
        if start > end || end > self.len {
            return Err(Error::OutOfRange);
        }
        if start == end {
            return Ok(());
        }
        let mut pos = 0usize;
        self.for_each_segment(|segment| {
            let seg_start = pos;
            let seg_end = pos + segment.len();
            pos = seg_end;
            if seg_end <= start || seg_start >= end {
                return;
            }
            let lo = start.max(seg_start) - seg_start;
            let hi = end.min(seg_end) - seg_start;
            if let Some(window) = segment.get(lo..hi) {
                f(window);
            }
        });
        Ok(())
    }

    /// Mutable [`ChunkedSeq::for_each_segment_in_range`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the range is inverted or reaches
    /// past the end.
    pub fn for_each_segment_in_range_mut<F>(
        &mut self,
        start: usize,
        end: usize,
        mut f: F,
    ) -> crate::Result<()>
    where
        F: FnMut(&mut [T]),
    {
        if start > end || end > self.len {
            return Err(Error::OutOfRange);
        }
        if start == end {
            return Ok(());
        }
        let mut pos = 0usize;
        self.for_each_segment_mut(|segment| {
            let seg_start = pos;
            let seg_end = pos + segment.len();
            pos = seg_end;
            if seg_end <= start || seg_start >= end {
                return;
            }
            let lo = start.max(seg_start) - seg_start;
            let hi = end.min(seg_end) - seg_start;
            if let Some(window) = segment.get_mut(lo..hi) {
                f(window);
            }
        });
        Ok(())
    }

    /// Finds the first index whose inclusive prefix measure satisfies
    /// `pred`, or `None` if even the total measure does not.
    ///
    /// `pred` must be monotone over prefix measures (once true, true for
    /// every longer prefix). O(log n) plus a scan inside one chunk.
    pub fn search_by_measure<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&M::Value) -> bool,
    {
        let mut acc = M::identity();
        for (offset, item) in self.front.iter().enumerate() {
            let with = M::combine(acc.clone(), M::lift(item));
            if pred(&with) {
                return Some(offset);
            }
            acc = with;
        }

        let with_spine = M::combine(acc.clone(), self.spine.summary().value);
        if pred(&with_spine) {
            let base = acc;
            let located = self
                .spine
                .locate(|s| pred(&M::combine(base.clone(), s.value.clone())));
            let (chunk, before) = match located {
                Some(hit) => hit,
                None => unreachable!("measure predicate fired for the spine but located nothing"),
            };
            let mut acc = M::combine(base, before.value);
            for (offset, item) in chunk.iter().enumerate() {
                let with = M::combine(acc.clone(), M::lift(item));
                if pred(&with) {
                    return Some(self.front.len() + before.count + offset);
                }
                acc = with;
            }
            unreachable!("measure predicate did not fire inside the located chunk");
        }
        acc = with_spine;

        for (offset, item) in self.back.iter().enumerate() {
            let with = M::combine(acc.clone(), M::lift(item));
            if pred(&with) {
                return Some(self.front.len() + self.spine.len() + offset);
            }
            acc = with;
        }
        None
    }

    /// Swaps two sequences in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Drops all elements.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Borrowed element iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.collect_segments(), self.len)
    }

    /// Iterator over the physically contiguous runs, front to back.
    pub fn segments(&self) -> Segments<'_, T> {
        Segments::new(self.collect_segments())
    }

    /// Cursor at position `index` (the end sentinel when `index == len`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`.
    pub fn cursor_at(&self, index: usize) -> crate::Result<Cursor<'_, T, M, S, K>> {
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        Ok(Cursor::new(self, index))
    }

    /// Cursor at the first position.
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, T, M, S, K> {
        Cursor::new(self, 0)
    }

    /// Cursor at the end sentinel, one past the last element.
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, T, M, S, K> {
        Cursor::new(self, self.len)
    }

    // Locates the chunk holding `index` and its starting position.
    pub(crate) fn leaf_holding(&self, index: usize) -> (&Chunk<T, M, K>, usize) {
        debug_assert!(index < self.len);
        if index < self.front.len() {
            return (&self.front, 0);
        }
        let in_spine = index - self.front.len();
        if in_spine < self.spine.len() {
            let (chunk, before) = match self.spine.locate(|s| s.count > in_spine) {
                Some(hit) => hit,
                None => unreachable!("index inside spine not located"),
            };
            return (chunk, self.front.len() + before.count);
        }
        (&self.back, self.front.len() + self.spine.len())
    }

    fn collect_segments(&self) -> Vec<&[T]> {
        let mut chunks = Vec::new();
        self.spine.chunks(&mut chunks);
        let mut segments = Vec::with_capacity(2 * (chunks.len() + 2));
        let (a, b) = self.front.segments();
        for segment in [a, b] {
            if !segment.is_empty() {
                segments.push(segment);
            }
        }
        for chunk in chunks {
            let (a, b) = chunk.segments();
            for segment in [a, b] {
                if !segment.is_empty() {
                    segments.push(segment);
                }
            }
        }
        let (a, b) = self.back.segments();
        for segment in [a, b] {
            if !segment.is_empty() {
                segments.push(segment);
            }
        }
        segments
    }

    /// Walks the whole structure asserting the chunk and spine invariants.
    /// Intended for tests; O(n).
    #[doc(hidden)]
    pub fn check_invariants(&self) {
        self.front.check();
        self.back.check();
        self.spine.check();
        assert_eq!(
            self.len,
            self.front.len() + self.spine.len() + self.back.len(),
            "cached length out of sync"
        );
        let mut expected = M::identity();
        self.for_each(|item| expected = M::combine(expected.clone(), M::lift(item)));
        assert!(
            expected == self.total_measure(),
            "total measure inconsistent with elements"
        );
    }
}

fn visit_segments<T, M, const K: usize, F>(chunk: &Chunk<T, M, K>, f: &mut F)
where
    M: Measure<T>,
    F: FnMut(&[T]),
{
    let (a, b) = chunk.segments();
    if !a.is_empty() {
        f(a);
    }
    if !b.is_empty() {
        f(b);
    }
}

fn visit_segments_mut<T, M, const K: usize, F>(chunk: &mut Chunk<T, M, K>, f: &mut F)
where
    M: Measure<T>,
    F: FnMut(&mut [T]),
{
    let (a, b) = chunk.segments_mut();
    if !a.is_empty() {
        f(a);
    }
    if !b.is_empty() {
        f(b);
    }
}

impl<T, M, S, const K: usize> Default for ChunkedSeq<T, M, S, K>
where
    M: Measure<T>,
    S: Spine<T, M, K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M, S, const K: usize> Clone for ChunkedSeq<T, M, S, K>
where
    T: Clone,
    M: Measure<T>,
    S: Spine<T, M, K> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            spine: self.spine.clone(),
            len: self.len,
        }
    }
}

impl<T, M, S, const K: usize> std::fmt::Debug for ChunkedSeq<T, M, S, K>
where
    T: std::fmt::Debug,
    M: Measure<T>,
    S: Spine<T, M, K>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, M, S, const K: usize> PartialEq for ChunkedSeq<T, M, S, K>
where
    T: PartialEq,
    M: Measure<T>,
    S: Spine<T, M, K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, M, S, const K: usize> Eq for ChunkedSeq<T, M, S, K>
where
    T: Eq,
    M: Measure<T>,
    S: Spine<T, M, K>,
{
}

impl<T, M, S, const K: usize> FromIterator<T> for ChunkedSeq<T, M, S, K>
where
    M: Measure<T>,
    S: Spine<T, M, K>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T, M, S, const K: usize> Extend<T> for ChunkedSeq<T, M, S, K>
where
    M: Measure<T>,
    S: Spine<T, M, K>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T, M, S, const K: usize> IntoIterator for &'a ChunkedSeq<T, M, S, K>
where
    M: Measure<T>,
    S: Spine<T, M, K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, M, S, const K: usize> IntoIterator for ChunkedSeq<T, M, S, K>
where
    M: Measure<T>,
    S: Spine<T, M, K>,
{
    type Item = T;
    type IntoIter = IntoIter<T, M, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}
