// Copyright (c) 2024-present, chunked-seq contributors
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Algebraic container laws as quickcheck properties, checked on a small
//! chunk capacity so the spine gets exercised by short inputs too.

use chunked_seq::{Bootstrapped, ChunkedSeq, FingerTree, Size, SortedMap};
use quickcheck::quickcheck;

type Boot8 = ChunkedSeq<u32, Size, Bootstrapped<u32, Size, 8>, 8>;
type Finger8 = ChunkedSeq<u32, Size, FingerTree<u32, Size, 8>, 8>;

quickcheck! {
    fn split_append_round_trip(items: Vec<u32>, at: usize) -> bool {
        let at = at % (items.len() + 1);
        let mut seq: Boot8 = items.iter().copied().collect();
        let mut tail = match seq.split_off(at) {
            Ok(tail) => tail,
            Err(_) => return false,
        };
        if seq.len() != at || tail.len() != items.len() - at {
            return false;
        }
        seq.append(&mut tail);
        seq.check_invariants();
        seq.iter().copied().eq(items.iter().copied())
    }

    fn append_then_split_recovers_both(left: Vec<u32>, right: Vec<u32>) -> bool {
        let mut seq: Finger8 = left.iter().copied().collect();
        let mut other: Finger8 = right.iter().copied().collect();
        seq.append(&mut other);
        seq.check_invariants();

        let tail = match seq.split_off(left.len()) {
            Ok(tail) => tail,
            Err(_) => return false,
        };
        seq.iter().copied().eq(left.iter().copied())
            && tail.iter().copied().eq(right.iter().copied())
    }

    fn push_pop_are_inverses(items: Vec<u32>, value: u32) -> bool {
        let mut seq: Boot8 = items.iter().copied().collect();

        seq.push_back(value);
        if seq.pop_back() != Some(value) {
            return false;
        }
        seq.push_front(value);
        if seq.pop_front() != Some(value) {
            return false;
        }
        seq.check_invariants();
        seq.iter().copied().eq(items.iter().copied())
    }

    fn bulk_push_matches_single_pushes(items: Vec<u32>) -> bool {
        let mut bulk = Boot8::new();
        bulk.push_n_back(&items);
        bulk.check_invariants();

        let mut single = Boot8::new();
        for item in &items {
            single.push_back(*item);
        }
        bulk == single
    }

    fn iteration_round_trips(items: Vec<u32>) -> bool {
        let seq: Boot8 = items.iter().copied().collect();

        let forward: Vec<u32> = seq.iter().copied().collect();
        let mut reverse: Vec<u32> = seq.iter().rev().copied().collect();
        reverse.reverse();
        let mut segmentwise = Vec::with_capacity(items.len());
        seq.for_each_segment(|run| segmentwise.extend_from_slice(run));

        forward == items && reverse == items && segmentwise == items
    }

    fn random_access_matches_iteration(items: Vec<u32>) -> bool {
        let seq: Finger8 = items.iter().copied().collect();
        seq.iter()
            .enumerate()
            .all(|(index, item)| seq.get(index) == Some(item))
    }

    fn spine_flavors_agree(items: Vec<u32>, at: usize) -> bool {
        let at = at % (items.len() + 1);
        let mut boot: Boot8 = items.iter().copied().collect();
        let mut finger: Finger8 = items.iter().copied().collect();

        let boot_tail = match boot.split_off(at) {
            Ok(tail) => tail,
            Err(_) => return false,
        };
        let finger_tail = match finger.split_off(at) {
            Ok(tail) => tail,
            Err(_) => return false,
        };
        boot.iter().eq(finger.iter()) && boot_tail.iter().eq(finger_tail.iter())
    }

    fn map_stays_sorted_without_duplicates(entries: Vec<(u8, u32)>) -> bool {
        let map: SortedMap<u8, u32> = entries.iter().copied().collect();
        map.check_invariants();

        let keys: Vec<u8> = map.keys().copied().collect();
        let mut expected: Vec<u8> = entries.iter().map(|(key, _)| *key).collect();
        expected.sort_unstable();
        expected.dedup();
        keys == expected
    }
}
