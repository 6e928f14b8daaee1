// Copyright (c) 2024-present, chunked-seq contributors
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Measure-weighted search, the way a graph traversal uses a chunked
//! frontier: vertices weighted by out-degree, split points chosen by
//! accumulated weight.

use chunked_seq::{Bootstrapped, ChunkedSeq, Weight, WeightOf};
use rand::{rngs::StdRng, Rng, SeedableRng};
use test_log::test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Vertex {
    id: u32,
    out_degree: u32,
}

struct ByOutDegree;

impl WeightOf<Vertex> for ByOutDegree {
    fn weight(vertex: &Vertex) -> u64 {
        u64::from(vertex.out_degree)
    }
}

type Frontier = ChunkedSeq<
    Vertex,
    Weight<ByOutDegree>,
    Bootstrapped<Vertex, Weight<ByOutDegree>, 8>,
    8,
>;

fn prefix_weights(vertices: &[Vertex]) -> Vec<u64> {
    vertices
        .iter()
        .scan(0u64, |acc, vertex| {
            *acc += u64::from(vertex.out_degree);
            Some(*acc)
        })
        .collect()
}

#[test]
fn weighted_search_matches_linear_scan() {
    let mut rng = StdRng::seed_from_u64(99);
    let vertices: Vec<Vertex> = (0..500)
        .map(|id| Vertex {
            id,
            out_degree: rng.random_range(0..10),
        })
        .collect();
    let frontier: Frontier = vertices.iter().copied().collect();
    frontier.check_invariants();

    let prefixes = prefix_weights(&vertices);
    let total = *prefixes.last().unwrap();
    assert_eq!(total, frontier.total_measure());

    for _ in 0..200 {
        let target = rng.random_range(1..=total);
        let expected = prefixes.iter().position(|&weight| weight >= target);
        assert_eq!(
            expected,
            frontier.search_by_measure(|weight| *weight >= target)
        );
    }
    assert_eq!(None, frontier.search_by_measure(|weight| *weight > total));
}

#[test]
fn cursor_seeks_by_accumulated_weight() {
    let vertices: Vec<Vertex> = (0..100)
        .map(|id| Vertex { id, out_degree: 3 })
        .collect();
    let frontier: Frontier = vertices.iter().copied().collect();

    let mut cursor = frontier.cursor_front();
    assert!(cursor.seek_to_measure(|weight| *weight > 150));
    // 50 vertices weigh 150, so the 51st is the first past it
    assert_eq!(50, cursor.index());
    assert_eq!(Some(50), cursor.get().map(|vertex| vertex.id));

    assert!(!cursor.seek_to_measure(|weight| *weight > 300));
    assert!(cursor.is_end());
}

#[test]
fn zero_weight_vertices_are_skipped_by_search() {
    let vertices = [
        Vertex { id: 0, out_degree: 0 },
        Vertex { id: 1, out_degree: 0 },
        Vertex { id: 2, out_degree: 5 },
        Vertex { id: 3, out_degree: 0 },
    ];
    let frontier: Frontier = vertices.iter().copied().collect();

    // the first vertex carrying any weight
    assert_eq!(Some(2), frontier.search_by_measure(|weight| *weight >= 1));
}
