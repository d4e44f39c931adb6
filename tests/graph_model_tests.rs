//! Model-equivalence tests: the graph's observable edge set must match a
//! plain set-of-pairs reference model under arbitrary mutation sequences,
//! including the bulk removals.

use bitgraph::{BasicBitVector, BitVector, BitsetGraph, TwoLevelBitVector};
use proptest::prelude::*;
use std::collections::BTreeSet;

type WordFlat = BasicBitVector<u64>;
type TwoLevelBytes = TwoLevelBitVector<BasicBitVector<u8>, 8>;

fn next_rand(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}

#[derive(Debug, Clone)]
enum Operation {
    Add(usize, usize),
    Remove(usize, usize),
}

fn operation_strategy(capacity: usize) -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0..capacity, 0..capacity).prop_map(|(f, t)| Operation::Add(f, t)),
        1 => (0..capacity, 0..capacity).prop_map(|(f, t)| Operation::Remove(f, t)),
    ]
}

proptest! {
    #[test]
    fn graph_matches_pair_set_model(ops in proptest::collection::vec(
        operation_strategy(WordFlat::CAPACITY),
        1..200
    )) {
        let mut g: BitsetGraph<WordFlat> = BitsetGraph::new();
        let mut model: BTreeSet<(usize, usize)> = BTreeSet::new();

        for op in ops {
            match op {
                Operation::Add(from, to) => {
                    prop_assert_eq!(g.add_edge(from, to), model.insert((from, to)));
                    prop_assert!(g.has_edge(from, to));
                }
                Operation::Remove(from, to) => {
                    prop_assert_eq!(g.remove_edge(from, to), model.remove(&(from, to)));
                    prop_assert!(!g.has_edge(from, to));
                }
            }
        }

        prop_assert_eq!(g.edge_count(), model.len());
        prop_assert_eq!(g.is_empty(), model.is_empty());
        for from in 0..g.capacity() {
            for to in 0..g.capacity() {
                prop_assert_eq!(g.has_edge(from, to), model.contains(&(from, to)));
            }
        }
    }
}

/// Builds a random graph plus its reference model.
fn random_graph<BV: BitVector>(
    rng: &mut u64,
    edges: usize,
) -> (BitsetGraph<BV>, BTreeSet<(usize, usize)>) {
    let mut g = BitsetGraph::new();
    let mut model = BTreeSet::new();
    for _ in 0..edges {
        let from = (next_rand(rng) as usize) % BV::CAPACITY;
        let to = (next_rand(rng) as usize) % BV::CAPACITY;
        assert_eq!(g.add_edge(from, to), model.insert((from, to)));
    }
    (g, model)
}

fn check_same_edges<BV: BitVector>(g: &BitsetGraph<BV>, model: &BTreeSet<(usize, usize)>) {
    assert_eq!(g.edge_count(), model.len());
    for from in 0..g.capacity() {
        let row: Vec<_> = g.out_neighbors(from).collect();
        let expected: Vec<_> = model
            .range((from, 0)..=(from, BV::CAPACITY - 1))
            .map(|&(_, to)| to)
            .collect();
        assert_eq!(row, expected, "row {from} diverged from model");
    }
}

/// Alternating bulk-removal stress: random graph, random victim set, then
/// `remove_edges_from` on even rounds and `remove_edges_to` on odd rounds,
/// diffing the whole edge set against the model each time.
fn bulk_removal_stress<BV: BitVector>() {
    let mut rng = 0x5eed_0010_u64;
    for round in 0..60 {
        let (mut g, mut model) = random_graph::<BV>(&mut rng, BV::CAPACITY * 2);

        let mut victims = BV::new();
        let mut victim_set = BTreeSet::new();
        for _ in 0..5 {
            let v = (next_rand(&mut rng) as usize) % BV::CAPACITY;
            victims.insert(v);
            victim_set.insert(v);
        }

        if round % 2 == 0 {
            g.remove_edges_from(&victims);
            model.retain(|&(from, _)| !victim_set.contains(&from));
        } else {
            g.remove_edges_to(&victims);
            model.retain(|&(_, to)| !victim_set.contains(&to));
        }

        check_same_edges(&g, &model);
    }
}

#[test]
fn bulk_removal_matches_model_word_flat() {
    bulk_removal_stress::<WordFlat>();
}

#[test]
fn bulk_removal_matches_model_two_level() {
    bulk_removal_stress::<TwoLevelBytes>();
}

#[test]
fn remove_edges_from_scope_is_exact() {
    let mut rng = 0x5eed_0011_u64;
    let (mut g, model) = random_graph::<WordFlat>(&mut rng, 128);

    let mut victims = WordFlat::new();
    for v in [3, 17, 40, 41, 63] {
        victims.insert(v);
    }

    g.remove_edges_from(&victims);

    for &(from, to) in &model {
        if victims.contains(from) {
            assert!(!g.has_edge(from, to), "edge {from}->{to} should be gone");
        } else {
            assert!(g.has_edge(from, to), "edge {from}->{to} should survive");
        }
    }
}

#[test]
fn remove_edges_to_scope_is_exact() {
    let mut rng = 0x5eed_0012_u64;
    let (mut g, model) = random_graph::<WordFlat>(&mut rng, 128);

    let mut victims = WordFlat::new();
    for v in [0, 9, 30, 62] {
        victims.insert(v);
    }

    g.remove_edges_to(&victims);

    for &(from, to) in &model {
        if victims.contains(to) {
            assert!(!g.has_edge(from, to), "edge {from}->{to} should be gone");
        } else {
            assert!(g.has_edge(from, to), "edge {from}->{to} should survive");
        }
    }
}
