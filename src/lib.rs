//! # `bitgraph` - Fixed-Capacity Bit-Vector Graphs
//!
//! Allocation-free directed graphs over a bounded vertex universe, backed by
//! one bit vector per vertex, for high-frequency reachability and
//! shortest-path queries.
//!
//! The crate exists for one workload: incremental cycle detection. A consumer
//! (typically a lock-order or dependency tracker) assigns integer ids from a
//! fixed space, records ordering events as edges, and asks "would this new
//! edge close a cycle?" before inserting it. Those queries run inside code
//! that must not allocate and must not perturb the program it observes, so
//! everything here is sized at construction and branch-light after that.
//!
//! ## Design
//!
//! 1. **Bit-vector capability** ([`BitVector`]): a fixed-capacity set of
//!    small integers with O(1)-class membership and word-at-a-time bulk
//!    operations. Two representations:
//!    - [`BasicBitVector`]: capacity equals the bit width of one machine
//!      word; every operation is a single shift/mask/popcount.
//!    - [`TwoLevelBitVector`]: a power-of-two number of inner bit vectors
//!      plus an occupancy word tracking which chunks are non-empty, so bulk
//!      operations on sparse sets skip empty chunks entirely.
//! 2. **Graph engine** ([`BitsetGraph`]): one bit vector per vertex holding
//!    its out-neighbors, with edge mutation, bulk vertex-keyed removal, and
//!    bounded breadth-first reachability / shortest-path extraction.
//!
//! ## Guarantees
//!
//! - **Fixed capacity**: the vertex universe is `BV::CAPACITY`, a type-level
//!   constant. There is no growth path.
//! - **No allocation after construction**: construction performs the only
//!   heap allocations; every operation afterwards runs on inline storage.
//! - **Bounded queries**: reachability expands at most `CAPACITY` frontier
//!   rounds; every operation terminates without suspension or I/O.
//! - **Fail-fast preconditions**: an out-of-range vertex index is a caller
//!   bug and panics immediately; no operation returns a recoverable error.
//!
//! The structure performs no internal synchronization. Callers that share it
//! across threads must provide external mutual exclusion.
//!
//! ## Example
//!
//! ```rust
//! use bitgraph::{BasicBitVector, BitVector, BitsetGraph};
//!
//! // An 8-vertex graph: each row is one byte of adjacency bits.
//! let mut g: BitsetGraph<BasicBitVector<u8>> = BitsetGraph::new();
//! g.add_edge(1, 2);
//! g.add_edge(2, 4);
//!
//! let mut targets = BasicBitVector::<u8>::new();
//! targets.insert(0);
//! targets.insert(7);
//! assert!(!g.is_reachable(1, &targets));
//!
//! g.add_edge(2, 0);
//! assert!(g.is_reachable(1, &targets));
//!
//! let mut path = [0usize; 8];
//! assert_eq!(g.find_path(1, &targets, &mut path, 8), 3);
//! assert_eq!(&path[..3], &[1, 2, 0]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod bitvec;
pub mod graph;

pub use bitvec::{BasicBitVector, BitVector, BitWord, TwoLevelBitVector};
pub use graph::BitsetGraph;
