//! Directed graphs over a fixed vertex universe, one bit vector per vertex.

pub mod bitset_graph;

pub use bitset_graph::BitsetGraph;
