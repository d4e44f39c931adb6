//! A fixed-capacity directed graph stored as one bit vector per vertex.
//!
//! Built for incremental cycle detection: the consumer checks
//! `is_reachable(to, {from})` before inserting `from -> to`; a hit means the
//! new edge would close a cycle, and `find_path` recovers a minimal witness
//! for reporting. Edge mutation and the bulk removals exist so the consumer
//! can mirror entity lifetime (e.g. a lock being destroyed) onto the graph.

use crate::bitvec::BitVector;

#[cfg(feature = "tracing")]
use tracing::trace;

/// A directed graph over the fixed vertex universe `0..BV::CAPACITY`.
///
/// Row `v` is the out-neighbor set of vertex `v`, stored as a bit vector, so
/// edge presence is one bit and frontier expansion during traversal is
/// word-at-a-time set union. Vertex identity is owned entirely by the
/// caller; the graph attaches no meaning (and no metadata) to indices.
///
/// Construction performs the only heap allocations (the row array and one
/// predecessor scratch buffer). No operation allocates afterwards, and no
/// operation suspends or blocks: every query is bounded by the capacity.
///
/// Not internally synchronized; callers sharing a graph across threads must
/// serialize access themselves.
///
/// ### Performance Characteristics
/// | Operation | Cost | Notes |
/// |-----------|------|-------|
/// | `add_edge` / `remove_edge` / `has_edge` | O(1)-class | one bit-vector update |
/// | `remove_edges_from` | ∝ member count of `sources` | enumerates `sources` only |
/// | `remove_edges_to` | O(capacity) | must visit every row |
/// | `is_reachable` / `find_path` | ≤ capacity BFS rounds | word-parallel frontier expansion |
pub struct BitsetGraph<BV: BitVector> {
    rows: Box<[BV]>,
    /// Discovering vertex for each vertex reached during `find_path`.
    pred: Box<[usize]>,
}

impl<BV: BitVector> BitsetGraph<BV> {
    /// Creates a graph with no edges.
    pub fn new() -> Self {
        let rows: Box<[BV]> = (0..BV::CAPACITY).map(|_| BV::new()).collect();
        let pred = vec![0usize; BV::CAPACITY].into_boxed_slice();
        Self { rows, pred }
    }

    /// Creates a graph from an edge list.
    ///
    /// # Panics
    /// Panics if any endpoint is out of bounds.
    pub fn from_edges<I: IntoIterator<Item = (usize, usize)>>(edges: I) -> Self {
        let mut g = Self::new();
        for (from, to) in edges {
            g.add_edge(from, to);
        }
        g
    }

    /// Number of vertices in the universe. Fixed for the life of the graph.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        BV::CAPACITY
    }

    /// Removes every edge.
    pub fn clear(&mut self) {
        for row in &mut *self.rows {
            row.clear();
        }
        #[cfg(feature = "tracing")]
        trace!(capacity = BV::CAPACITY, "cleared all edges");
    }

    /// Returns `true` iff the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(BitVector::is_empty)
    }

    /// Number of edges. O(capacity) popcounts; intended for tests and
    /// diagnostics, not the hot path.
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(BitVector::len).sum()
    }

    /// Inserts the edge `from -> to`, returning `true` iff it was newly
    /// created. Repeated insertion is idempotent.
    ///
    /// # Panics
    /// Panics if either endpoint is out of bounds.
    #[inline]
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        assert!(from < BV::CAPACITY, "vertex {from} out of bounds");
        self.rows[from].insert(to)
    }

    /// Removes the edge `from -> to`, returning `true` iff it was present.
    ///
    /// # Panics
    /// Panics if either endpoint is out of bounds.
    #[inline]
    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        assert!(from < BV::CAPACITY, "vertex {from} out of bounds");
        self.rows[from].remove(to)
    }

    /// Returns `true` iff the edge `from -> to` is present.
    ///
    /// # Panics
    /// Panics if either endpoint is out of bounds.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        assert!(from < BV::CAPACITY, "vertex {from} out of bounds");
        self.rows[from].contains(to)
    }

    /// Iterates over the out-neighbors of `v` in ascending order.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn out_neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(v < BV::CAPACITY, "vertex {v} out of bounds");
        self.rows[v].iter()
    }

    /// Drops all outgoing edges of every vertex in `sources`.
    ///
    /// Cost is proportional to the member count of `sources`, independent of
    /// capacity: only the named rows are touched.
    pub fn remove_edges_from(&mut self, sources: &BV) {
        for v in sources.iter() {
            self.rows[v].clear();
        }
        #[cfg(feature = "tracing")]
        trace!(sources = sources.len(), "dropped outgoing edges");
    }

    /// Removes every edge whose destination is in `targets`, regardless of
    /// source.
    ///
    /// An incoming edge can originate anywhere, so this visits every row;
    /// the O(capacity) cost is structural, even when `targets` is small.
    pub fn remove_edges_to(&mut self, targets: &BV) {
        for row in &mut *self.rows {
            row.difference_with(targets);
        }
        #[cfg(feature = "tracing")]
        trace!(targets = targets.len(), "dropped incoming edges");
    }

    /// Returns `true` iff a directed path of **one or more edges** leads
    /// from `from` to some member of `targets`.
    ///
    /// `from` being a member of `targets` does not by itself make the answer
    /// `true`: the search is seeded from `from`'s successors, so zero-length
    /// paths are never reported. A self-loop on `from` does count.
    ///
    /// Bounded breadth-first search over bit-vector frontiers; the visited
    /// set grows monotonically, so the loop runs at most `capacity` rounds.
    ///
    /// # Panics
    /// Panics if `from` is out of bounds.
    pub fn is_reachable(&self, from: usize, targets: &BV) -> bool {
        assert!(from < BV::CAPACITY, "vertex {from} out of bounds");
        let mut frontier = self.rows[from].clone();
        let mut visited = frontier.clone();
        loop {
            if frontier.intersects(targets) {
                return true;
            }
            if frontier.is_empty() {
                return false;
            }
            let mut next = BV::new();
            for v in frontier.iter() {
                next.union_with(&self.rows[v]);
            }
            next.difference_with(&visited);
            visited.union_with(&next);
            frontier = next;
        }
    }

    /// Finds a minimal path of one or more edges from `from` to some member
    /// of `targets`.
    ///
    /// On success, writes the path into `path` — `path[0] == from`,
    /// `path[k - 1]` is the discovered target member — and returns its
    /// vertex count `k`. Returns `0` when no such path exists, or when the
    /// shortest path's vertex count exceeds `min(max_len, path.len())`
    /// (nothing is written in that case; longer paths are never substituted).
    ///
    /// The returned length is the minimum vertex count over all qualifying
    /// paths. When several minimal paths exist, which one is returned is
    /// unspecified. Zero-length paths are never reported, matching
    /// [`is_reachable`](Self::is_reachable); a self-loop on a target `from`
    /// yields the two-vertex path `[from, from]`.
    ///
    /// Takes `&mut self` to reuse the internal predecessor scratch buffer;
    /// the edge set is not modified.
    ///
    /// # Panics
    /// Panics if `from` is out of bounds.
    pub fn find_path(
        &mut self,
        from: usize,
        targets: &BV,
        path: &mut [usize],
        max_len: usize,
    ) -> usize {
        assert!(from < BV::CAPACITY, "vertex {from} out of bounds");
        let bound = max_len.min(path.len());
        if bound < 2 {
            // Every reportable path has at least two vertices.
            return 0;
        }

        let mut frontier = self.rows[from].clone();
        let mut visited = frontier.clone();
        for v in frontier.iter() {
            self.pred[v] = from;
        }

        // Vertex count of any path ending in the current frontier.
        let mut verts = 2;
        loop {
            if let Some(hit) = frontier.iter().find(|&v| targets.contains(v)) {
                #[cfg(feature = "tracing")]
                trace!(from, hit, verts, "path found");
                path[verts - 1] = hit;
                let mut cur = hit;
                for slot in path[..verts - 1].iter_mut().rev() {
                    cur = self.pred[cur];
                    *slot = cur;
                }
                debug_assert_eq!(path[0], from);
                return verts;
            }
            if frontier.is_empty() || verts == bound {
                // No path, or any remaining path is longer than the bound.
                return 0;
            }

            let mut next = BV::new();
            for v in frontier.iter() {
                let mut fresh = self.rows[v].clone();
                fresh.difference_with(&visited);
                fresh.difference_with(&next);
                for w in fresh.iter() {
                    self.pred[w] = v;
                }
                next.union_with(&fresh);
            }
            visited.union_with(&next);
            frontier = next;
            verts += 1;
        }
    }

    /// Checks structural invariants: the row array and predecessor scratch
    /// match the type-level capacity. Test/debug aid.
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        self.rows.len() == BV::CAPACITY && self.pred.len() == BV::CAPACITY
    }
}

impl<BV: BitVector> Default for BitsetGraph<BV> {
    fn default() -> Self {
        Self::new()
    }
}
