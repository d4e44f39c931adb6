//! Chunked bit vectors with occupancy tracking.

use super::basic::BasicBitVector;
use super::BitVector;

/// A two-level bit vector: `CHUNKS` inner bit vectors plus one occupancy
/// word recording which chunks are non-empty.
///
/// Capacity is `CHUNKS * BV::CAPACITY`. The occupancy level is what pays for
/// the composition: bulk operations (`union_with`, `intersects`,
/// `difference_with`, `len`, `iter`) visit only chunks whose occupancy bit
/// is set in the relevant operand, so their cost scales with the number of
/// non-empty chunks rather than with total capacity. That is the entire
/// point of this representation — it lets the vertex universe grow well past
/// one machine word while keeping sparse-set operations cheap.
///
/// `CHUNKS` must be a power of two no greater than 64 (the occupancy word
/// is a single `u64`); both constraints are checked at compile time. Larger
/// capacities come from wider inner chunks or from nesting one
/// `TwoLevelBitVector` inside another — the inner type is anything
/// implementing [`BitVector`].
///
/// Invariant: occupancy bit `c` is set **iff** chunk `c` is non-empty. Every
/// mutating path funnels through one internal helper that re-derives the
/// occupancy bit from the chunk it just touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwoLevelBitVector<BV: BitVector, const CHUNKS: usize> {
    occupancy: BasicBitVector<u64>,
    chunks: [BV; CHUNKS],
}

impl<BV: BitVector, const CHUNKS: usize> TwoLevelBitVector<BV, CHUNKS> {
    const CHUNKS_VALID: () = assert!(
        CHUNKS.is_power_of_two() && CHUNKS <= 64,
        "CHUNKS must be a power of two no greater than 64"
    );

    /// Re-derives the occupancy bit for `chunk` from the chunk's contents.
    ///
    /// Called after every chunk mutation; the occupancy invariant holds
    /// exactly because no mutating path skips this.
    #[inline(always)]
    fn sync_occupancy(&mut self, chunk: usize) {
        if self.chunks[chunk].is_empty() {
            self.occupancy.remove(chunk);
        } else {
            self.occupancy.insert(chunk);
        }
    }

    #[inline(always)]
    fn split(bit: usize) -> (usize, usize) {
        (bit / BV::CAPACITY, bit % BV::CAPACITY)
    }

    /// Checks the occupancy invariant: bit `c` is set iff chunk `c` is
    /// non-empty. Test/debug aid.
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        (0..CHUNKS).all(|c| self.occupancy.contains(c) == !self.chunks[c].is_empty())
    }
}

impl<BV: BitVector, const CHUNKS: usize> BitVector for TwoLevelBitVector<BV, CHUNKS> {
    const CAPACITY: usize = CHUNKS * BV::CAPACITY;

    fn new() -> Self {
        let () = Self::CHUNKS_VALID;
        Self {
            occupancy: BasicBitVector::new(),
            chunks: core::array::from_fn(|_| BV::new()),
        }
    }

    fn clear(&mut self) {
        for c in self.occupancy.iter() {
            self.chunks[c].clear();
        }
        self.occupancy.clear();
    }

    #[inline]
    fn insert(&mut self, bit: usize) -> bool {
        assert!(bit < Self::CAPACITY, "bit {bit} out of bounds");
        let (c, r) = Self::split(bit);
        let newly = self.chunks[c].insert(r);
        if newly {
            self.sync_occupancy(c);
        }
        newly
    }

    #[inline]
    fn remove(&mut self, bit: usize) -> bool {
        assert!(bit < Self::CAPACITY, "bit {bit} out of bounds");
        let (c, r) = Self::split(bit);
        if !self.occupancy.contains(c) {
            return false;
        }
        let present = self.chunks[c].remove(r);
        if present {
            self.sync_occupancy(c);
        }
        present
    }

    #[inline]
    fn contains(&self, bit: usize) -> bool {
        assert!(bit < Self::CAPACITY, "bit {bit} out of bounds");
        let (c, r) = Self::split(bit);
        self.occupancy.contains(c) && self.chunks[c].contains(r)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    fn len(&self) -> usize {
        self.occupancy.iter().map(|c| self.chunks[c].len()).sum()
    }

    fn union_with(&mut self, other: &Self) {
        for c in other.occupancy.iter() {
            self.chunks[c].union_with(&other.chunks[c]);
            self.sync_occupancy(c);
        }
    }

    fn intersects(&self, other: &Self) -> bool {
        if !self.occupancy.intersects(&other.occupancy) {
            return false;
        }
        self.occupancy
            .iter()
            .any(|c| other.occupancy.contains(c) && self.chunks[c].intersects(&other.chunks[c]))
    }

    fn difference_with(&mut self, other: &Self) {
        for c in other.occupancy.iter() {
            if self.occupancy.contains(c) {
                self.chunks[c].difference_with(&other.chunks[c]);
                self.sync_occupancy(c);
            }
        }
    }

    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.occupancy
            .iter()
            .flat_map(move |c| self.chunks[c].iter().map(move |r| c * BV::CAPACITY + r))
    }
}

impl<BV: BitVector, const CHUNKS: usize> Default for TwoLevelBitVector<BV, CHUNKS> {
    fn default() -> Self {
        <Self as BitVector>::new()
    }
}
