//! Flat single-word bit vectors.

use super::word::BitWord;
use super::BitVector;

/// A flat bit vector whose capacity is the bit width of one machine word.
///
/// Every operation is a single shift/mask/popcount on the backing word, so
/// all of them are O(1) with no branches beyond the bounds assert.
///
/// ### Performance Characteristics
/// | Operation | Cost | Notes |
/// |-----------|------|-------|
/// | `insert` / `remove` / `contains` | 1 shift + mask | |
/// | `union_with` / `difference_with` / `intersects` | 1 word op | |
/// | `len` | 1 popcount | |
/// | `iter` | 1 trailing-zeros per member | skips absent members entirely |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasicBitVector<W: BitWord = usize> {
    bits: W,
}

impl<W: BitWord> BitVector for BasicBitVector<W> {
    const CAPACITY: usize = W::BITS;

    #[inline(always)]
    fn new() -> Self {
        Self { bits: W::zero() }
    }

    #[inline(always)]
    fn clear(&mut self) {
        self.bits = W::zero();
    }

    #[inline(always)]
    fn insert(&mut self, bit: usize) -> bool {
        assert!(bit < Self::CAPACITY, "bit {bit} out of bounds");
        let mask = W::one() << bit;
        let newly = self.bits & mask == W::zero();
        self.bits = self.bits | mask;
        newly
    }

    #[inline(always)]
    fn remove(&mut self, bit: usize) -> bool {
        assert!(bit < Self::CAPACITY, "bit {bit} out of bounds");
        let mask = W::one() << bit;
        let present = self.bits & mask != W::zero();
        self.bits = self.bits & !mask;
        present
    }

    #[inline(always)]
    fn contains(&self, bit: usize) -> bool {
        assert!(bit < Self::CAPACITY, "bit {bit} out of bounds");
        self.bits & (W::one() << bit) != W::zero()
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.bits == W::zero()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline(always)]
    fn union_with(&mut self, other: &Self) {
        self.bits = self.bits | other.bits;
    }

    #[inline(always)]
    fn intersects(&self, other: &Self) -> bool {
        self.bits & other.bits != W::zero()
    }

    #[inline(always)]
    fn difference_with(&mut self, other: &Self) {
        self.bits = self.bits & !other.bits;
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        Iter { word: self.bits }
    }
}

impl<W: BitWord> Default for BasicBitVector<W> {
    fn default() -> Self {
        <Self as BitVector>::new()
    }
}

/// Member iterator: repeatedly extracts the lowest set bit.
struct Iter<W: BitWord> {
    word: W,
}

impl<W: BitWord> Iterator for Iter<W> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == W::zero() {
            return None;
        }
        let bit = self.word.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.word = self.word & (self.word - W::one());
        Some(bit)
    }
}
