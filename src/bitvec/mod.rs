//! Fixed-capacity bit-vector sets.
//!
//! Implementations are organized by representation:
//! - `basic`: one machine word, capacity = word bit width
//! - `two_level`: chunked composition with occupancy tracking, for
//!   capacities beyond one word
//!
//! Both implement the [`BitVector`] capability trait, which is the contract
//! the graph engine is generic over.

pub mod basic;
pub mod two_level;
pub(crate) mod word;

pub use basic::BasicBitVector;
pub use two_level::TwoLevelBitVector;
pub use word::BitWord;

/// A fixed-capacity, allocation-free set of small integers.
///
/// Capacity is a type-level constant; every member index is `< CAPACITY`.
/// Implementations store members compactly (one bit each) and support
/// word-at-a-time bulk operations, which is what makes the graph engine's
/// frontier expansion cheap.
///
/// All mutating operations report whether they changed the set, so callers
/// performing incremental bookkeeping never need a separate membership probe.
pub trait BitVector: Clone {
    /// Number of distinct members this set can hold; member indices are
    /// `0..CAPACITY`.
    const CAPACITY: usize;

    /// Creates an empty set.
    fn new() -> Self;

    /// Empties the set.
    fn clear(&mut self);

    /// Inserts `bit`, returning `true` iff it was not already present.
    ///
    /// # Panics
    /// Panics if `bit >= CAPACITY`.
    fn insert(&mut self, bit: usize) -> bool;

    /// Removes `bit`, returning `true` iff it was present.
    ///
    /// # Panics
    /// Panics if `bit >= CAPACITY`.
    fn remove(&mut self, bit: usize) -> bool;

    /// Returns `true` iff `bit` is a member.
    ///
    /// # Panics
    /// Panics if `bit >= CAPACITY`.
    fn contains(&self, bit: usize) -> bool;

    /// Returns `true` iff the set has no members.
    fn is_empty(&self) -> bool;

    /// Number of members (population count).
    fn len(&self) -> usize;

    /// Adds every member of `other`: `self |= other`.
    fn union_with(&mut self, other: &Self);

    /// Returns `true` iff the sets share at least one member.
    fn intersects(&self, other: &Self) -> bool;

    /// Removes every member of `other`: `self &= !other`.
    fn difference_with(&mut self, other: &Self);

    /// Iterates over members in ascending order.
    fn iter(&self) -> impl Iterator<Item = usize> + '_;
}
