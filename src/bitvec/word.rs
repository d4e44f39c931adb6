//! Backing-word abstraction for flat bit vectors.

use num_traits::{PrimInt, Unsigned};

/// An unsigned primitive integer usable as bit-vector backing storage.
///
/// Everything a flat bit vector does is expressed through [`PrimInt`]
/// (shifts, masks, popcount, trailing zeros); this trait only pins down the
/// bit width as a type-level constant so capacity can be named in const
/// position.
pub trait BitWord: PrimInt + Unsigned {
    /// Bit width of the word, and thus the capacity of a flat bit vector
    /// backed by it.
    const BITS: usize;
}

impl BitWord for u8 {
    const BITS: usize = u8::BITS as usize;
}

impl BitWord for u16 {
    const BITS: usize = u16::BITS as usize;
}

impl BitWord for u32 {
    const BITS: usize = u32::BITS as usize;
}

impl BitWord for u64 {
    const BITS: usize = u64::BITS as usize;
}

impl BitWord for usize {
    const BITS: usize = usize::BITS as usize;
}
