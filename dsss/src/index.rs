//! The packed index type `I` used for every global position, rank, and count
//! in the rest of the crate (§3, §9 "Packed index type").
//!
//! 40 bits are enough to index 2^40 text positions (the Non-goal in §1 caps
//! us there). We keep the value in a `u64` rather than a genuine 5-byte
//! struct so that arithmetic never touches an unaligned load; the type's
//! job is to *document and enforce* the 40-bit ceiling, not to save memory
//! in this in-memory representation (the on-disk format in §6 is the place
//! that actually packs to 5 bytes).

use std::fmt;
use std::ops::{Add, Sub};

/// Bit width of [Index]. The reference build uses 40 bits; see §1 Non-goals.
pub const INDEX_BITS: u32 = 40;
/// One past the largest value [Index] can hold.
pub const INDEX_LIMIT: u64 = 1u64 << INDEX_BITS;

/// A 40-bit unsigned index, wide enough to name any position in a text of up
/// to `2^40` bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(u64);

impl Index {
    pub const ZERO: Index = Index(0);
    pub const MAX: Index = Index(INDEX_LIMIT - 1);

    /// Construct an [Index], panicking if `value` does not fit in 40 bits.
    /// This mirrors the reference build's refusal to silently truncate.
    pub fn new(value: u64) -> Self {
        assert!(value < INDEX_LIMIT, "index {value} exceeds 2^{INDEX_BITS}");
        Index(value)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// `self / rhs`, widened through u64 so it never overflows 40 bits.
    pub fn div_u64(self, rhs: u64) -> u64 {
        self.0 / rhs
    }

    /// `self % rhs`.
    pub fn rem_u64(self, rhs: u64) -> u64 {
        self.0 % rhs
    }

    /// Little-endian 5-byte on-disk encoding, per §6's SA output format.
    pub fn to_le_bytes5(self) -> [u8; 5] {
        let b = self.0.to_le_bytes();
        [b[0], b[1], b[2], b[3], b[4]]
    }

    pub fn from_le_bytes5(bytes: [u8; 5]) -> Self {
        let mut b = [0u8; 8];
        b[..5].copy_from_slice(&bytes);
        Index(u64::from_le_bytes(b))
    }
}

impl From<usize> for Index {
    fn from(value: usize) -> Self {
        Index::new(value as u64)
    }
}

impl From<Index> for usize {
    fn from(value: Index) -> Self {
        value.as_usize()
    }
}

impl TryFrom<u64> for Index {
    type Error = &'static str;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value < INDEX_LIMIT {
            Ok(Index(value))
        } else {
            Err("value exceeds 2^40")
        }
    }
}

impl Add<u64> for Index {
    type Output = Index;

    fn add(self, rhs: u64) -> Index {
        Index::new(self.0 + rhs)
    }
}

impl Sub<u64> for Index {
    type Output = Index;

    fn sub(self, rhs: u64) -> Index {
        Index::new(self.0 - rhs)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.0)
    }
}

/// Builds a `byte -> packed_code` table over the alphabet actually present in
/// a text, per §4.6's "dynamic alphabet folding". `histogram[b]` is the
/// global count of byte value `b`; bytes with a zero count are not part of
/// the alphabet (and in particular the reserved terminator, byte 0, never
/// gets a code).
pub fn fold_alphabet(histogram: &[u64; 256]) -> ([u8; 256], usize) {
    let mut table = [0u8; 256];
    let mut sigma = 0usize;
    for (b, &count) in histogram.iter().enumerate() {
        if b != 0 && count > 0 {
            sigma += 1;
            table[b] = sigma as u8;
        }
    }
    (table, sigma)
}

/// The number of reduced characters that fit packed into one 40-bit [Index],
/// per §4.6: `k = floor(bits(I) / ceil(log2(sigma + 1)))`.
pub fn pack_width(sigma: usize) -> usize {
    let bits_per_symbol = (usize::BITS - (sigma as u32).leading_zeros()).max(1) as usize;
    (INDEX_BITS as usize / bits_per_symbol).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_bytes() {
        let i = Index::new(1_099_511_627_775); // 2^40 - 1
        assert_eq!(Index::from_le_bytes5(i.to_le_bytes5()), i);
        assert_eq!(i, Index::MAX);
    }

    #[test]
    #[should_panic]
    fn overflow_panics() {
        Index::new(INDEX_LIMIT);
    }

    #[test]
    fn fold_alphabet_skips_absent_and_zero() {
        let mut hist = [0u64; 256];
        hist[b'a' as usize] = 3;
        hist[b'c' as usize] = 1;
        hist[0] = 7; // terminator, must not get a code
        let (table, sigma) = fold_alphabet(&hist);
        assert_eq!(sigma, 2);
        assert_eq!(table[0], 0);
        assert_eq!(table[b'a' as usize], 1);
        assert_eq!(table[b'c' as usize], 2);
        assert_eq!(table[b'b' as usize], 0);
    }

    #[test]
    fn pack_width_shrinks_with_larger_alphabet() {
        assert!(pack_width(2) >= pack_width(250));
        assert!(pack_width(250) >= 4);
    }
}
