//! Rank / Select Engine
//!
//! **Uncached Baseline**: a single linear scan over the packed words —
//! O(len / 64) words touched, zero auxiliary space. A succinct-index layer
//! (block-level rank caches, sampled select) would sit on top of this; it is
//! deliberately not part of this crate.
//!
//! Both queries lean on the tail-zero invariant: padding bits past `len`
//! are zero, so whole-word popcounts never overcount and select can never
//! report a position past the end.

use crate::bitvec::BitVector;
use crate::word::{self, LOG_WORD_BITS, WORD_BITS};

impl BitVector {
    /// Population count over the inclusive range `[0, pos]`.
    ///
    /// `pos == len()` is permitted and means "whole vector" — unlike the
    /// single-bit accessors, which require `pos < len()`. Returns 0 for an
    /// empty vector or `pos > len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use alice_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::new(20)?;
    /// bv.set_range(true, 4, 12)?;
    /// bv.set(18)?;
    /// assert_eq!(bv.rank(19), 10);
    /// assert_eq!(bv.rank(4), 1);
    /// # Ok::<(), alice_bitvec::Error>(())
    /// ```
    pub fn rank(&self, pos: usize) -> usize {
        if self.len == 0 || pos > self.len {
            return 0;
        }
        // exclusive bound; pos == len and pos == len - 1 both mean the lot
        let bound = (pos + 1).min(self.len);
        let full = bound >> LOG_WORD_BITS;
        let rem = bound & (WORD_BITS - 1);

        let mut card = 0;
        for &w in &self.words[..full] {
            card += word::popcount(w);
        }
        if rem > 0 {
            card += word::popcount(self.words[full] & word::low_mask(rem));
        }
        card
    }

    /// Total number of set bits.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.rank(self.len)
    }

    /// Position of the k-th set bit, where `k` is a **0-based rank**:
    /// `select(0)` is the first set bit. `None` when fewer than `k + 1` set
    /// bits exist.
    ///
    /// Scans words with a running popcount, then resolves the offset inside
    /// the landing word bit by bit.
    ///
    /// # Example
    ///
    /// ```
    /// use alice_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::new(10)?;
    /// for pos in [2, 5, 9] {
    ///     bv.set(pos)?;
    /// }
    /// assert_eq!(bv.select(0), Some(2));
    /// assert_eq!(bv.select(2), Some(9));
    /// assert_eq!(bv.select(3), None);
    /// # Ok::<(), alice_bitvec::Error>(())
    /// ```
    pub fn select(&self, k: usize) -> Option<usize> {
        let mut remaining = k;
        for (i, &w) in self.words.iter().enumerate() {
            let ones = word::popcount(w);
            if remaining < ones {
                let off = word::kth_set_bit(w, remaining)?;
                return Some((i << LOG_WORD_BITS) + off);
            }
            remaining -= ones;
        }
        None
    }
}
