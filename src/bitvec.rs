//! Dynamically Resizable BitVector
//!
//! **Packed Storage**: bits live in 64-bit words, capacity always a whole
//! number of words and always tight (`capacity == 64 * ceil(len / 64)` after
//! every operation — no headroom is retained between operations).
//!
//! **Tail-Zero Invariant**: every bit in `[len, capacity)` is zero after
//! every operation. Rank, select, equality and reversal all lean on this;
//! shrink and complement are the operations that have to re-establish it.
//!
//! Ownership is exclusive: the word buffer is owned, moves with the value,
//! and `Clone` is the only way to obtain an independent copy.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Error;
use crate::word::{self, ALL_ONES, LOG_WORD_BITS, WORD_BITS};

/// A resizable bit array packed into 64-bit words.
///
/// Single-bit accessors are bounds-checked against the logical length and
/// report [`Error::IndexOutOfRange`] past it; growth reports
/// [`Error::AllocationFailure`] instead of aborting.
///
/// # Example
///
/// ```
/// use alice_bitvec::BitVector;
///
/// let mut bv = BitVector::new(20)?;
/// bv.set(4)?;
/// bv.set(18)?;
/// assert!(bv.get(18)?);
/// assert_eq!(bv.count_ones(), 2);
/// # Ok::<(), alice_bitvec::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitVector {
    /// Packed bit storage, exactly `ceil(len / 64)` words.
    pub(crate) words: Vec<u64>,
    /// Number of logically significant bits.
    pub(crate) len: usize,
}

impl BitVector {
    /// Create a vector of `len` zero bits. `len == 0` yields an empty buffer.
    pub fn new(len: usize) -> Result<Self, Error> {
        let n = Self::words_for(len);
        let mut words = Vec::new();
        words
            .try_reserve_exact(n)
            .map_err(|_| Error::AllocationFailure { words: n })?;
        words.resize(n, 0);
        Ok(Self { words, len })
    }

    /// Words needed to back `len` bits.
    #[inline(always)]
    pub(crate) const fn words_for(len: usize) -> usize {
        (len + WORD_BITS - 1) >> LOG_WORD_BITS
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated bits. Always a multiple of 64 and `>= len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() << LOG_WORD_BITS
    }

    /// Number of backing words.
    #[inline]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Read-only view of the packed words, low bit of word 0 first. This is
    /// the surface external renderers work from; they never mutate.
    #[inline]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Iterate the logical bits in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| {
            word::test(self.words[i >> LOG_WORD_BITS], i & (WORD_BITS - 1))
        })
    }

    /// Reference identity: `a` and `b` are the very same instance, not
    /// merely equal in value.
    #[inline]
    pub fn ptr_eq(a: &BitVector, b: &BitVector) -> bool {
        core::ptr::eq(a, b)
    }

    #[inline]
    pub(crate) fn check_index(&self, pos: usize) -> Result<(), Error> {
        if pos >= self.len {
            return Err(Error::IndexOutOfRange { pos, len: self.len });
        }
        Ok(())
    }

    /// Re-zero the unused tail of the last word. Needed after any operation
    /// that writes whole words (shrink, complement).
    #[inline]
    pub(crate) fn mask_tail(&mut self) {
        let rem = self.len & (WORD_BITS - 1);
        if rem > 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= word::low_mask(rem);
            }
        }
    }

    /// Test the bit at `pos`.
    #[inline]
    pub fn get(&self, pos: usize) -> Result<bool, Error> {
        self.check_index(pos)?;
        Ok(word::test(self.words[pos >> LOG_WORD_BITS], pos & (WORD_BITS - 1)))
    }

    /// Set the bit at `pos` to 1.
    #[inline]
    pub fn set(&mut self, pos: usize) -> Result<(), Error> {
        self.check_index(pos)?;
        let w = &mut self.words[pos >> LOG_WORD_BITS];
        *w = word::set(*w, pos & (WORD_BITS - 1));
        Ok(())
    }

    /// Set the bit at `pos` to 0.
    #[inline]
    pub fn clear(&mut self, pos: usize) -> Result<(), Error> {
        self.check_index(pos)?;
        let w = &mut self.words[pos >> LOG_WORD_BITS];
        *w = word::clear(*w, pos & (WORD_BITS - 1));
        Ok(())
    }

    /// Flip the bit at `pos`.
    #[inline]
    pub fn toggle(&mut self, pos: usize) -> Result<(), Error> {
        self.check_index(pos)?;
        let w = &mut self.words[pos >> LOG_WORD_BITS];
        *w = word::toggle(*w, pos & (WORD_BITS - 1));
        Ok(())
    }

    /// Set every bit in the inclusive range `[from, to]` to `bit`, by whole
    /// word masks rather than a bit loop. An inverted range is a no-op.
    pub fn set_range(&mut self, bit: bool, from: usize, to: usize) -> Result<(), Error> {
        if from > to {
            return Ok(());
        }
        self.check_index(to)?;
        let first = from >> LOG_WORD_BITS;
        let last = to >> LOG_WORD_BITS;
        for w in first..=last {
            let mut mask = ALL_ONES;
            if w == first {
                mask &= ALL_ONES << (from & (WORD_BITS - 1));
            }
            if w == last {
                mask &= ALL_ONES >> (WORD_BITS - 1 - (to & (WORD_BITS - 1)));
            }
            if bit {
                self.words[w] |= mask;
            } else {
                self.words[w] &= !mask;
            }
        }
        Ok(())
    }

    /// Resize to `new_len` bits in place.
    ///
    /// Shrinking masks the new last word to its surviving low bits (the
    /// tail-zero invariant) and drops words past the new capacity. Growing
    /// appends zeroed words; the old tail was already zero, so bits in
    /// `[old_len, new_len)` read as 0 with no extra work.
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len == self.len {
            return Ok(());
        }
        let n = Self::words_for(new_len);

        if new_len < self.len {
            self.len = new_len;
            self.words.truncate(n);
            self.mask_tail();
            self.words.shrink_to_fit();
        } else {
            let add = n - self.words.len();
            self.words
                .try_reserve_exact(add)
                .map_err(|_| Error::AllocationFailure { words: n })?;
            self.words.resize(n, 0);
            self.len = new_len;
        }
        Ok(())
    }
}
