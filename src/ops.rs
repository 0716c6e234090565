//! Bitwise Algebra
//!
//! **Non-Mutating Binary Ops**: when operand lengths differ, the shorter one
//! is zero-padded *into the result buffer* — neither input is ever resized
//! or otherwise touched. Results are fresh vectors with their own storage.
//!
//! Complement and reversal write whole words and therefore finish by
//! re-masking the tail, keeping the padding bits zero.

use crate::bitvec::BitVector;
use crate::error::Error;
use crate::word::{self, WORD_BITS};

impl BitVector {
    /// Bitwise xor. The result has length `max(self.len(), other.len())`;
    /// the shorter operand reads as zero-padded. Inputs are not mutated.
    pub fn xor(&self, other: &BitVector) -> Result<BitVector, Error> {
        let mut out = BitVector::new(self.len.max(other.len))?;
        out.words[..self.words.len()].copy_from_slice(&self.words);
        for (o, &w) in out.words.iter_mut().zip(other.words.iter()) {
            *o ^= w;
        }
        Ok(out)
    }

    /// A new vector with every bit flipped.
    pub fn complement(&self) -> Result<BitVector, Error> {
        let mut out = BitVector::new(self.len)?;
        for (o, &w) in out.words.iter_mut().zip(self.words.iter()) {
            *o = !w;
        }
        out.mask_tail();
        Ok(out)
    }

    /// A new vector with the bit order reversed end-to-end: bit `i` of the
    /// result is bit `len - 1 - i` of `self`. Works for any length, not just
    /// multiples of the word width.
    ///
    /// Reverses the word order with each word bit-reversed, which leaves the
    /// logical bits occupying the *top* `len` bits of the buffer; a final
    /// right shift by `capacity - len` (< 64) drops them into place without
    /// ever exposing the padding.
    pub fn reversed(&self) -> Result<BitVector, Error> {
        let mut out = BitVector::new(self.len)?;
        let n = self.words.len();
        if n == 0 {
            return Ok(out);
        }
        for (o, &w) in out.words.iter_mut().zip(self.words.iter().rev()) {
            *o = word::reverse(w);
        }
        let shift = out.capacity() - self.len;
        if shift > 0 {
            for i in 0..n - 1 {
                out.words[i] = (out.words[i] >> shift) | (out.words[i + 1] << (WORD_BITS - shift));
            }
            out.words[n - 1] >>= shift;
        }
        Ok(out)
    }

    /// Number of positions where `self` and `other` differ, the shorter
    /// operand zero-padded per the [`xor`](Self::xor) rule.
    pub fn hamming_distance(&self, other: &BitVector) -> Result<usize, Error> {
        Ok(self.xor(other)?.count_ones())
    }
}

/// Value equality: identical length and identical bit content. The padding
/// tails compare equal trivially — both are zero by invariant.
impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.words == other.words
    }
}

impl Eq for BitVector {}
