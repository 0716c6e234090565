//! # ALICE-BitVec
//!
//! **Dynamically resizable bitvector with rank/select**
//!
//! > "Succinct structures are built on one primitive. Get the bit packing
//! > right and everything above it is arithmetic."
//!
//! The uncached baseline under FM-indexes and wavelet matrices: packed
//! 64-bit words, tight capacity, point mutation, rank/select and bitwise
//! algebra. No auxiliary index blocks — rank and select are single linear
//! scans by design.
//!
//! ## Architecture
//!
//! - **Word Primitives**: branch-free bit ops, de-Bruijn MSB, swap-shift
//!   bit reversal
//! - **Storage Manager**: tight word-granular capacity, tail-zero invariant,
//!   fallible growth
//! - **Rank/Select**: O(len/64) scans over the raw words
//! - **Algebra**: xor / complement / reversal / Hamming, never mutating an
//!   operand
//!
//! ## Complexity
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | get / set / clear / toggle | O(1) | O(1) |
//! | rank / select | O(len / 64) | O(1) |
//! | xor / complement / reverse | O(len / 64) | O(len) |
//! | resize | O(len / 64) | in place |
//!
//! ## Example
//!
//! ```
//! use alice_bitvec::BitVector;
//!
//! let mut bv = BitVector::new(20)?;
//! bv.set_range(true, 4, 12)?;
//! bv.set(18)?;
//!
//! // rank is an inclusive prefix popcount
//! assert_eq!(bv.rank(19), 10);
//!
//! // select(k) is the position of the k-th set bit, 0-based
//! assert_eq!(bv.select(0), Some(4));
//! assert_eq!(bv.select(9), Some(18));
//!
//! // 20 bits pack into a single word
//! assert_eq!(bv.word_len(), 1);
//! # Ok::<(), alice_bitvec::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bitvec;
pub mod error;
pub mod ops;
pub mod rank;
pub mod word;

pub use bitvec::BitVector;
pub use error::Error;

/// Version
pub const VERSION: &str = "0.1.0";
