//! Error Kinds
//!
//! Every fallible path in the crate reports through [`Error`]: out-of-range
//! bit indices and storage that cannot be grown. Nothing in this crate
//! aborts the process; callers pick their own failure policy.

use core::fmt;

/// Errors reported by bitvector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A single-bit access at `pos >= len`.
    IndexOutOfRange { pos: usize, len: usize },
    /// The backing word buffer could not be allocated or grown.
    AllocationFailure { words: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { pos, len } => {
                write!(f, "bit index {} out of range for bitvector of length {}", pos, len)
            }
            Error::AllocationFailure { words } => {
                write!(f, "could not allocate backing storage for {} words", words)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
