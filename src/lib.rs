//! Dense square matrix multiplication under different memory-access strategies.
//!
//! I built this to measure how much cache locality matters for the exact same
//! arithmetic. Every kernel here computes the same `res += a * b`; they differ
//! only in the order they walk memory:
//!
//! - naive i-j-k loops (column-strided access to `b`, the slow baseline)
//! - transpose `b` first, then read everything row-major
//! - tile-blocked loops sized to the cache line, in index form
//! - the same blocking with running row-base offsets on contiguous storage
//!
//! Matrices come in two layouts — [`JaggedMatrix`] with independently owned
//! rows and [`FlatMatrix`] with one contiguous buffer — so the benchmark can
//! also show what the allocation shape alone costs.
//!
//! ## Usage
//!
//! ```
//! use matmul_locality::{multiply, FlatMatrix, Matrix};
//!
//! let mut a = FlatMatrix::zeroed(2);
//! let mut b = FlatMatrix::zeroed(2);
//! a.set(0, 0, 1.0); a.set(0, 1, 2.0);
//! a.set(1, 0, 3.0); a.set(1, 1, 4.0);
//! b.set(0, 0, 5.0); b.set(0, 1, 6.0);
//! b.set(1, 0, 7.0); b.set(1, 1, 8.0);
//!
//! let mut res = FlatMatrix::zeroed(2);
//! multiply(&a, &b, &mut res);
//!
//! assert_eq!(res.row(0), &[19.0, 22.0]);
//! assert_eq!(res.row(1), &[43.0, 50.0]);
//! ```

pub mod blocked;
pub mod kernels;
pub mod matrix;
pub mod validate;

pub use blocked::{BlockSize, DEFAULT_CACHE_LINE_BYTES, multiply_blocked, multiply_blocked_strided};
pub use kernels::naive::multiply_naive;
pub use kernels::transposed::{multiply_transposed, multiply_transposed_scratch, transpose_in_place};
pub use matrix::{FlatMatrix, JaggedMatrix, Matrix};
pub use validate::{Mismatch, check_close, check_equal};

/// Multiply two square matrices with the best general-purpose kernel here.
///
/// Runs the tile-blocked kernel with the default cache-line-derived block
/// size. `res` must be zero-filled; the product is accumulated into it.
///
/// # Panics
///
/// Panics if the three side lengths don't match.
pub fn multiply<M: Matrix>(a: &M, b: &M, res: &mut M) {
    assert_eq!(a.size(), b.size(), "operand side lengths differ");
    assert_eq!(a.size(), res.size(), "result side length differs");
    multiply_blocked(a, b, res, BlockSize::default());
}
