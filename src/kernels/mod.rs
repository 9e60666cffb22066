//! The multiplication kernels under comparison.
//!
//! All kernels compute the same product and accumulate into a caller-supplied
//! zero-filled result (`res[i][j] += ...`). They differ only in how they walk
//! memory:
//!
//! - `naive`: textbook i-j-k loops, strided access to the second operand
//! - `transposed`: flips the second operand first so every access is row-major
//!
//! The tile-blocked kernels live in [`crate::blocked`].

pub mod naive;
pub mod transposed;
