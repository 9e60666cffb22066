//! Matrix storage: the two layouts under test.
//!
//! The whole point of this crate is that the *same* arithmetic runs at very
//! different speeds depending on how the operands sit in memory, so storage
//! gets two implementations:
//!
//! - [`JaggedMatrix`]: every row is its own heap allocation
//! - [`FlatMatrix`]: one contiguous buffer, rows at stride `size`
//!
//! Both expose the same row-slice interface through the [`Matrix`] trait so
//! the kernels stay layout-agnostic. The one exception is the strided blocked
//! kernel, which needs [`FlatMatrix`] concretely because its running-offset
//! arithmetic is only valid when row `N+1` starts exactly `size` elements
//! after row `N`.

mod flat;
mod jagged;

pub use flat::FlatMatrix;
pub use jagged::JaggedMatrix;

use rand::Rng;

/// A square matrix of `f64`, addressed row by row.
pub trait Matrix {
    /// Side length.
    fn size(&self) -> usize;

    /// Row `i` as a slice of `size()` elements.
    ///
    /// # Panics
    ///
    /// Panics if `i >= size()`.
    fn row(&self, i: usize) -> &[f64];

    /// Mutable row `i`.
    fn row_mut(&mut self, i: usize) -> &mut [f64];

    /// Element at (`i`, `j`).
    fn get(&self, i: usize, j: usize) -> f64 {
        self.row(i)[j]
    }

    /// Overwrite the element at (`i`, `j`).
    fn set(&mut self, i: usize, j: usize, v: f64) {
        self.row_mut(i)[j] = v;
    }

    /// Copy every element from `src`, which may use the other layout.
    ///
    /// This is how the benchmark gets identical operand values into both
    /// storage layouts before timing them against each other.
    fn copy_from<M: Matrix + ?Sized>(&mut self, src: &M) {
        debug_assert_eq!(self.size(), src.size());
        for i in 0..self.size() {
            self.row_mut(i).copy_from_slice(src.row(i));
        }
    }

    /// Overwrite every element with a pseudo-random value.
    fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..self.size() {
            for v in self.row_mut(i).iter_mut() {
                *v = rng.random_range(0.0..100.0);
            }
        }
    }
}
