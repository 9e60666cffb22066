//! Cross-kernel result validation.
//!
//! A comparison failure here is a diagnostic, not an error: the benchmark
//! prints the offending cell and keeps running.

use std::fmt;

use crate::matrix::Matrix;

/// First differing cell found by [`check_equal`] or [`check_close`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub row: usize,
    pub col: usize,
    pub left: f64,
    pub right: f64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m1[{}][{}] = {}, m2[{}][{}] = {}",
            self.row, self.col, self.left, self.row, self.col, self.right
        )
    }
}

/// Compare two matrices cell by cell for exact equality.
///
/// Returns the first mismatch, or `None` when every cell agrees. Exact
/// comparison is intentional: all four kernels in this crate accumulate each
/// result cell over k in ascending order, so their outputs agree bitwise,
/// not just approximately. Kernels that genuinely reorder the summation
/// should be compared with [`check_close`] instead.
pub fn check_equal<M: Matrix, N: Matrix>(m1: &M, m2: &N) -> Option<Mismatch> {
    debug_assert_eq!(m1.size(), m2.size());
    for i in 0..m1.size() {
        let r1 = m1.row(i);
        let r2 = m2.row(i);
        for j in 0..r1.len() {
            if r1[j] != r2[j] {
                return Some(Mismatch {
                    row: i,
                    col: j,
                    left: r1[j],
                    right: r2[j],
                });
            }
        }
    }
    None
}

/// Relative-tolerance comparison for summation orders that are not expected
/// to agree bitwise.
///
/// A cell passes when `|x - y| <= rel_tol * max(|x|, |y|, 1.0)`; the `1.0`
/// floor keeps the check meaningful for cells near zero.
pub fn check_close<M: Matrix, N: Matrix>(m1: &M, m2: &N, rel_tol: f64) -> Option<Mismatch> {
    debug_assert_eq!(m1.size(), m2.size());
    for i in 0..m1.size() {
        let r1 = m1.row(i);
        let r2 = m2.row(i);
        for j in 0..r1.len() {
            let (x, y) = (r1[j], r2[j]);
            if (x - y).abs() > rel_tol * x.abs().max(y.abs()).max(1.0) {
                return Some(Mismatch {
                    row: i,
                    col: j,
                    left: x,
                    right: y,
                });
            }
        }
    }
    None
}
