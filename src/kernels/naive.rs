use crate::matrix::Matrix;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. It's slow because the innermost loop
/// walks operand `b` down a column — stride `size` — so once the matrix
/// outgrows cache, nearly every `b` access pulls in a fresh cache line just
/// to use one element of it.
///
/// Accumulates into `res` (`res[i][j] += a[i][k] * b[k][j]`); the caller
/// supplies a zero-filled result and matching side lengths. Violating either
/// gives garbage numbers, not a signaled error.
///
/// Use this as the correctness baseline, not for performance.
pub fn multiply_naive<M: Matrix>(a: &M, b: &M, res: &mut M) {
    let sz = a.size();
    debug_assert_eq!(b.size(), sz);
    debug_assert_eq!(res.size(), sz);

    for i in 0..sz {
        let a_row = a.row(i);
        let res_row = res.row_mut(i);
        for j in 0..sz {
            for k in 0..sz {
                res_row[j] += a_row[k] * b.row(k)[j];
            }
        }
    }
}
