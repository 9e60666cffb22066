use crate::matrix::Matrix;

/// Transpose a square matrix in place, swapping `m[i][j]` with `m[j][i]`.
pub fn transpose_in_place<M: Matrix>(m: &mut M) {
    let sz = m.size();
    for i in 0..sz {
        for j in (i + 1)..sz {
            let tmp = m.get(i, j);
            m.set(i, j, m.get(j, i));
            m.set(j, i, tmp);
        }
    }
}

/// Transpose-then-multiply kernel.
///
/// Transposes `b` **in place**, then runs the triple loop as
/// `res[i][j] += a[i][k] * b[j][k]`. After the flip, walking row `j` of `b`
/// visits what used to be column `j`, so the inner loop reads sequential
/// memory instead of striding by `size`.
///
/// # Side effect
///
/// `b` is left transposed on return. A caller that needs `b` in its original
/// orientation afterwards must retranspose it with [`transpose_in_place`],
/// or use [`multiply_transposed_scratch`] instead.
pub fn multiply_transposed<M: Matrix>(a: &M, b: &mut M, res: &mut M) {
    let sz = a.size();
    debug_assert_eq!(b.size(), sz);
    debug_assert_eq!(res.size(), sz);

    transpose_in_place(b);

    for i in 0..sz {
        let a_row = a.row(i);
        let res_row = res.row_mut(i);
        for j in 0..sz {
            let b_row = b.row(j);
            for k in 0..sz {
                res_row[j] += a_row[k] * b_row[k];
            }
        }
    }
}

/// Side-effect-free variant of [`multiply_transposed`].
///
/// Copies `b` into the caller-supplied `scratch`, transposes the scratch,
/// and multiplies against that. `b` is left untouched, at the cost of one
/// extra matrix copy.
pub fn multiply_transposed_scratch<M: Matrix>(a: &M, b: &M, scratch: &mut M, res: &mut M) {
    scratch.copy_from(b);
    multiply_transposed(a, scratch, res);
}
