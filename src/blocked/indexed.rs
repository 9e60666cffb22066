use crate::blocked::BlockSize;
use crate::matrix::Matrix;

/// Tile-blocked multiplication, index form.
///
/// The outer three loops step over tile origins in i, j, k; the inner three
/// (i2, k2, j2) sweep one tile. With edge `SM` the inner loops touch about
/// `3 * SM * SM` elements — one tile each of `a`, `b`, and `res` — which
/// bounds the working set to cache size instead of streaming the full
/// operands per output row.
///
/// The within-tile order is i2, k2, j2 on purpose: `a[i+i2][k+k2]` is held as
/// a scalar per (i2, k2) pair while the `res` and `b` rows are walked
/// sequentially across j2, so each loaded cache line is used end to end.
///
/// When `size` is not a multiple of the block edge, the last tile in each
/// dimension shrinks to `size - origin`; nothing is read or written past the
/// matrix edge.
pub fn multiply_blocked<M: Matrix>(a: &M, b: &M, res: &mut M, block: BlockSize) {
    let sz = a.size();
    debug_assert_eq!(b.size(), sz);
    debug_assert_eq!(res.size(), sz);
    let sm = block.edge();

    for i in (0..sz).step_by(sm) {
        let i_span = sm.min(sz - i);
        for j in (0..sz).step_by(sm) {
            let j_span = sm.min(sz - j);
            for k in (0..sz).step_by(sm) {
                let k_span = sm.min(sz - k);

                for i2 in 0..i_span {
                    let a_row = a.row(i + i2);
                    let res_row = res.row_mut(i + i2);
                    for k2 in 0..k_span {
                        let a_ik = a_row[k + k2];
                        let b_row = b.row(k + k2);
                        for j2 in 0..j_span {
                            res_row[j + j2] += a_ik * b_row[j + j2];
                        }
                    }
                }
            }
        }
    }
}
