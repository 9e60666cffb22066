use crate::blocked::BlockSize;
use crate::matrix::{FlatMatrix, Matrix};

/// Tile-blocked multiplication, running-offset form.
///
/// Identical blocking policy and edge handling to
/// [`crate::blocked::multiply_blocked`], restated for the contiguous layout:
/// instead of resolving `res[i + i2][j + j2]` through a row lookup on every
/// access, it keeps one running row-base offset per matrix and bumps each by
/// the row stride (`size`) as the within-tile row advances. The innermost
/// loop then indexes with a plain offset from the base.
///
/// Exists to measure whether dropping the repeated index arithmetic buys
/// anything on top of blocking alone. Takes [`FlatMatrix`] only: the offset
/// bumps assume row `N+1`'s base is row `N`'s base plus `size`.
pub fn multiply_blocked_strided(
    a: &FlatMatrix,
    b: &FlatMatrix,
    res: &mut FlatMatrix,
    block: BlockSize,
) {
    let sz = a.size();
    debug_assert_eq!(b.size(), sz);
    debug_assert_eq!(res.size(), sz);
    let sm = block.edge();

    let a = a.as_slice();
    let b = b.as_slice();
    let res = res.as_mut_slice();

    for i in (0..sz).step_by(sm) {
        let i_span = sm.min(sz - i);
        for j in (0..sz).step_by(sm) {
            let j_span = sm.min(sz - j);
            for k in (0..sz).step_by(sm) {
                let k_span = sm.min(sz - k);

                let mut res_base = i * sz + j;
                let mut a_base = i * sz + k;
                for _i2 in 0..i_span {
                    let mut b_base = k * sz + j;
                    for k2 in 0..k_span {
                        let a_ik = a[a_base + k2];
                        for j2 in 0..j_span {
                            res[res_base + j2] += a_ik * b[b_base + j2];
                        }
                        b_base += sz;
                    }
                    res_base += sz;
                    a_base += sz;
                }
            }
        }
    }
}
