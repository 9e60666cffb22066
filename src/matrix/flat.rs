use crate::matrix::Matrix;

/// Matrix stored in a single contiguous row-major buffer.
///
/// Row `i` is the slice `[i * size .. (i + 1) * size]`, so row `N+1`'s base
/// offset is always row `N`'s base plus `size`. The strided blocked kernel
/// relies on that stride to replace per-access row lookups with running
/// offsets.
pub struct FlatMatrix {
    data: Vec<f64>,
    size: usize,
}

impl FlatMatrix {
    /// Allocate a zero-filled `sz`×`sz` matrix.
    ///
    /// Allocation failure aborts the process; there is no recovery path.
    ///
    /// # Panics
    ///
    /// Panics if `sz` is zero.
    pub fn zeroed(sz: usize) -> Self {
        assert!(sz > 0, "matrix side length must be positive");
        Self {
            data: vec![0.0; sz * sz],
            size: sz,
        }
    }

    /// The whole buffer, row-major. Row `i` starts at offset `i * size`.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable view of the whole buffer.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Matrix for FlatMatrix {
    fn size(&self) -> usize {
        self.size
    }

    fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let sz = self.size;
        &mut self.data[i * sz..(i + 1) * sz]
    }
}
