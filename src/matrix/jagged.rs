use crate::matrix::Matrix;

/// Matrix stored as independently owned row buffers.
///
/// Each row is a separate heap allocation with no layout relationship to its
/// neighbors. Walking down a column therefore hops between unrelated buffers,
/// which is exactly the access pattern the naive kernel suffers from.
pub struct JaggedMatrix {
    rows: Vec<Vec<f64>>,
}

impl JaggedMatrix {
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
            rows: (0..sz).map(|_| vec![0.0; sz]).collect(),
        }
    }
}

impl Matrix for JaggedMatrix {
    fn size(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.rows[i]
    }
}
