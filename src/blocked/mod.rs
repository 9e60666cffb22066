//! Cache-line-sized tile blocking.
//!
//! The kernels in [`crate::kernels`] stream entire operands through the cache
//! for every output row. The blocked kernels instead split the i/j/k
//! iteration space into square tiles of [`BlockSize`] elements per edge, so
//! the inner loops touch roughly three tiles' worth of data — small enough to
//! stay resident while the tile is worked on.
//!
//! Two statements of the same algorithm:
//! - [`multiply_blocked`]: index form, works on any [`crate::matrix::Matrix`]
//! - [`multiply_blocked_strided`]: running-offset form, flat storage only

mod indexed;
mod strided;

pub use indexed::multiply_blocked;
pub use strided::multiply_blocked_strided;

/// Cache line size in bytes assumed when no geometry is supplied.
pub const DEFAULT_CACHE_LINE_BYTES: usize = 64;

/// Edge length of the square tiles the blocked kernels work in.
///
/// Derived from a cache-line byte count divided by the `f64` element size, so
/// one tile row fills a whole number of cache lines. Computed once at startup
/// and passed into the kernels explicitly, which keeps the blocking algorithm
/// testable with geometries other than the host machine's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSize(usize);

impl BlockSize {
    /// Block edge for a cache line of `line_bytes` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `line_bytes` is smaller than one `f64`.
    pub fn from_cache_line(line_bytes: usize) -> Self {
        let edge = line_bytes / size_of::<f64>();
        assert!(edge > 0, "cache line of {line_bytes} bytes holds no f64");
        Self(edge)
    }

    /// Block edge set directly, for tests and experiments.
    ///
    /// # Panics
    ///
    /// Panics if `edge` is zero.
    pub fn new(edge: usize) -> Self {
        assert!(edge > 0, "block edge must be positive");
        Self(edge)
    }

    /// Elements per tile edge.
    pub fn edge(self) -> usize {
        self.0
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self::from_cache_line(DEFAULT_CACHE_LINE_BYTES)
    }
}
