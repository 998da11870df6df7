//! Row dispatch shared by the buffer-producing operations.
//!
//! With the `parallel` feature the rows of the output are handed to rayon;
//! each worker owns one disjoint `&mut` row, so results do not depend on
//! scheduling.

/// Calls `f(y, row)` for every `stride`-sized row of `dst`.
pub(crate) fn for_each_row<F>(dst: &mut [u8], stride: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    if stride == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        dst.par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        dst.chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}
