//! Raw, disjoint-by-construction access to the block matrix across lane
//! workers.
//!
//! Lane workers write only to the segment owned by their own
//! `(pass, slice, lane)` and read blocks owned by other lanes only across
//! a completed slice boundary (see `reference::compute_reference_position`
//! and the invariant documented on `MemoryLayout::fill`). Because that
//! disjointness is structural rather than something the type system can
//! see through a shared `Vec<Block>`, workers reach the matrix through a
//! raw pointer instead of a borrowed slice, and touch only the individual
//! elements they need rather than ever materializing an aliasing `&mut
//! [Block]` over the whole matrix.

use super::block::Block;

#[derive(Clone, Copy)]
pub(super) struct MatrixPtr {
    ptr: *mut Block,
}

// SAFETY: a `MatrixPtr` is handed to exactly one worker thread per lane per
// slice, and workers only write the element range owned by their own lane,
// so no two live accesses through different copies ever touch the same
// `Block` mutably at the same time.
unsafe impl Send for MatrixPtr {}

impl MatrixPtr {
    pub(super) fn new(memory: &mut [Block]) -> Self {
        Self {
            ptr: memory.as_mut_ptr(),
        }
    }

    /// Reads the block at `idx`. Callers must ensure no other thread is
    /// concurrently writing that index.
    #[inline]
    pub(super) unsafe fn get(&self, idx: usize) -> &Block {
        unsafe { &*self.ptr.add(idx) }
    }

    /// Mutably accesses the block at `idx`. Callers must ensure no other
    /// thread is concurrently reading or writing that index.
    #[inline]
    pub(super) unsafe fn get_mut(&self, idx: usize) -> &mut Block {
        unsafe { &mut *self.ptr.add(idx) }
    }
}
