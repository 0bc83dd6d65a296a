//! Memory organization and filling algorithm for Argon2.
//!
//! This module implements the core memory-filling loop of Argon2. Memory
//! is organized as a matrix of lanes (rows) and columns, with each cell
//! containing a 1024-byte block. Lanes are processed in parallel within
//! each slice, synchronizing at slice boundaries.

use super::block::Block;
use super::params::{Argon2Params, Mode, SYNC_POINTS};
use super::parallel::MatrixPtr;
use super::reference::compute_reference_position;

/// Memory layout parameters for Argon2.
///
/// The memory is organized as follows:
/// - Total memory is divided into `lanes` independent rows.
/// - Each lane contains `lane_len` blocks.
/// - Each lane is divided into `SYNC_POINTS` slices.
/// - Each slice contains `segment_len` blocks.
#[derive(Debug, Clone)]
pub(crate) struct MemoryLayout {
    pub lanes: u32,
    pub lane_len: u32,
    pub segment_len: u32,
    pub total_blocks: u32,
}

impl MemoryLayout {
    pub(crate) fn new(params: &Argon2Params, total_blocks: u32) -> Self {
        let lanes = params.lanes;
        let lane_len = total_blocks / lanes;
        let segment_len = lane_len / SYNC_POINTS;

        Self {
            lanes,
            lane_len,
            segment_len,
            total_blocks,
        }
    }

    #[inline]
    pub(crate) fn index(&self, lane: u32, index_in_lane: u32) -> usize {
        (lane * self.lane_len + index_in_lane) as usize
    }

    /// Fills all memory blocks over the specified number of passes.
    ///
    /// Each pass iterates through `SYNC_POINTS` slices in order. Within a
    /// slice, every lane is filled by its own worker thread; workers for
    /// slice `s` are all joined before any worker for slice `s + 1`
    /// starts. A lane's worker only ever writes blocks inside its own
    /// `(pass, slice, lane)` segment and only reads blocks belonging to
    /// other lanes that were completed in a prior slice, so no
    /// synchronization is needed beyond the slice-level join.
    pub(crate) fn fill(&self, memory: &mut [Block], time: u32, mode: Mode) {
        let matrix = MatrixPtr::new(memory);

        for pass in 0..time {
            for slice in 0..SYNC_POINTS {
                if self.lanes == 1 {
                    self.fill_segment(matrix, pass, slice, 0, time, mode);
                    continue;
                }

                std::thread::scope(|scope| {
                    for lane in 0..self.lanes {
                        scope.spawn(move || {
                            self.fill_segment(matrix, pass, slice, lane, time, mode);
                        });
                    }
                });
            }
        }
    }

    /// Fills one segment (portion of a lane within a slice).
    ///
    /// For each block position, this function:
    /// 1. Determines J1, J2 (from an address block, or from the previous
    ///    block's first word).
    /// 2. Computes the reference block position using J1, J2.
    /// 3. Computes the new block as G(previous, reference), overwriting on
    ///    pass 0 or XOR-accumulating into the existing value afterward.
    fn fill_segment(
        &self,
        memory: MatrixPtr,
        pass: u32,
        slice: u32,
        lane: u32,
        time: u32,
        mode: Mode,
    ) {
        let data_independent = mode.data_independent(pass, slice);

        let mut addr_block = Block::ZERO;
        let mut address_counter = 0u32;

        if data_independent {
            address_counter += 1;
            addr_block = Block::generate_address_block(
                pass,
                lane,
                slice,
                self.total_blocks,
                time,
                mode.as_u32(),
                address_counter,
            );
        }

        let start_idx = if pass == 0 && slice == 0 { 2 } else { 0 };

        for i in start_idx..self.segment_len {
            let index_in_lane = slice * self.segment_len + i;

            let prev_idx = if index_in_lane == 0 {
                self.lane_len - 1
            } else {
                index_in_lane - 1
            };

            let (j1, j2) = if data_independent {
                if i != 0 && i % 128 == 0 {
                    address_counter += 1;
                    addr_block = Block::generate_address_block(
                        pass,
                        lane,
                        slice,
                        self.total_blocks,
                        time,
                        mode.as_u32(),
                        address_counter,
                    );
                }
                let word = addr_block.0[(i % 128) as usize];
                (word as u32, (word >> 32) as u32)
            } else {
                // SAFETY: `prev` belongs to this lane and was written by
                // this same worker (or by initialization), never by a
                // concurrently running worker.
                let word = unsafe { memory.get(self.index(lane, prev_idx)) }.0[0];
                (word as u32, (word >> 32) as u32)
            };

            let (ref_lane, ref_idx) =
                compute_reference_position(pass, slice, lane, i, self, j1, j2);

            let cur = self.index(lane, index_in_lane);
            let prev = self.index(lane, prev_idx);
            let reference = self.index(ref_lane, ref_idx);

            // SAFETY: `prev` and `cur` are owned exclusively by this
            // lane's worker for this slice; `reference` was either written
            // in a prior slice (possibly by another lane, now read-only)
            // or, for pass 0 slice 0, lies strictly before `cur` in this
            // same lane. See `compute_reference_position`'s window
            // arithmetic for why `reference` can never fall inside a
            // region another worker is concurrently writing, and why
            // `reference` and `prev` are always distinct from `cur`.
            let prev_block = unsafe { memory.get(prev) };
            let ref_block = unsafe { memory.get(reference) };

            if pass == 0 {
                let compressed = Block::compress(prev_block, ref_block);
                unsafe {
                    *memory.get_mut(cur) = compressed;
                }
            } else {
                unsafe {
                    Block::compress_xor_into(memory.get_mut(cur), prev_block, ref_block);
                }
            }
        }
    }
}
