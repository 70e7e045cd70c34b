//! Constants and configuration for the LZ-End parser
//!
//! This module defines the compile-time parameters shared by the index
//! structures and the parser, and a couple of small bit helpers.

/// Default block size of the two-level RMQ.
///
/// The sparse table is built over one minimum per block, so the table costs
/// O(n/B · log(n/B)) words. 64 keeps a block within a cache line of `i32`
/// values while queries still resolve short ranges by scanning.
pub const RMQ_BLOCK_SIZE: usize = 64;

/// Default key capacity of a B-tree node (maximum degree 65).
///
/// Must be even (the tree only supports odd maximum degrees) and below 256
/// so node sizes fit a single byte. 64 keys of `i32` fill four cache lines,
/// small enough that linear in-node scans beat binary search.
pub const BTREE_NODE_CAPACITY: usize = 64;

/// Maximum supported input length in bytes.
///
/// All positions and ranks are signed 32-bit; longer inputs are refused
/// before any index is built.
pub const MAX_TEXT_LEN: usize = i32::MAX as usize;

/// Version number
pub const VERSION: (u8, u8, u8) = (0, 1, 0);

/// Compute floor(log2(x)) for x >= 1.
#[inline]
pub const fn floor_log2(x: usize) -> usize {
    (usize::BITS - 1 - x.leading_zeros()) as usize
}
