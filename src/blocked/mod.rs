//! Cache-blocked multiplication for square matrices.
//!
//! These functions partition the matrices into a grid of square tiles and
//! accumulate tile-by-tile products. The arithmetic is identical to the
//! naive triple loop; only the memory-access order changes, so each tile of
//! B is reused while it is still hot in cache.
//!
//! Available implementations:
//! - `block_ijk`: block loops in i-j-k order, scalar accumulator innermost
//! - `block_ikj`: block loops in i-k-j order, stride-1 innermost loop

pub mod block_ijk;
pub mod block_ikj;
