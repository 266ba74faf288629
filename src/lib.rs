//! Cache-blocked square matrix multiplication in Rust, built from scratch.
//!
//! The total arithmetic of a matrix product is fixed, but the order you
//! visit memory in is not. This crate splits each matrix into a grid of
//! square tiles and accumulates tile-by-tile products, so every loaded tile
//! of B gets reused while it is still in cache. The naive triple loops are
//! included as correctness oracles and baselines.
//!
//! ## Usage
//!
//! ```
//! use blockmul::{multiply, Matrix};
//!
//! let a = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
//! let b = Matrix::from_vec(2, vec![5, 6, 7, 8]).unwrap();
//!
//! let c = multiply(&a, &b, 1).unwrap();
//! assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
//! ```
//!
//! The blocking factor is the number of tiles per side and must divide the
//! matrix size; `multiply` refuses mismatched geometry before touching any
//! arithmetic:
//!
//! ```
//! use blockmul::{multiply, Matrix};
//!
//! let a = Matrix::zeroed(4);
//! assert!(multiply(&a, &a, 3).is_err());
//! ```
//!
//! ## What's inside
//!
//! - Blocked multiplication in two block-loop orders (i-j-k and i-k-j)
//! - Naive i-j-k and cache-friendly i-k-j scalar baselines
//! - A contiguous row-major [`Matrix`] type plus whitespace-integer I/O
//!
//! Entries are `i32`; overflow is neither checked nor corrected, so callers
//! pick sizes and value ranges that stay in range.

pub mod blocked;
pub mod error;
pub mod matrix;

pub use blocked::block_ijk::block_product_ijk;
pub use blocked::block_ikj::block_product_ikj;
pub use error::Error;
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_naive_ikj;

/// Matrix multiply: returns `C = A * B` computed tile by tile.
///
/// Splits the matrices into `blocking_factor` tiles per side. `1` means one
/// tile covering the whole matrix (plain triple loop); a blocking factor
/// equal to the size means 1×1 tiles (same operation count, maximal loop
/// overhead). Every valid blocking factor produces the same matrix.
///
/// The result is freshly allocated and zeroed exactly once before the
/// kernel accumulates into it; the inputs are only read. Uses the i-k-j
/// block order for its stride-1 innermost loop — see
/// [`block_product_ijk`] for the canonical order.
///
/// # Errors
///
/// Fails without doing any arithmetic when the matrices differ in size,
/// when the blocking factor is zero, or when it does not divide the size.
pub fn multiply(a: &Matrix, b: &Matrix, blocking_factor: usize) -> Result<Matrix, Error> {
    if a.size() != b.size() {
        return Err(Error::SizeMismatch {
            left: a.size(),
            right: b.size(),
        });
    }
    let n = a.size();
    validate_blocking(n, blocking_factor)?;

    log::debug!(
        "multiplying {n}x{n} with {blocking_factor} blocks per side (block size {})",
        n / blocking_factor
    );

    let mut c = Matrix::zeroed(n);
    block_product_ikj(
        a.as_slice(),
        b.as_slice(),
        c.as_mut_slice(),
        n,
        blocking_factor,
    );
    Ok(c)
}

/// Check that a blocking factor partitions a matrix of side `n` cleanly.
///
/// Exposed so callers that read the size and factor from separate places
/// (the CLI does) can reject bad geometry before reading whole matrices.
pub fn validate_blocking(n: usize, blocking_factor: usize) -> Result<(), Error> {
    if blocking_factor == 0 {
        return Err(Error::ZeroBlockingFactor);
    }
    if n % blocking_factor != 0 {
        return Err(Error::BlockingFactor {
            size: n,
            blocking_factor,
        });
    }
    Ok(())
}
