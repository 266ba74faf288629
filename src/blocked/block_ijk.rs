/// Blocked square matrix multiplication, block loops in i-j-k order.
///
/// The matrix is split into `blocking_factor` blocks per side, each of side
/// `n / blocking_factor`. For every block coordinate `(i, j)` the tile
/// products `A[i][k] × B[k][j]` are summed over the block depth `k`, and
/// each tile product is accumulated elementwise into `C[i][j]` through a
/// scalar `temp` so C is written once per (row, column, depth) tile triple.
///
/// Operation count matches the naive algorithm exactly; only the access
/// order differs. Any permutation of the three block loops produces the same
/// matrix, since every tile contribution is added exactly once.
///
/// `c` is accumulated into (C += A * B), not overwritten. Callers that want
/// a plain product must pass a zeroed `c` — [`crate::multiply`] does.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Side length of all three matrices
/// * `blocking_factor` - Blocks per side; must be positive and divide `n`
pub fn block_product_ijk(a: &[i32], b: &[i32], c: &mut [i32], n: usize, blocking_factor: usize) {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);
    debug_assert_eq!(c.len(), n * n);
    debug_assert!(blocking_factor > 0 && n % blocking_factor == 0);

    let block = n / blocking_factor;

    for i in 0..blocking_factor {
        for j in 0..blocking_factor {
            // C[i][j] = sum over k of A[i][k] * B[k][j], tile by tile
            for k in 0..blocking_factor {
                let row0 = i * block;
                let col0 = j * block;
                let dep0 = k * block;
                for p in 0..block {
                    for q in 0..block {
                        let mut temp = 0;
                        for m in 0..block {
                            temp += a[(row0 + p) * n + (dep0 + m)] * b[(dep0 + m) * n + (col0 + q)];
                        }
                        c[(row0 + p) * n + (col0 + q)] += temp;
                    }
                }
            }
        }
    }
}
