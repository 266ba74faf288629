/// Blocked square matrix multiplication, block loops in i-k-j order.
///
/// Same tiling as [`block_product_ijk`], with two reorderings borrowed from
/// the i-k-j scalar variant: the depth loop is hoisted above the column loop
/// at the block level, and within each tile the A entry is hoisted so the
/// innermost loop walks B and C with stride 1.
///
/// The result is identical to the i-j-k order for every input; the loop
/// order is purely a memory-access choice.
///
/// `c` is accumulated into (C += A * B), not overwritten.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into
/// * `n` - Side length of all three matrices
/// * `blocking_factor` - Blocks per side; must be positive and divide `n`
///
/// [`block_product_ijk`]: crate::blocked::block_ijk::block_product_ijk
pub fn block_product_ikj(a: &[i32], b: &[i32], c: &mut [i32], n: usize, blocking_factor: usize) {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);
    debug_assert_eq!(c.len(), n * n);
    debug_assert!(blocking_factor > 0 && n % blocking_factor == 0);

    let block = n / blocking_factor;

    for i in 0..blocking_factor {
        for k in 0..blocking_factor {
            for j in 0..blocking_factor {
                let row0 = i * block;
                let dep0 = k * block;
                let col0 = j * block;
                for p in 0..block {
                    for m in 0..block {
                        let a_val = a[(row0 + p) * n + (dep0 + m)];
                        for q in 0..block {
                            c[(row0 + p) * n + (col0 + q)] += a_val * b[(dep0 + m) * n + (col0 + q)];
                        }
                    }
                }
            }
        }
    }
}
