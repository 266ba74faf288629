use blockmul::error::Error;
use blockmul::matrix::naive_ijk::matmul_naive_ijk;
use blockmul::matrix::naive_ikj::matmul_naive_ikj;
use blockmul::{Matrix, block_product_ijk, block_product_ikj, multiply};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_matrices_equal(expected: &[i32], actual: &[i32], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert_eq!(
            expected[i], actual[i],
            "{}: mismatch at index {}: expected {}, got {}",
            name, i, expected[i], actual[i]
        );
    }
}

fn naive_product(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.size();
    let mut c = Matrix::zeroed(n);
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
    c
}

fn patterned(n: usize, offset: usize, modulus: i32) -> Matrix {
    let data = (0..n * n).map(|i| ((i + offset) as i32) % modulus).collect();
    Matrix::from_vec(n, data).unwrap()
}

// ============================================================
// Concrete small-matrix scenarios
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();

    let c = multiply(&a, &b, 1).unwrap();

    assert_eq!(c, Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap());
}

#[test]
fn test_identity_4x4() {
    let id = Matrix::identity(4);
    let b = patterned(4, 3, 10);

    let left = multiply(&id, &b, 2).unwrap();
    let right = multiply(&b, &id, 2).unwrap();

    assert_matrices_equal(b.as_slice(), left.as_slice(), "I*B");
    assert_matrices_equal(b.as_slice(), right.as_slice(), "B*I");
}

#[test]
fn test_zero_matrix() {
    let zero = Matrix::zeroed(6);
    let b = patterned(6, 1, 9);

    for factor in [1, 2, 3, 6] {
        let c = multiply(&zero, &b, factor).unwrap();
        assert_matrices_equal(zero.as_slice(), c.as_slice(), "0*B");
        let c = multiply(&b, &zero, factor).unwrap();
        assert_matrices_equal(zero.as_slice(), c.as_slice(), "B*0");
    }
}

// ============================================================
// Blocking-factor invariance
// ============================================================

#[test]
fn test_blocking_factor_invariance() {
    let sizes = [1, 2, 4, 6, 8, 12];

    for n in sizes {
        let a = patterned(n, 0, 10);
        let b = patterned(n, 5, 10);
        let expected = naive_product(&a, &b);

        for factor in 1..=n {
            if n % factor != 0 {
                continue;
            }
            let c = multiply(&a, &b, factor).unwrap();
            assert_matrices_equal(
                expected.as_slice(),
                c.as_slice(),
                &format!("n={} factor={}", n, factor),
            );
        }
    }
}

#[test]
fn test_single_block_matches_scalar_blocks() {
    // factor 1 (one full-matrix block) and factor n (1x1 blocks) are the two
    // degenerate tilings; both must equal each other
    let a = patterned(4, 2, 10);
    let b = patterned(4, 7, 10);

    let one_block = multiply(&a, &b, 1).unwrap();
    let scalar_blocks = multiply(&a, &b, 4).unwrap();

    assert_matrices_equal(one_block.as_slice(), scalar_blocks.as_slice(), "b=1 vs b=4");
}

#[test]
fn test_block_orders_agree() {
    let n = 12;
    let mut rng = StdRng::seed_from_u64(42);
    let a: Vec<i32> = (0..n * n).map(|_| rng.gen_range(-10..10)).collect();
    let b: Vec<i32> = (0..n * n).map(|_| rng.gen_range(-10..10)).collect();

    let mut expected = vec![0; n * n];
    matmul_naive_ijk(&a, &b, &mut expected, n);

    for factor in [1, 2, 3, 4, 6, 12] {
        let mut c_ijk = vec![0; n * n];
        let mut c_ikj = vec![0; n * n];
        block_product_ijk(&a, &b, &mut c_ijk, n, factor);
        block_product_ikj(&a, &b, &mut c_ikj, n, factor);

        assert_matrices_equal(&expected, &c_ijk, &format!("ijk factor={}", factor));
        assert_matrices_equal(&expected, &c_ikj, &format!("ikj factor={}", factor));
    }
}

#[test]
fn test_naive_orders_agree() {
    let n = 8;
    let a = patterned(n, 1, 7);
    let b = patterned(n, 4, 11);

    let mut c_ijk = vec![0; n * n];
    let mut c_ikj = vec![0; n * n];
    matmul_naive_ijk(a.as_slice(), b.as_slice(), &mut c_ijk, n);
    matmul_naive_ikj(a.as_slice(), b.as_slice(), &mut c_ikj, n);

    assert_matrices_equal(&c_ijk, &c_ikj, "naive ijk vs ikj");
}

// ============================================================
// Algebraic properties
// ============================================================

#[test]
fn test_associativity() {
    let a = patterned(4, 0, 5);
    let b = patterned(4, 3, 5);
    let c = patterned(4, 6, 5);

    let ab_c = multiply(&multiply(&a, &b, 2).unwrap(), &c, 2).unwrap();
    let a_bc = multiply(&a, &multiply(&b, &c, 2).unwrap(), 2).unwrap();

    assert_matrices_equal(ab_c.as_slice(), a_bc.as_slice(), "(AB)C vs A(BC)");
}

// ============================================================
// Precondition enforcement
// ============================================================

#[test]
fn test_rejects_non_divisor_blocking_factor() {
    let a = Matrix::zeroed(4);
    let b = Matrix::zeroed(4);

    assert!(matches!(
        multiply(&a, &b, 3),
        Err(Error::BlockingFactor {
            size: 4,
            blocking_factor: 3
        })
    ));
}

#[test]
fn test_rejects_zero_blocking_factor() {
    let a = Matrix::zeroed(4);

    assert!(matches!(
        multiply(&a, &a, 0),
        Err(Error::ZeroBlockingFactor)
    ));
}

#[test]
fn test_rejects_size_mismatch() {
    let a = Matrix::zeroed(4);
    let b = Matrix::zeroed(6);

    assert!(matches!(
        multiply(&a, &b, 2),
        Err(Error::SizeMismatch { left: 4, right: 6 })
    ));
}

// ============================================================
// Accumulation test (C += A*B, not C = A*B)
// ============================================================

#[test]
fn test_kernels_accumulate() {
    let n = 6;
    let a = patterned(n, 0, 10);
    let b = patterned(n, 3, 10);

    // Start with non-zero C
    let mut c_naive = vec![5; n * n];
    let mut c_ijk = vec![5; n * n];
    let mut c_ikj = vec![5; n * n];

    matmul_naive_ikj(a.as_slice(), b.as_slice(), &mut c_naive, n);
    block_product_ijk(a.as_slice(), b.as_slice(), &mut c_ijk, n, 3);
    block_product_ikj(a.as_slice(), b.as_slice(), &mut c_ikj, n, 3);

    assert_matrices_equal(&c_naive, &c_ijk, "accumulate ijk");
    assert_matrices_equal(&c_naive, &c_ikj, "accumulate ikj");

    // Verify values are actually offset by 5 (not overwritten)
    let product = multiply(&a, &b, 3).unwrap();
    assert_eq!(c_ijk[0], product.as_slice()[0] + 5, "should accumulate, not overwrite");
}
