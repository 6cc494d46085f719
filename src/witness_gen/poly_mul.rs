/*
[a0, a1, a2, a3] * [b0, b1, b2, b3]
[
    a0b0, a0b1, a0b2, a0b3
    a1b0, a1b1, a1b2, a1b3
    a2b0, a2b1, a2b2, a2b3
    a3b0, a3b1, a3b2, a3b3
]

coefficients of c can be obtained from traversing diagonals of the above matrix
*/

use std::iter::Sum;
use std::ops::Mul;

/// Product of two polynomials with `k` coefficients each, `2k - 1` coefficients.
pub(crate) fn poly_mul<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Clone + Mul<Output = T> + Sum,
{
    assert_eq!(a.len(), b.len());
    assert!(!a.is_empty());
    let k = a.len();

    (0..2 * k - 1)
        .map(|deg| {
            let lo = deg.saturating_sub(k - 1);
            let hi = deg.min(k - 1);
            (lo..=hi)
                .map(|a_i| a[a_i].clone() * b[deg - a_i].clone())
                .sum()
        })
        .collect()
}
