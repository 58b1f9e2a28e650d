//! Determinant by cofactor expansion along the first row.
//!
//! Deliberately naive: O(n!) with no pivoting. Fine for the 2–4 dimensions
//! this crate targets; do not reach for this on anything larger.

use super::Mat;

/// Determinant of a square matrix.
///
/// The scalar effect the matrix would have on the volume of the space if
/// applied as a transformation. 0×0 is defined as 0, 1×1 as the sole value.
pub fn determinant<const N: usize>(m: &Mat<N, N>) -> f32 {
    det(m.as_slice(), N)
}

/// Recursive expansion over a row-major `n`×`n` buffer.
fn det(data: &[f32], n: usize) -> f32 {
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return data[0];
    }

    let mut sum = 0.0;
    let mut minor = vec![0.0f32; (n - 1) * (n - 1)];

    for pivot in 0..n {
        // Fill the minor: drop row 0 and the pivot column.
        for c in 0..n {
            if c == pivot {
                continue;
            }
            let mc = if c < pivot { c } else { c - 1 };
            for r in 0..n - 1 {
                minor[r * (n - 1) + mc] = data[(r + 1) * n + c];
            }
        }

        let partial = data[pivot] * det(&minor, n - 1);
        // Alternating sign along the expansion row.
        sum += if pivot % 2 == 0 { partial } else { -partial };
    }

    sum
}
