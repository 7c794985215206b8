//! Square matrices over the integers modulo 26.

use cipher_core::{is_coprime_with_26, mod26, mod_inverse};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Rows that do not form a non-empty square matrix.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("matrix rows must form a non-empty square")]
pub struct NotSquare;

/// Square matrix with entries in `0..26`, stored row-major.
///
/// Serialized as its rows; deserialization applies the same checks as
/// [`ModMatrix::from_rows`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct ModMatrix {
    rows: Vec<Vec<i32>>,
}

impl TryFrom<Vec<Vec<i32>>> for ModMatrix {
    type Error = NotSquare;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows).ok_or(NotSquare)
    }
}

impl From<ModMatrix> for Vec<Vec<i32>> {
    fn from(matrix: ModMatrix) -> Self {
        matrix.rows
    }
}

impl ModMatrix {
    /// Builds a matrix from rows, reducing every entry mod 26.
    ///
    /// Returns `None` for an empty or non-square input.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Option<Self> {
        let n = rows.len();
        if n == 0 || rows.iter().any(|row| row.len() != n) {
            return None;
        }
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(mod26).collect())
            .collect();
        Some(Self { rows })
    }

    /// Returns the `n×n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| i32::from(i == j)).collect())
            .collect();
        Self { rows }
    }

    /// Generates a uniformly random `n×n` matrix (not necessarily invertible).
    fn random<R: RngCore>(rng: &mut R, n: usize) -> Self {
        let rows = (0..n)
            .map(|_| (0..n).map(|_| rng.gen_range(0..26)).collect())
            .collect();
        Self { rows }
    }

    /// Generates a random matrix whose determinant is coprime with 26,
    /// retrying until one is found.
    pub fn random_invertible<R: RngCore>(rng: &mut R, n: usize) -> Self {
        let mut rejected = 0usize;
        loop {
            let candidate = Self::random(rng, n);
            if candidate.is_invertible() {
                debug!(size = n, rejected, "generated invertible matrix");
                return candidate;
            }
            rejected += 1;
        }
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Exposes the rows.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.rows[row][col]
    }

    /// Determinant mod 26: closed form for 2×2, cofactor expansion along the
    /// first row otherwise.
    pub fn determinant(&self) -> i32 {
        mod26(det(&self.rows))
    }

    /// Returns true if the determinant is coprime with 26.
    pub fn is_invertible(&self) -> bool {
        is_coprime_with_26(self.determinant())
    }

    /// Cofactor matrix `C[i][j] = (-1)^(i+j) · det(minor(i, j))`, reduced mod 26.
    pub fn cofactors(&self) -> Self {
        let n = self.size();
        if n == 1 {
            return Self::identity(1);
        }
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                        mod26(sign * det(&minor(&self.rows, i, j)))
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let n = self.size();
        let rows = (0..n)
            .map(|i| (0..n).map(|j| self.rows[j][i]).collect())
            .collect();
        Self { rows }
    }

    /// Adjugate (transposed cofactor matrix).
    pub fn adjugate(&self) -> Self {
        self.cofactors().transpose()
    }

    /// Inverse mod 26: the adjugate scaled by the determinant's inverse.
    pub fn invert(&self) -> Option<Self> {
        let det_inv = mod_inverse(self.determinant())?;
        let adj = self.adjugate();
        let rows = adj
            .rows
            .iter()
            .map(|row| row.iter().map(|&v| mod26(v * det_inv)).collect())
            .collect();
        Some(Self { rows })
    }

    /// Multiplies two matrices (`self * rhs`). Both must share a dimension.
    pub fn mul(&self, rhs: &Self) -> Self {
        let n = self.size();
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| mod26((0..n).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum()))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Applies the matrix to a column vector of letter values.
    pub fn apply(&self, vector: &[i32]) -> Vec<i32> {
        self.rows
            .iter()
            .map(|row| mod26(row.iter().zip(vector).map(|(m, v)| m * v).sum()))
            .collect()
    }
}

fn det(rows: &[Vec<i32>]) -> i32 {
    match rows.len() {
        0 => 1,
        1 => rows[0][0],
        2 => rows[0][0] * rows[1][1] - rows[0][1] * rows[1][0],
        n => (0..n)
            .map(|j| {
                let sign = if j % 2 == 0 { 1 } else { -1 };
                sign * rows[0][j] * mod26(det(&minor(rows, 0, j)))
            })
            .sum(),
    }
}

fn minor(rows: &[Vec<i32>], skip_row: usize, skip_col: usize) -> Vec<Vec<i32>> {
    rows.iter()
        .enumerate()
        .filter(|(i, _)| *i != skip_row)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|(j, _)| *j != skip_col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn deserialize_rejects_non_square_rows() {
        for rows in [vec![], vec![vec![1, 2, 3], vec![4]], vec![vec![1, 2]]] {
            let bytes = bincode::serialize(&rows).unwrap();
            assert!(bincode::deserialize::<ModMatrix>(&bytes).is_err(), "{rows:?}");
        }
    }

    #[test]
    fn deserialize_reduces_entries() {
        let bytes = bincode::serialize(&vec![vec![29, -1], vec![0, 1]]).unwrap();
        let m: ModMatrix = bincode::deserialize(&bytes).unwrap();
        assert_eq!(m.rows(), &[vec![3, 25], vec![0, 1]]);
        assert_eq!(bincode::serialize(&m).unwrap(), bincode::serialize(m.rows()).unwrap());
    }

    #[test]
    fn determinant_2x2_closed_form() {
        let m = ModMatrix::from_rows(vec![vec![3, 3], vec![2, 5]]).unwrap();
        assert_eq!(m.determinant(), 9);
        assert!(m.is_invertible());
    }

    #[test]
    fn determinant_3x3_cofactor_expansion() {
        let m = ModMatrix::from_rows(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]])
            .unwrap();
        // 6(16·15−10·17) − 24(13·15−10·20) + 1(13·17−16·20) = 441 ≡ 25
        assert_eq!(m.determinant(), 25);
    }

    #[test]
    fn from_rows_rejects_non_square_input() {
        assert!(ModMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).is_none());
        assert!(ModMatrix::from_rows(Vec::new()).is_none());
    }

    #[test]
    fn random_invertible_has_coprime_determinant() {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        for n in [2, 3] {
            for _ in 0..64 {
                let m = ModMatrix::random_invertible(&mut rng, n);
                assert_eq!(m.size(), n);
                assert!(cipher_core::COPRIME_WITH_26.contains(&m.determinant()));
            }
        }
    }

    #[test]
    fn inversion_roundtrip() {
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        for n in [2, 3] {
            for _ in 0..64 {
                let m = ModMatrix::random_invertible(&mut rng, n);
                let inv = m.invert().expect("invertible");
                assert_eq!(inv.mul(&m), ModMatrix::identity(n));
                assert_eq!(m.mul(&inv), ModMatrix::identity(n));
            }
        }
    }

    #[test]
    fn apply_inverse_recovers_vector() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let m = ModMatrix::random_invertible(&mut rng, 3);
        let inv = m.invert().unwrap();
        let v = vec![7, 4, 11];
        assert_eq!(inv.apply(&m.apply(&v)), v);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = ModMatrix::from_rows(vec![vec![2, 4], vec![1, 2]]).unwrap();
        assert_eq!(m.determinant(), 0);
        assert!(m.invert().is_none());
        let even = ModMatrix::from_rows(vec![vec![2, 0], vec![0, 1]]).unwrap();
        assert!(even.invert().is_none());
    }
}
