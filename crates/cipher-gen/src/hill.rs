//! Hill ciphers over 2×2 and 3×3 key matrices.

use cipher_core::clean_letters;
use rand::RngCore;

use crate::blocks::chunk;
use crate::matrix::ModMatrix;
use crate::result::MatrixResult;

/// Encrypts the letters of `text` with `matrix`, padding with `X` to a
/// multiple of the matrix size. Each n-gram becomes `matrix · vector (mod 26)`.
pub fn encrypt_with_matrix(text: &str, matrix: &ModMatrix) -> String {
    let n = matrix.size();
    let mut values: Vec<i32> = clean_letters(text)
        .bytes()
        .map(|b| i32::from(b - b'A'))
        .collect();
    while values.len() % n != 0 {
        values.push(i32::from(b'X' - b'A'));
    }
    values
        .chunks(n)
        .flat_map(|block| matrix.apply(block))
        .map(|v| char::from(b'A' + v as u8))
        .collect()
}

/// 2×2 Hill: only the encryption matrix is published.
pub fn encrypt_2x2<R: RngCore>(rng: &mut R, text: &str) -> MatrixResult {
    let matrix = ModMatrix::random_invertible(rng, 2);
    let encrypted_text = encrypt_with_matrix(text, &matrix);
    MatrixResult {
        encrypted_text,
        matrix,
        decryption_matrix: None,
    }
}

/// 3×3 Hill: the decryption matrix is pre-computed for the solver and the
/// ciphertext is chunked into groups of `group` letters.
pub fn encrypt_3x3<R: RngCore>(rng: &mut R, text: &str, group: usize) -> MatrixResult {
    let matrix = ModMatrix::random_invertible(rng, 3);
    let decryption_matrix = matrix.invert();
    let encrypted_text = chunk(&encrypt_with_matrix(text, &matrix), group);
    MatrixResult {
        encrypted_text,
        matrix,
        decryption_matrix,
    }
}
