//! Arithmetic over the integers modulo 26.

/// The twelve residues that are coprime with 26, in ascending order.
pub const COPRIME_WITH_26: [i32; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

/// Reduces `n` into `0..26` using floored modulo, so negative inputs wrap.
#[inline]
pub const fn mod26(n: i32) -> i32 {
    n.rem_euclid(26)
}

/// Returns true if `n mod 26` is invertible.
pub fn is_coprime_with_26(n: i32) -> bool {
    COPRIME_WITH_26.contains(&mod26(n))
}

/// Finds `d` in `1..26` with `a * d ≡ 1 (mod 26)` by linear scan.
///
/// Returns `None` when `a` shares a factor with 26.
pub fn mod_inverse(a: i32) -> Option<i32> {
    let a = mod26(a);
    (1..26).find(|&d| mod26(a * d) == 1)
}
