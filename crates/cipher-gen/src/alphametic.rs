//! Column-wise backtracking solver for two-operand alphametics.

use std::collections::BTreeMap;

use crate::result::Operation;

/// Letter → digit assignment.
pub type Solution = BTreeMap<char, u8>;

struct Solver {
    /// Addend letters, least significant first.
    rows: [Vec<usize>; 2],
    /// Sum letters, least significant first.
    sum: Vec<usize>,
    width: usize,
    leading: [bool; 26],
    digit: [Option<u8>; 26],
    used: [bool; 10],
    found: Vec<[Option<u8>; 26]>,
    limit: usize,
}

fn indices(word: &str) -> Option<Vec<usize>> {
    word.chars()
        .rev()
        .map(|c| c.is_ascii_uppercase().then(|| (c as u8 - b'A') as usize))
        .collect()
}

impl Solver {
    fn new(a: &str, b: &str, c: &str, limit: usize) -> Option<Self> {
        let rows = [indices(a)?, indices(b)?];
        let sum = indices(c)?;
        if rows.iter().any(Vec::is_empty) || sum.is_empty() {
            return None;
        }
        let mut leading = [false; 26];
        for word in rows.iter().chain(std::iter::once(&sum)) {
            if let Some(&first) = word.last() {
                leading[first] = true;
            }
        }
        let width = rows[0].len().max(rows[1].len()).max(sum.len());
        Some(Self {
            rows,
            sum,
            width,
            leading,
            digit: [None; 26],
            used: [false; 10],
            found: Vec::new(),
            limit,
        })
    }

    fn done(&self) -> bool {
        self.found.len() >= self.limit
    }

    fn can_take(&self, letter: usize, d: u8) -> bool {
        !self.used[d as usize] && !(d == 0 && self.leading[letter])
    }

    fn set(&mut self, letter: usize, d: Option<u8>) {
        if let Some(old) = self.digit[letter] {
            self.used[old as usize] = false;
        }
        if let Some(new) = d {
            self.used[new as usize] = true;
        }
        self.digit[letter] = d;
    }

    fn search(&mut self, col: usize, carry: u32) {
        if self.done() {
            return;
        }
        if col == self.width {
            if carry == 0 {
                self.found.push(self.digit);
            }
            return;
        }
        let letters: Vec<usize> = self
            .rows
            .iter()
            .filter_map(|row| row.get(col).copied())
            .collect();
        self.assign(col, carry, &letters);
    }

    fn assign(&mut self, col: usize, carry: u32, pending: &[usize]) {
        let Some((&letter, rest)) = pending.split_first() else {
            self.settle(col, carry);
            return;
        };
        if self.digit[letter].is_some() {
            self.assign(col, carry, rest);
            return;
        }
        for d in 0..10u8 {
            if !self.can_take(letter, d) {
                continue;
            }
            self.set(letter, Some(d));
            self.assign(col, carry, rest);
            self.set(letter, None);
            if self.done() {
                return;
            }
        }
    }

    fn settle(&mut self, col: usize, carry: u32) {
        let total = carry
            + self
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|&l| u32::from(self.digit[l].unwrap_or(0)))
                .sum::<u32>();
        let d = (total % 10) as u8;
        let next = total / 10;
        match self.sum.get(col).copied() {
            None if d == 0 => self.search(col + 1, next),
            None => {}
            Some(letter) => match self.digit[letter] {
                Some(existing) if existing == d => self.search(col + 1, next),
                Some(_) => {}
                None if self.can_take(letter, d) => {
                    self.set(letter, Some(d));
                    self.search(col + 1, next);
                    self.set(letter, None);
                }
                None => {}
            },
        }
    }
}

/// Finds up to `limit` assignments satisfying `left op right = result`,
/// with distinct digits per letter and no leading zeros.
///
/// Words must be upper-case A–Z; anything else yields no solutions.
pub fn solutions(
    left: &str,
    right: &str,
    result: &str,
    operation: Operation,
    limit: usize,
) -> Vec<Solution> {
    let solver = match operation {
        Operation::Add => Solver::new(left, right, result, limit),
        // a - b = c  ⇔  b + c = a
        Operation::Subtract => Solver::new(right, result, left, limit),
    };
    let Some(mut solver) = solver else {
        return Vec::new();
    };
    if limit > 0 {
        solver.search(0, 0);
    }
    solver
        .found
        .into_iter()
        .map(|digits| {
            digits
                .iter()
                .enumerate()
                .filter_map(|(i, d)| d.map(|d| ((b'A' + i as u8) as char, d)))
                .collect()
        })
        .collect()
}

/// Number of solutions, counting at most `limit`.
pub fn count_solutions(
    left: &str,
    right: &str,
    result: &str,
    operation: Operation,
    limit: usize,
) -> usize {
    solutions(left, right, result, operation, limit).len()
}

/// Numeric value of `word` under `digits`, if every letter is mapped.
pub fn word_value(word: &str, digits: &Solution) -> Option<u64> {
    word.chars()
        .try_fold(0u64, |acc, c| Some(acc * 10 + u64::from(*digits.get(&c)?)))
}
