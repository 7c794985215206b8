//! Letter-by-letter answer scoring.

/// Letters graded and letters answered correctly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    /// Positions where the answer matches.
    pub correct: usize,
    /// Letters in the expected plaintext.
    pub total: usize,
}

impl Score {
    /// True when every letter matches.
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }

    /// Share of correct letters in `0.0..=1.0`; an empty puzzle counts as solved.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

fn letters(text: &str) -> Vec<char> {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// Compares the letters of `answer` against those of `expected`, position by
/// position. Case, spacing and punctuation are ignored.
pub fn score(expected: &str, answer: &str) -> Score {
    let expected = letters(expected);
    let answer = letters(answer);
    Score {
        correct: expected.iter().zip(&answer).filter(|(e, a)| e == a).count(),
        total: expected.len(),
    }
}
