//! Cryptarithm consistency checks.

use std::collections::BTreeSet;

use cipher_gen::alphametic::word_value;
use cipher_gen::CryptarithmResult;

/// True when the puzzle's letter map is injective, gives every word a nonzero
/// leading digit, satisfies the equation, and agrees with every digit group.
pub fn verify_cryptarithm(result: &CryptarithmResult) -> bool {
    let digits = &result.letter_digits;
    let distinct: BTreeSet<u8> = digits.values().copied().collect();
    if distinct.len() != digits.len() || distinct.iter().any(|&d| d > 9) {
        return false;
    }

    let group_words: Vec<String> = result
        .digit_groups
        .iter()
        .map(|g| g.word.split_whitespace().collect())
        .collect();
    let words = [&result.left, &result.right, &result.result_word]
        .into_iter()
        .chain(group_words.iter());
    for word in words {
        match word.chars().next().and_then(|c| digits.get(&c)) {
            Some(&d) if d != 0 => {}
            _ => return false,
        }
    }

    let (Some(left), Some(right), Some(total)) = (
        word_value(&result.left, digits),
        word_value(&result.right, digits),
        word_value(&result.result_word, digits),
    ) else {
        return false;
    };
    if left < right && result.operation == cipher_gen::Operation::Subtract {
        return false;
    }
    if result.operation.apply(left, right) != total {
        return false;
    }

    result.digit_groups.iter().zip(&group_words).all(|(group, word)| {
        let expected: Vec<String> = word
            .chars()
            .filter_map(|c| digits.get(&c).map(u8::to_string))
            .collect();
        expected.len() == word.chars().count() && group.digits == expected.join(" ")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipher_gen::{DigitGroup, Operation};

    fn send_more_money() -> CryptarithmResult {
        let letter_digits = [
            ('S', 9),
            ('E', 5),
            ('N', 6),
            ('D', 7),
            ('M', 1),
            ('O', 0),
            ('R', 8),
            ('Y', 2),
        ]
        .into_iter()
        .collect();
        CryptarithmResult {
            encrypted_text: "Solve the cryptarithm.".into(),
            equation: String::new(),
            digit_groups: vec![
                DigitGroup {
                    digits: "1 0 6 5 2".into(),
                    word: "M O N E Y".into(),
                },
                DigitGroup {
                    digits: "7 0 8 5".into(),
                    word: "D O R E".into(),
                },
            ],
            operation: Operation::Add,
            left: "SEND".into(),
            right: "MORE".into(),
            result_word: "MONEY".into(),
            letter_digits,
            unique: true,
        }
    }

    #[test]
    fn classic_puzzle_verifies() {
        assert!(verify_cryptarithm(&send_more_money()));
    }

    #[test]
    fn wrong_sum_fails() {
        let mut puzzle = send_more_money();
        puzzle.operation = Operation::Subtract;
        assert!(!verify_cryptarithm(&puzzle));
    }

    #[test]
    fn duplicate_digit_fails() {
        let mut puzzle = send_more_money();
        puzzle.letter_digits.insert('Y', 9);
        assert!(!verify_cryptarithm(&puzzle));
    }

    #[test]
    fn leading_zero_value_word_fails() {
        let mut puzzle = send_more_money();
        puzzle.digit_groups.push(DigitGroup {
            digits: "0 7 5".into(),
            word: "O D E".into(),
        });
        assert!(!verify_cryptarithm(&puzzle));
    }

    #[test]
    fn mismatched_group_digits_fail() {
        let mut puzzle = send_more_money();
        puzzle.digit_groups[1].digits = "7 0 8 6".into();
        assert!(!verify_cryptarithm(&puzzle));
    }
}
