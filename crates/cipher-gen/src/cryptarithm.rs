//! Cryptarithm synthesis from a word bank.

use std::collections::{BTreeMap, BTreeSet};

use cipher_core::spaced;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::{debug, warn};

use crate::alphametic::{count_solutions, word_value};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::result::{CryptarithmResult, DigitGroup, Operation};
use crate::word_bank::WordBank;

/// Prompt shown with every cryptarithm.
pub const PROMPT: &str = "Solve the cryptarithm.";

const OPERAND_LEN: std::ops::RangeInclusive<usize> = 3..=8;
const VALUE_WORDS: usize = 3;
const MIN_VALUE_LEN: usize = 4;
const ADDITION_PROBABILITY: f64 = 0.7;

type Digits = BTreeMap<char, u8>;

/// Builds a cryptarithm from `bank`, retrying within the configured budget.
pub fn generate<R: RngCore>(
    rng: &mut R,
    bank: &WordBank,
    config: &GeneratorConfig,
) -> GenerateResult<CryptarithmResult> {
    let mut reason = "no attempt made";
    for round in 0..config.cryptarithm_rounds {
        for _ in 0..config.cryptarithm_attempts {
            match attempt(rng, bank, config.require_unique_cryptarithm) {
                Ok(result) => return Ok(result),
                Err(why) => reason = why,
            }
        }
        debug!(round, reason, "cryptarithm round exhausted");
    }
    let attempts = config.cryptarithm_rounds * config.cryptarithm_attempts;
    warn!(attempts, reason, words = bank.len(), "cryptarithm generation failed");
    Err(GenerateError::GenerationFailed { attempts, reason })
}

fn unique_letters<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<char> {
    let mut letters = Vec::new();
    for c in words.into_iter().flat_map(str::chars) {
        if !letters.contains(&c) {
            letters.push(c);
        }
    }
    letters
}

/// Gives every leading letter a nonzero digit first, then the rest of the
/// letters, all drawn from one shuffled digit list.
fn assign_digits<R: RngCore>(rng: &mut R, letters: &[char], leading: &[char]) -> Option<Digits> {
    let mut shuffled: Vec<u8> = (0..10).collect();
    shuffled.shuffle(rng);
    let mut digits = Digits::new();
    let mut next = 0;
    for &lead in leading {
        let idx = (next..shuffled.len()).find(|&i| shuffled[i] != 0)?;
        shuffled.swap(next, idx);
        digits.insert(lead, shuffled[next]);
        next += 1;
    }
    for &letter in letters {
        if digits.contains_key(&letter) {
            continue;
        }
        digits.insert(letter, *shuffled.get(next)?);
        next += 1;
    }
    leading
        .iter()
        .all(|l| digits.get(l) != Some(&0))
        .then_some(digits)
}

/// First candidate (in random order) whose letters agree with `result`:
/// known digits must show their letter, new digits need one fresh letter each.
fn compatible_result_word<'a, R: RngCore>(
    rng: &mut R,
    result: &str,
    digits: &Digits,
    candidates: &'a [String],
) -> Option<&'a str> {
    let known: BTreeMap<u8, char> = digits.iter().map(|(&l, &d)| (d, l)).collect();
    let mut order: Vec<&String> = candidates.iter().collect();
    order.shuffle(rng);
    order
        .into_iter()
        .find(|candidate| {
            if candidate.len() != result.len() {
                return false;
            }
            let mut fresh: BTreeMap<u8, char> = BTreeMap::new();
            let mut taken: BTreeSet<char> = digits.keys().copied().collect();
            result.bytes().zip(candidate.chars()).all(|(d, letter)| {
                let d = d - b'0';
                if let Some(&expected) = known.get(&d) {
                    return letter == expected;
                }
                match fresh.get(&d) {
                    Some(&seen) => seen == letter,
                    None => {
                        fresh.insert(d, letter);
                        taken.insert(letter)
                    }
                }
            })
        })
        .map(String::as_str)
}

/// Adds the result word's letters to `digits`; `None` on any contradiction
/// or a zero leading digit.
fn extend_with_result(digits: &mut Digits, word: &str, result: &str) -> Option<()> {
    for (i, (letter, d)) in word.chars().zip(result.bytes()).enumerate() {
        let d = d - b'0';
        match digits.get(&letter) {
            Some(&existing) if existing != d => return None,
            Some(_) => continue,
            None => {
                if digits.values().any(|&v| v == d) || (i == 0 && d == 0) {
                    return None;
                }
                digits.insert(letter, d);
            }
        }
    }
    (digits.get(&word.chars().next()?) != Some(&0)).then_some(())
}

fn digit_group(word: &str, digits: &Digits) -> DigitGroup {
    let shown: Vec<String> = word
        .chars()
        .map(|c| digits.get(&c).map_or_else(|| "?".into(), u8::to_string))
        .collect();
    DigitGroup {
        digits: shown.join(" "),
        word: spaced(word),
    }
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{s:>width$}")
}

/// Right-aligned vertical layout with a dash rule before the result.
pub fn format_equation(left: &str, right: &str, result: &str, operation: Operation) -> String {
    let (a, b, r) = (spaced(left), spaced(right), spaced(result));
    let width = a.len().max(b.len()).max(r.len());
    [
        format!("  {}", pad_left(&a, width)),
        format!("{} {}", operation.symbol(), pad_left(&b, width)),
        "-".repeat(width + 2),
        format!("  {}", pad_left(&r, width)),
    ]
    .join("\n")
}

fn attempt<R: RngCore>(
    rng: &mut R,
    bank: &WordBank,
    require_unique: bool,
) -> Result<CryptarithmResult, &'static str> {
    let a = bank.choose(rng).to_string();
    let b = bank.choose(rng).to_string();
    if a == b {
        return Err("operands must differ");
    }
    if !OPERAND_LEN.contains(&a.len()) || !OPERAND_LEN.contains(&b.len()) {
        return Err("operand length out of range");
    }
    let letters = unique_letters([a.as_str(), b.as_str()]);
    if letters.len() > 10 {
        return Err("more than ten distinct letters");
    }
    let leading = unique_letters([&a[..1], &b[..1]]);
    let mut digits = assign_digits(rng, &letters, &leading).ok_or("no digit assignment")?;
    let num_a = word_value(&a, &digits).ok_or("unmapped operand letter")?;
    let num_b = word_value(&b, &digits).ok_or("unmapped operand letter")?;

    let (operation, left, right, total) = if rng.gen_bool(ADDITION_PROBABILITY) {
        (Operation::Add, a, b, num_a + num_b)
    } else if num_a == num_b {
        return Err("equal operands cannot be subtracted");
    } else if num_a < num_b {
        (Operation::Subtract, b, a, num_b - num_a)
    } else {
        (Operation::Subtract, a, b, num_a - num_b)
    };
    let result_digits = total.to_string();

    let result_word = compatible_result_word(rng, &result_digits, &digits, bank.words())
        .ok_or("no compatible result word")?
        .to_string();
    if result_word == left || result_word == right {
        return Err("result word repeats an operand");
    }
    extend_with_result(&mut digits, &result_word, &result_digits)
        .ok_or("result word contradicts the mapping")?;

    let unique_limit = 2;
    let unique =
        count_solutions(&left, &right, &result_word, operation, unique_limit) == 1;
    if require_unique && !unique {
        return Err("equation has more than one solution");
    }

    let mut values: Vec<&str> = bank
        .words()
        .iter()
        .map(String::as_str)
        .filter(|w| {
            w.len() >= MIN_VALUE_LEN
                && *w != left
                && *w != right
                && *w != result_word
                && w.chars().all(|c| digits.contains_key(&c))
                && w.chars().next().and_then(|c| digits.get(&c)) != Some(&0)
        })
        .collect();
    values.sort_unstable();
    values.dedup();
    values.shuffle(rng);
    values.truncate(VALUE_WORDS);
    if values.len() < VALUE_WORDS {
        return Err("not enough value words");
    }

    let mut digit_groups = vec![digit_group(&result_word, &digits)];
    digit_groups.extend(values.iter().map(|w| digit_group(w, &digits)));

    Ok(CryptarithmResult {
        encrypted_text: PROMPT.to_string(),
        equation: format_equation(&left, &right, &result_word, operation),
        digit_groups,
        operation,
        left,
        right,
        result_word,
        letter_digits: digits,
        unique,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Small bank built around SEND + MORE = MONEY.
    fn money_bank() -> WordBank {
        WordBank::from_words([
            "SEND", "MORE", "MONEY", "MEND", "DOME", "NODE", "DRONE", "SNORE", "YOND", "ONES",
            "DOES", "NOSE", "MOSEY", "REDO", "DENY", "ROSY", "MODE", "SOME",
        ])
    }

    #[test]
    fn equation_layout() {
        assert_eq!(
            format_equation("SEND", "MORE", "MONEY", Operation::Add),
            "    S E N D\n+   M O R E\n-----------\n  M O N E Y"
        );
    }

    #[test]
    fn leading_letters_get_nonzero_digits() {
        let mut rng = ChaCha20Rng::from_seed([61u8; 32]);
        for _ in 0..200 {
            let digits = assign_digits(&mut rng, &['A', 'B', 'C', 'D'], &['A', 'C']).unwrap();
            assert_ne!(digits[&'A'], 0);
            assert_ne!(digits[&'C'], 0);
            let distinct: BTreeSet<u8> = digits.values().copied().collect();
            assert_eq!(distinct.len(), 4);
        }
    }

    #[test]
    fn result_word_must_agree_with_known_digits() {
        let digits: Digits = [('A', 1), ('B', 2)].into_iter().collect();
        let candidates = vec!["BAX".to_string(), "BAA".to_string(), "ABX".to_string()];
        let mut rng = ChaCha20Rng::from_seed([62u8; 32]);
        // 213: B A then a fresh letter, which cannot be A or B.
        assert_eq!(
            compatible_result_word(&mut rng, "213", &digits, &candidates),
            Some("BAX")
        );
        assert_eq!(compatible_result_word(&mut rng, "2133", &digits, &candidates), None);
    }

    #[test]
    fn generated_puzzle_is_consistent() {
        let mut rng = ChaCha20Rng::from_seed([63u8; 32]);
        let bank = money_bank();
        let config = GeneratorConfig {
            cryptarithm_rounds: 25,
            ..GeneratorConfig::default()
        };
        let result = generate(&mut rng, &bank, &config).unwrap();
        let d = &result.letter_digits;
        let left = word_value(&result.left, d).unwrap();
        let right = word_value(&result.right, d).unwrap();
        let total = word_value(&result.result_word, d).unwrap();
        match result.operation {
            Operation::Add => assert_eq!(left + right, total),
            Operation::Subtract => assert_eq!(left - right, total),
        }
        let distinct: BTreeSet<u8> = d.values().copied().collect();
        assert_eq!(distinct.len(), d.len());
        for word in [&result.left, &result.right, &result.result_word] {
            assert_ne!(d[&word.chars().next().unwrap()], 0);
        }
        assert_eq!(result.digit_groups.len(), 4);
        assert_eq!(result.digit_groups[0].word, spaced(&result.result_word));
        assert_eq!(result.encrypted_text, PROMPT);
    }

    #[test]
    fn degenerate_bank_fails_after_budget() {
        let mut rng = ChaCha20Rng::from_seed([64u8; 32]);
        let bank = WordBank::from_words(["AB", "CD"]);
        let config = GeneratorConfig {
            cryptarithm_attempts: 10,
            cryptarithm_rounds: 2,
            ..GeneratorConfig::default()
        };
        let err = generate(&mut rng, &bank, &config).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::GenerationFailed { attempts: 20, .. }
        ));
    }

    #[test]
    fn unique_requirement_yields_single_solution_equations() {
        let bank = money_bank();
        let config = GeneratorConfig {
            cryptarithm_rounds: 40,
            require_unique_cryptarithm: true,
            ..GeneratorConfig::default()
        };
        let mut generated = 0;
        for seed in 70u8..76 {
            let mut rng = ChaCha20Rng::from_seed([seed; 32]);
            let result = match generate(&mut rng, &bank, &config) {
                Ok(result) => result,
                Err(GenerateError::GenerationFailed { .. }) => continue,
                Err(err) => panic!("seed {seed}: {err}"),
            };
            assert!(result.unique, "seed {seed}");
            assert_eq!(
                count_solutions(
                    &result.left,
                    &result.right,
                    &result.result_word,
                    result.operation,
                    2
                ),
                1,
                "seed {seed}"
            );
            generated += 1;
        }
        assert!(generated > 0);
    }
}
