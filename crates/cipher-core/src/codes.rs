//! Fixed Morse and Baconian code tables.

const MORSE: [&str; 26] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..", "--",
    "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..",
];

/// 24-symbol Baconian table: I/J share a pattern, as do U/V.
const BACON: [&str; 26] = [
    "AAAAA", "AAAAB", "AAABA", "AAABB", "AABAA", "AABAB", "AABBA", "AABBB", "ABAAA", "ABAAA",
    "ABAAB", "ABABA", "ABABB", "ABBAA", "ABBAB", "ABBBA", "ABBBB", "BAAAA", "BAAAB", "BAABA",
    "BAABB", "BAABB", "BABAA", "BABAB", "BABBA", "BABBB",
];

fn latin_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

/// International Morse code for an upper-case Latin letter.
pub fn morse_code(letter: char) -> Option<&'static str> {
    latin_index(letter).map(|i| MORSE[i])
}

/// Reverse Morse lookup.
pub fn morse_letter(code: &str) -> Option<char> {
    MORSE
        .iter()
        .position(|&m| m == code)
        .map(|i| (b'A' + i as u8) as char)
}

/// Five-symbol A/B Baconian pattern for an upper-case Latin letter.
pub fn bacon_pattern(letter: char) -> Option<&'static str> {
    latin_index(letter).map(|i| BACON[i])
}

/// Reverse Baconian lookup. Shared patterns decode to I and U.
pub fn bacon_letter(pattern: &str) -> Option<char> {
    BACON
        .iter()
        .position(|&p| p == pattern)
        .map(|i| (b'A' + i as u8) as char)
}
