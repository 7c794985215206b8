//! Plaintext cleaning helpers.

/// Upper-cases `text` and keeps only the letters A–Z.
pub fn clean_letters(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Upper-cases `text` and folds Spanish accented vowels onto their base
/// letter. Ñ and every non-letter are kept as-is.
pub fn normalize_spanish(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .map(|c| match c {
            'Á' => 'A',
            'É' => 'E',
            'Í' => 'I',
            'Ó' => 'O',
            'Ú' | 'Ü' => 'U',
            other => other,
        })
        .collect()
}

/// Joins the characters of `word` with single spaces (`"ABC"` → `"A B C"`).
pub fn spaced(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
