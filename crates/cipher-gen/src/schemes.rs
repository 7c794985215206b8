//! Baconian rendering schemes and the weighted scheme draw.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::result::{Glyph, TextStyle};

/// Scheme family. Families are drawn by weight, schemes uniformly within one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// A/B text and letter-class schemes.
    Traditional,
    /// Emoji sets.
    Emoji,
    /// Single-symbol pairs.
    Symbols,
    /// Same letters, different styling.
    Formatting,
}

impl Category {
    /// All categories in draw order.
    pub const ALL: [Category; 4] = [
        Category::Traditional,
        Category::Emoji,
        Category::Symbols,
        Category::Formatting,
    ];

    /// Probability of drawing this category.
    pub const fn weight(self) -> f64 {
        match self {
            Category::Traditional => 0.6,
            Category::Emoji => 0.15,
            Category::Symbols => 0.15,
            Category::Formatting => 0.1,
        }
    }
}

/// How a scheme turns a bit into a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Render {
    /// Fixed text per bit.
    Direct {
        /// Glyph for an `A` bit.
        zero: &'static str,
        /// Glyph for a `B` bit.
        one: &'static str,
    },
    /// Random letter from the bit's letter class.
    Letters {
        /// Letters standing for `A`.
        zero: &'static str,
        /// Letters standing for `B`.
        one: &'static str,
    },
    /// Random member of the bit's symbol set.
    Set {
        /// Symbols standing for `A`.
        zero: &'static [&'static str],
        /// Symbols standing for `B`.
        one: &'static [&'static str],
    },
    /// Random letter; only the style carries the bit.
    Formatting {
        /// Style of an `A` bit.
        zero: TextStyle,
        /// Style of a `B` bit.
        one: TextStyle,
    },
}

/// A named rendering scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheme {
    /// Display name, reported as the Baconian `binary_type`.
    pub name: &'static str,
    /// Family the scheme belongs to.
    pub category: Category,
    /// Short human description.
    pub description: &'static str,
    /// Bit rendering rule.
    pub render: Render,
}

impl Scheme {
    /// Reads the bit carried by `glyph`: `Some(false)` for `A`, `Some(true)`
    /// for `B`, `None` if the glyph does not belong to this scheme.
    pub fn classify(&self, glyph: &Glyph) -> Option<bool> {
        let text = glyph.text.as_str();
        match self.render {
            Render::Direct { zero, one } => pick(text == zero, text == one),
            Render::Letters { zero, one } => {
                let mut chars = text.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                pick(zero.contains(c), one.contains(c))
            }
            Render::Set { zero, one } => pick(zero.contains(&text), one.contains(&text)),
            Render::Formatting { zero, one } => pick(glyph.style == zero, glyph.style == one),
        }
    }
}

fn pick(is_zero: bool, is_one: bool) -> Option<bool> {
    match (is_zero, is_one) {
        (true, false) => Some(false),
        (false, true) => Some(true),
        _ => None,
    }
}

const CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXYZ";

/// Every known scheme.
pub const SCHEMES: &[Scheme] = &[
    Scheme {
        name: "A/B",
        category: Category::Traditional,
        description: "Traditional A and B representation",
        render: Render::Direct { zero: "A", one: "B" },
    },
    Scheme {
        name: "Vowels/Consonants",
        category: Category::Traditional,
        description: "Vowels for A, consonants for B",
        render: Render::Letters {
            zero: "AEIOU",
            one: CONSONANTS,
        },
    },
    Scheme {
        name: "Odd/Even",
        category: Category::Traditional,
        description: "Odd-positioned letters for A, even for B",
        render: Render::Letters {
            zero: "ACEGIKMOQSUWY",
            one: "BDFHJLNPRTVXZ",
        },
    },
    Scheme {
        name: "Happy vs Sad",
        category: Category::Emoji,
        description: "Happy emojis for A, sad for B",
        render: Render::Set {
            zero: &["😊", "😄", "😃", "😁", "😆", "😅", "😂", "🤣", "😉", "😋"],
            one: &["😞", "😔", "😟", "😕", "🙁", "☹️", "😣", "😖", "😫", "😩"],
        },
    },
    Scheme {
        name: "Fire vs Ice",
        category: Category::Emoji,
        description: "Fire emojis for A, ice for B",
        render: Render::Set {
            zero: &["🔥", "🌋", "☀️", "⚡", "💥", "🌡️"],
            one: &["❄️", "🧊", "🌨️", "💎", "🔮", "🌊"],
        },
    },
    Scheme {
        name: "Day vs Night",
        category: Category::Emoji,
        description: "Day emojis for A, night for B",
        render: Render::Set {
            zero: &["☀️", "🌅", "🌞", "🌤️", "🌻", "🐦"],
            one: &["🌙", "⭐", "🌃", "🌌", "🦉", "🦇"],
        },
    },
    Scheme {
        name: "Land vs Sea",
        category: Category::Emoji,
        description: "Land emojis for A, sea for B",
        render: Render::Set {
            zero: &["🏔️", "🌲", "🦁", "🐻", "🌵", "🏜️"],
            one: &["🌊", "🐋", "🐙", "🦈", "🏝️", "⚓"],
        },
    },
    Scheme {
        name: "Tech vs Nature",
        category: Category::Emoji,
        description: "Tech emojis for A, nature for B",
        render: Render::Set {
            zero: &["💻", "📱", "🤖", "🚀", "⚡", "🔋"],
            one: &["🌿", "🌸", "🦋", "🌳", "🍃", "🌺"],
        },
    },
    Scheme {
        name: "Sweet vs Spicy",
        category: Category::Emoji,
        description: "Sweet emojis for A, spicy for B",
        render: Render::Set {
            zero: &["🍰", "🍭", "🍫", "🍪", "🍦", "🍯"],
            one: &["🌶️", "🔥", "💥", "⚡", "🌋", "💣"],
        },
    },
    Scheme {
        name: "Fast vs Slow",
        category: Category::Emoji,
        description: "Fast emojis for A, slow for B",
        render: Render::Set {
            zero: &["🏃", "🚀", "⚡", "💨", "🏎️", "🦅"],
            one: &["🐌", "🐢", "🦥", "🌱", "⏰", "🕰️"],
        },
    },
    Scheme {
        name: "Loud vs Quiet",
        category: Category::Emoji,
        description: "Loud emojis for A, quiet for B",
        render: Render::Set {
            zero: &["🔊", "📢", "🎵", "💥", "⚡", "🌋"],
            one: &["🔇", "🤫", "🦋", "🍃", "🌙", "💤"],
        },
    },
    Scheme {
        name: "Hot vs Cold",
        category: Category::Emoji,
        description: "Hot emojis for A, cold for B",
        render: Render::Set {
            zero: &["🔥", "🌡️", "☀️", "🌋", "💥", "⚡"],
            one: &["❄️", "🧊", "🌨️", "💎", "🔮", "🌊"],
        },
    },
    Scheme {
        name: "Thick vs Thin",
        category: Category::Symbols,
        description: "Thick block for A, thin for B",
        render: Render::Direct { zero: "█", one: "░" },
    },
    Scheme {
        name: "Brackets vs Parentheses",
        category: Category::Symbols,
        description: "Square brackets for A, parentheses for B",
        render: Render::Direct { zero: "[", one: "(" },
    },
    Scheme {
        name: "Hash vs At",
        category: Category::Symbols,
        description: "Hash for A, at symbol for B",
        render: Render::Direct { zero: "#", one: "@" },
    },
    Scheme {
        name: "Plus vs Minus",
        category: Category::Symbols,
        description: "Plus for A, minus for B",
        render: Render::Direct { zero: "+", one: "-" },
    },
    Scheme {
        name: "Arrow Up vs Down",
        category: Category::Symbols,
        description: "Up arrow for A, down for B",
        render: Render::Direct { zero: "↑", one: "↓" },
    },
    Scheme {
        name: "Star vs Heart",
        category: Category::Symbols,
        description: "Star for A, heart for B",
        render: Render::Direct { zero: "★", one: "♥" },
    },
    Scheme {
        name: "Underline vs Plain",
        category: Category::Formatting,
        description: "Underlined letters for A, plain for B",
        render: Render::Formatting {
            zero: TextStyle::Underline,
            one: TextStyle::Plain,
        },
    },
    Scheme {
        name: "Bold vs Italic",
        category: Category::Formatting,
        description: "Bold letters for A, italic for B",
        render: Render::Formatting {
            zero: TextStyle::Bold,
            one: TextStyle::Italic,
        },
    },
    Scheme {
        name: "Strikethrough vs Normal",
        category: Category::Formatting,
        description: "Strikethrough letters for A, normal for B",
        render: Render::Formatting {
            zero: TextStyle::Strikethrough,
            one: TextStyle::Plain,
        },
    },
    Scheme {
        name: "Highlight vs Plain",
        category: Category::Formatting,
        description: "Highlighted letters for A, plain for B",
        render: Render::Formatting {
            zero: TextStyle::Highlight,
            one: TextStyle::Plain,
        },
    },
    Scheme {
        name: "Accented vs Plain",
        category: Category::Formatting,
        description: "Accented letters for A, plain for B",
        render: Render::Formatting {
            zero: TextStyle::Accented,
            one: TextStyle::Plain,
        },
    },
    Scheme {
        name: "Uppercase vs Lowercase",
        category: Category::Formatting,
        description: "Uppercase letters for A, lowercase for B",
        render: Render::Formatting {
            zero: TextStyle::Uppercase,
            one: TextStyle::Lowercase,
        },
    },
];

/// Schemes of one category, in catalogue order.
pub fn schemes_in(category: Category) -> impl Iterator<Item = &'static Scheme> {
    SCHEMES.iter().filter(move |s| s.category == category)
}

/// Looks a scheme up by its display name.
pub fn scheme_named(name: &str) -> Option<&'static Scheme> {
    SCHEMES.iter().find(|s| s.name == name)
}

/// Draws a category by weight, then a scheme uniformly within it.
pub fn select_scheme<R: RngCore>(rng: &mut R) -> &'static Scheme {
    let category = Category::ALL
        .choose_weighted(rng, |c| c.weight())
        .copied()
        .unwrap_or(Category::Traditional);
    let candidates: Vec<&'static Scheme> = schemes_in(category).collect();
    candidates.choose(rng).copied().unwrap_or(&SCHEMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashMap;

    #[test]
    fn catalogue_has_every_category() {
        for category in Category::ALL {
            assert!(schemes_in(category).next().is_some(), "{category:?}");
        }
        let total: f64 = Category::ALL.iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_and_one_sets_are_disjoint() {
        for scheme in SCHEMES {
            match scheme.render {
                Render::Direct { zero, one } => assert_ne!(zero, one, "{}", scheme.name),
                Render::Letters { zero, one } => {
                    assert!(zero.chars().all(|c| !one.contains(c)), "{}", scheme.name)
                }
                Render::Set { zero, one } => {
                    assert!(zero.iter().all(|z| !one.contains(z)), "{}", scheme.name)
                }
                Render::Formatting { zero, one } => assert_ne!(zero, one, "{}", scheme.name),
            }
        }
    }

    #[test]
    fn names_are_unique_and_resolvable() {
        for scheme in SCHEMES {
            assert_eq!(scheme_named(scheme.name), Some(scheme));
        }
        assert!(scheme_named("Morse").is_none());
    }

    #[test]
    fn draw_favors_traditional() {
        let mut rng = ChaCha20Rng::from_seed([31u8; 32]);
        let mut counts: HashMap<Category, usize> = HashMap::new();
        for _ in 0..2000 {
            *counts.entry(select_scheme(&mut rng).category).or_default() += 1;
        }
        let traditional = counts[&Category::Traditional];
        assert!((1000..1400).contains(&traditional), "{traditional}");
        assert!(counts[&Category::Formatting] > 100);
    }
}
