use crate::quiz_engine::bank::QuestionBank;
use super::CountingTheme;

static THEMES: &[CountingTheme] = &[
    CountingTheme { id: "apel",      emoji: "🍎" },
    CountingTheme { id: "bintang",   emoji: "🌟" },
    CountingTheme { id: "balon",     emoji: "🎈" },
    CountingTheme { id: "kucing",    emoji: "🐱" },
    CountingTheme { id: "bunga",     emoji: "🌸" },
    CountingTheme { id: "pizza",     emoji: "🍕" },
    CountingTheme { id: "mobil",     emoji: "🚗" },
    CountingTheme { id: "hadiah",    emoji: "🎁" },
    CountingTheme { id: "pisang",    emoji: "🍌" },
    CountingTheme { id: "anjing",    emoji: "🐶" },
    CountingTheme { id: "bola",      emoji: "⚽" },
    CountingTheme { id: "kue",       emoji: "🎂" },
    CountingTheme { id: "es_krim",   emoji: "🍦" },
    CountingTheme { id: "kupu_kupu", emoji: "🦋" },
    CountingTheme { id: "pelangi",   emoji: "🌈" },
];

/// Visual tokens for addition: first addend, second addend.
pub const ADDITION_TOKENS: (&str, &str) = ("🔵", "🔴");

/// Visual tokens for subtraction: what is left, what was taken away.
pub const SUBTRACTION_TOKENS: (&str, &str) = ("⭐", "❌");

pub fn bank() -> QuestionBank<CountingTheme> {
    QuestionBank::new("counting_themes", THEMES)
}
