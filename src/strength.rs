//! Password strength heuristics.
//!
//! A password earns one point for each of: at least 8 UTF-16 code units, an ASCII
//! uppercase letter, an ASCII digit, a character from
//! [`SYMBOLS`](crate::pass::charset::SYMBOLS). Lowercase letters earn
//! nothing. Four points is [`Verdict::Strong`], three is
//! [`Verdict::Medium`], anything less is [`Verdict::Weak`].

use std::fmt;

use crate::pass::charset::SYMBOLS;

/// Minimum length, in UTF-16 code units, that earns the length point.
pub const MIN_LENGTH: usize = 8;
/// Highest possible score.
pub const MAX_SCORE: u8 = 4;

/// Strength classification, ordered from weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Weak,
    Medium,
    Strong,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            4.. => Verdict::Strong,
            3 => Verdict::Medium,
            _ => Verdict::Weak,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Weak => "Weak",
            Verdict::Medium => "Medium",
            Verdict::Strong => "Strong",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw score in `0..=4`.
pub fn score(password: &str) -> u8 {
    let checks = [
        password.encode_utf16().count() >= MIN_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SYMBOLS.contains(c)),
    ];
    checks.into_iter().filter(|&passed| passed).count() as u8
}

/// Classify a password. Pure: the same input always gets the same verdict.
pub fn classify(password: &str) -> Verdict {
    Verdict::from_score(score(password))
}

/// Entropy in bits of `length` uniform draws from `pool_size` characters.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}
