//! Character sets and pool assembly.

use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::strength;

/// Lowercase then uppercase ASCII letters.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII digits.
pub const DIGITS: &str = "0123456789";
/// Fixed symbol set. Membership is literal; `-` is not a range.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

static SIMPLE: LazyLock<Pool> = LazyLock::new(|| Pool {
    chars: LETTERS.chars().collect(),
});

static SECURE: LazyLock<Pool> = LazyLock::new(|| Pool {
    chars: CharSet::ALL
        .into_iter()
        .flat_map(|set| set.chars().chars())
        .collect(),
});

/// Named subset of the pool, in the order pools are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharSet {
    Letters,
    Digits,
    Symbols,
}

impl CharSet {
    /// Every set, in assembly order.
    pub const ALL: [CharSet; 3] = [CharSet::Letters, CharSet::Digits, CharSet::Symbols];

    pub fn chars(self) -> &'static str {
        match self {
            CharSet::Letters => LETTERS,
            CharSet::Digits => DIGITS,
            CharSet::Symbols => SYMBOLS,
        }
    }
}

/// Ordered, non-empty sequence of characters eligible for a draw.
///
/// Subsets are concatenated, not weighted: each character in the pool is
/// equally likely, so larger subsets dominate draws in proportion to size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    chars: Vec<char>,
}

impl Pool {
    /// Build the pool from the selected subsets (letters, digits, symbols).
    pub fn new(letters: bool, digits: bool, symbols: bool) -> Result<Self> {
        let selected: Vec<CharSet> = CharSet::ALL
            .into_iter()
            .zip([letters, digits, symbols])
            .filter_map(|(set, on)| on.then_some(set))
            .collect();
        Self::from_sets(&selected)
    }

    /// Build the pool from subsets. Order is normalised and duplicates are
    /// ignored, so `[Symbols, Letters, Letters]` equals `[Letters, Symbols]`.
    pub fn from_sets(sets: &[CharSet]) -> Result<Self> {
        let chars: Vec<char> = CharSet::ALL
            .into_iter()
            .filter(|set| sets.contains(set))
            .flat_map(|set| set.chars().chars())
            .collect();

        if chars.is_empty() {
            return Err(Error::EMPTY_POOL);
        }
        Ok(Self { chars })
    }

    /// Letters only (52 characters). Built once, shared afterwards.
    pub fn simple() -> &'static Pool {
        &SIMPLE
    }

    /// Letters, digits and symbols (87 characters). Built once, shared afterwards.
    pub fn secure() -> &'static Pool {
        &SECURE
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never true for a constructed pool.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Entropy in bits of a password of `length` drawn from this pool.
    pub fn entropy_bits(&self, length: usize) -> f64 {
        strength::entropy_bits(length, self.len())
    }
}
