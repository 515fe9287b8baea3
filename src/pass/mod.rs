//! Password generation.

pub mod charset;
mod generate;
mod password;

use rand::Rng;

pub use charset::{CharSet, Pool};
pub use generate::{
    SECURE_LENGTH, SIMPLE_LENGTH, draw_from_pool, generate_secure, generate_simple,
    generate_with_rules,
};
pub use password::Password;

use crate::error::Result;

/// A generation request: length plus the character sets to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Characters to generate. 0 is rejected.
    pub length: usize,
    /// Include `a-z` and `A-Z`.
    pub letters: bool,
    /// Include `0-9`.
    pub digits: bool,
    /// Include the fixed symbol set.
    pub symbols: bool,
}

impl Rules {
    pub fn new(length: usize, letters: bool, digits: bool, symbols: bool) -> Self {
        Self {
            length,
            letters,
            digits,
            symbols,
        }
    }

    pub fn pool(&self) -> Result<Pool> {
        Pool::new(self.letters, self.digits, self.symbols)
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Password> {
        generate_with_rules(rng, self.length, self.letters, self.digits, self.symbols)
    }
}

impl Default for Rules {
    /// Same shape as [`generate_secure`].
    fn default() -> Self {
        Self::new(SECURE_LENGTH, true, true, true)
    }
}
