//! Password generation.

use rand::Rng;

use super::charset::Pool;
use super::password::Password;
use crate::error::{Error, Result};

/// Length of [`generate_simple`] passwords.
pub const SIMPLE_LENGTH: usize = 8;
/// Length of [`generate_secure`] passwords.
pub const SECURE_LENGTH: usize = 12;

/// Letters only, 8 characters.
pub fn generate_simple<R: Rng + ?Sized>(rng: &mut R) -> Password {
    draw_from_pool(rng, Pool::simple(), SIMPLE_LENGTH)
}

/// Letters, digits and symbols, 12 characters.
pub fn generate_secure<R: Rng + ?Sized>(rng: &mut R) -> Password {
    draw_from_pool(rng, Pool::secure(), SECURE_LENGTH)
}

/// Generate a password of `length` from the selected character sets.
///
/// Fails with [`Error::InvalidArgument`] when `length` is 0 or when no set
/// is selected. The length is checked first.
pub fn generate_with_rules<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    letters: bool,
    digits: bool,
    symbols: bool,
) -> Result<Password> {
    if length == 0 {
        return Err(Error::ZERO_LENGTH);
    }
    let pool = Pool::new(letters, digits, symbols)?;
    Ok(draw_from_pool(rng, &pool, length))
}

/// Draw `length` characters from `pool`, independently and with
/// replacement, concatenated in draw order.
///
/// Consumes one `gen_range` per position and nothing else, so a replayed
/// RNG yields the same password.
pub fn draw_from_pool<R: Rng + ?Sized>(rng: &mut R, pool: &Pool, length: usize) -> Password {
    let chars = pool.chars();
    let password: String = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    Password::new(password)
}
