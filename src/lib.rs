//! Password generation from configurable character sets, plus a
//! heuristic strength classifier.
//!
//! Every generator takes the random source as a parameter so callers
//! decide where entropy comes from. Use [`rand::csprng`] for real
//! passwords and a seeded generator for reproducible output.
//!
//! ```
//! use passgen::{pass, rand, strength, Verdict};
//!
//! let mut rng = rand::csprng();
//! let password = pass::generate_with_rules(&mut rng, 16, true, true, true)?;
//! assert_eq!(password.len(), 16);
//!
//! assert_eq!(strength::classify("Abcdefg1!"), Verdict::Strong);
//! # Ok::<(), passgen::Error>(())
//! ```

mod error;
pub mod pass;
pub mod rand;
pub mod strength;

pub use error::{Error, Result};
pub use pass::{CharSet, Password, Pool, Rules};
pub use strength::Verdict;
