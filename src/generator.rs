//! Random password generator.
//!
//! Output always holds at least one character of every [`CharClass`], so it
//! collects the full variety score. The default source is `rand::thread_rng`,
//! which is fine for practice passwords; do not rely on this module for real
//! credentials.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use thiserror::Error;

use crate::policy::{CharClass, PasswordPolicy};

pub const DEFAULT_LENGTH: usize = 12;

/// One character per mandatory class.
pub const MIN_GENERATED_LENGTH: usize = CharClass::ALL.len();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {length} is too short: at least {minimum} characters are required")]
    InvalidArgument { length: usize, minimum: usize },
}

/// Generates a random password of `length` characters.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidArgument`] when `length` is below
/// [`MIN_GENERATED_LENGTH`].
pub fn generate_password(length: usize) -> Result<SecretString, GeneratorError> {
    generate_password_with_rng(length, PasswordPolicy::builtin(), &mut rand::thread_rng())
}

/// Generates a password from `policy`'s alphabets using `rng`.
///
/// One character is drawn from each class, the rest uniformly from all
/// classes combined, then the whole sequence is shuffled.
pub fn generate_password_with_rng<R: Rng + ?Sized>(
    length: usize,
    policy: &PasswordPolicy,
    rng: &mut R,
) -> Result<SecretString, GeneratorError> {
    if length < MIN_GENERATED_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::warn!(length, "rejected password generation request");
        return Err(GeneratorError::InvalidArgument {
            length,
            minimum: MIN_GENERATED_LENGTH,
        });
    }

    let mut password: Vec<char> = CharClass::ALL
        .iter()
        .map(|class| pick(class.alphabet(), &mut *rng))
        .collect();

    let pool: Vec<char> = policy.full_alphabet().chars().collect();
    password.extend((MIN_GENERATED_LENGTH..length).map(|_| pool[rng.gen_range(0..pool.len())]));

    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "password generated");

    Ok(SecretString::new(password.into_iter().collect::<String>().into()))
}

fn pick<R: Rng + ?Sized>(alphabet: &str, rng: &mut R) -> char {
    let bytes = alphabet.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}
