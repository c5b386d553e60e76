//! Password generation.

use rand::Rng;
use rand::rngs::OsRng;

/// The 70-character password alphabet: letters, digits, and `!@#$%^&*`.
pub const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Password length used when the caller does not supply one.
pub const DEFAULT_PASSWORD_LEN: usize = 16;

/// Generate a password of `length` characters drawn uniformly from
/// [`PASSWORD_ALPHABET`] using the OS entropy source.
///
/// Length is caller-controlled and not validated.
#[must_use]
pub fn generate_password(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| char::from(PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())]))
        .collect()
}
