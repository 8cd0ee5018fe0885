//! Random name generation and validation.
//!
//! Names are fixed-length strings of lowercase ASCII letters. Each character
//! is drawn independently and uniformly, so names are not unique on their
//! own; uniqueness is enforced per batch by the generator.

use rand::Rng;

/// Default length of a generated name.
pub const DEFAULT_NAME_LENGTH: usize = 10;

// Letters a name character is drawn from.
const ALPHABET_SIZE: u128 = 26;

/// Generates a random name of exactly `length` lowercase letters.
///
/// Returns an empty string when `length` is zero.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use user_fixtures::{is_valid_name, random_name};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let name = random_name(&mut rng, 10);
///
/// assert!(is_valid_name(&name, 10));
/// ```
pub fn random_name<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

/// Returns `true` if `name` has `length` characters, all in `a`–`z`.
///
/// # Examples
///
/// ```
/// use user_fixtures::is_valid_name;
///
/// assert!(is_valid_name("abcdefghij", 10));
/// assert!(!is_valid_name("abcdefghi", 10));  // Too short
/// assert!(!is_valid_name("Abcdefghij", 10)); // Uppercase
/// assert!(is_valid_name("", 0));
/// ```
#[must_use]
pub fn is_valid_name(name: &str, length: usize) -> bool {
    name.len() == length && name.bytes().all(|byte| byte.is_ascii_lowercase())
}

/// Returns how many distinct names of `length` characters exist.
///
/// Saturates at [`u128::MAX`] for lengths whose name space does not fit.
#[must_use]
pub fn name_space_size(length: usize) -> u128 {
    u32::try_from(length)
        .ok()
        .and_then(|exponent| ALPHABET_SIZE.checked_pow(exponent))
        .unwrap_or(u128::MAX)
}
