//! Salt generator
//!
//! Produces the fixed-length random salt stored alongside each credential.
//! Draws every character from the operating-system CSPRNG; there is no
//! seeded or pseudo-random fallback.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::SaltError;

/// Length of every generated salt, in characters.
pub const SALT_LENGTH: usize = 32;

/// The 94 printable non-space ASCII characters.
pub(crate) const SALT_ALPHABET: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

// Bytes at or above this limit are discarded so that `byte % 94` stays
// uniform over the alphabet.
const REJECTION_LIMIT: u8 = ((u8::MAX as usize / SALT_ALPHABET.len()) * SALT_ALPHABET.len()) as u8;

/// Generates a 32 character random salt.
///
/// Collision avoidance is probabilistic only: 94^32 possible salts make a
/// repeat negligible, so no uniqueness bookkeeping is done.
pub fn generate_salt() -> Result<String, SaltError> {
    let mut salt = String::with_capacity(SALT_LENGTH);
    let mut buf = [0u8; 64];

    while salt.len() < SALT_LENGTH {
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| SaltError::RandomnessFailure(e.to_string()))?;

        for &byte in buf.iter() {
            if salt.len() == SALT_LENGTH {
                break;
            }
            if byte < REJECTION_LIMIT {
                salt.push(SALT_ALPHABET[(byte % SALT_ALPHABET.len() as u8) as usize] as char);
            }
        }
    }

    Ok(salt)
}
