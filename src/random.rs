//! Random token generation for `<GENERATE_RANDOM_N>` placeholders.
//!
//! Tokens are drawn from the operating system's random source and encoded
//! with the standard base64 alphabet (`A-Z a-z 0-9 + /`). Every call reads
//! fresh bytes.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::trace;
use rand::{rngs::OsRng, TryRngCore};

use crate::constants::{MAX_RANDOM_LENGTH, MIN_RANDOM_LENGTH};
use crate::error::{Error, Result};

/// Number of random bytes needed to encode `length` base64 characters,
/// i.e. `ceil(3/4 * length)`, or `None` if `3 * length` overflows.
fn bytes_of_entropy(length: usize) -> Option<usize> {
    length.checked_mul(3).map(|triple| triple.div_ceil(4))
}

/// Number of padding characters trailing the encoding of `byte_count` bytes.
fn padding_length(byte_count: usize) -> usize {
    match byte_count % 3 {
        0 => 0,
        rem => 3 - rem,
    }
}

/// Generates a random string of exactly `length` base64 characters.
///
/// # Arguments
/// * `length` - Requested token length, between [`MIN_RANDOM_LENGTH`] and
///   [`MAX_RANDOM_LENGTH`]
///
/// # Returns
/// * `Result<String>` - The token, or `Error::InvalidLength` for requests out of range
///
/// # Examples
/// ```
/// let token = infill::random::generate(12).unwrap();
/// assert_eq!(token.len(), 12);
/// assert!(infill::random::generate(5).is_err());
/// ```
pub fn generate(length: i64) -> Result<String> {
    let invalid =
        || Error::InvalidLength { length, minimum: MIN_RANDOM_LENGTH, maximum: MAX_RANDOM_LENGTH };
    if !(MIN_RANDOM_LENGTH..=MAX_RANDOM_LENGTH).contains(&length) {
        return Err(invalid());
    }
    let length = usize::try_from(length).map_err(|_| invalid())?;
    let byte_count = bytes_of_entropy(length).ok_or_else(invalid)?;

    let mut bytes = vec![0u8; byte_count];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::RandomSourceError(e.to_string()))?;

    let mut encoded = STANDARD.encode(&bytes);
    encoded.truncate(encoded.len() - padding_length(bytes.len()));
    encoded.truncate(length);

    trace!("Generated {}-character random token from {} bytes", length, bytes.len());
    Ok(encoded)
}
