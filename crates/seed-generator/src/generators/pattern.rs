//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{uuid}` - random UUID
//! - `{rand:N}` - random N-digit number (N is capped at 64)
//! - `{word}` - random dictionary word

use rand::{Rng, RngCore};
use seed_core::SeedValue;
use tracing::warn;

use super::data::WORDS;
use super::names::pick;
use super::uuid::uuid_v4;

/// Upper bound on the digit count of a `{rand:N}` placeholder.
pub const MAX_RANDOM_DIGITS: usize = 64;

/// Expand the pattern given as a string `arg`. Without a pattern, yields null.
pub fn pattern(rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
    match arg.and_then(SeedValue::as_str) {
        Some(pattern) => SeedValue::String(expand_pattern(pattern, rng)),
        None => SeedValue::Null,
    }
}

fn expand_pattern(pattern: &str, rng: &mut dyn RngCore) -> String {
    let mut result = pattern.to_string();

    while result.contains("{uuid}") {
        result = result.replacen("{uuid}", &uuid_v4(rng).to_string(), 1);
    }

    while result.contains("{word}") {
        result = result.replacen("{word}", pick(rng, WORDS), 1);
    }

    // Replace {rand:N} patterns
    while let Some(start) = result.find("{rand:") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let end = start + end;
        let Ok(digits) = result[start + 6..end].parse::<usize>() else {
            // Invalid format, leave it in place
            break;
        };
        if digits > MAX_RANDOM_DIGITS {
            warn!("Digit count {} capped at {}", digits, MAX_RANDOM_DIGITS);
        }
        let random_num = random_digits(rng, digits.min(MAX_RANDOM_DIGITS));
        result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
    }

    result
}

/// A random number with exactly N digits (no leading zero).
fn random_digits(rng: &mut dyn RngCore, digits: usize) -> String {
    (0..digits)
        .map(|i| {
            let low = if i == 0 { 1 } else { 0 };
            char::from(b'0' + rng.gen_range(low..10u8))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn expand(p: &str) -> String {
        let mut rng = StdRng::seed_from_u64(42);
        pattern(&mut rng, Some(&SeedValue::from(p)))
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_pattern_uuid() {
        let s = expand("id-{uuid}");
        assert!(s.starts_with("id-"));
        assert_eq!(s.len(), 3 + 36);
    }

    #[test]
    fn test_pattern_random_digits() {
        let s = expand("code-{rand:6}");
        assert!(s.starts_with("code-"));
        assert_eq!(s.len(), 5 + 6);
        assert!(s[5..].chars().all(|c| c.is_ascii_digit()));
        assert_ne!(&s[5..6], "0");
    }

    #[test]
    fn test_pattern_random_digits_are_capped() {
        let s = expand("n{rand:999999999}");
        assert_eq!(s.len(), 1 + MAX_RANDOM_DIGITS);
        assert!(s[1..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_pattern_word() {
        let s = expand("{word}-{rand:2}");
        let (word, digits) = s.split_once('-').unwrap();
        assert!(WORDS.contains(&word));
        assert_eq!(digits.len(), 2);
    }

    #[test]
    fn test_pattern_invalid_placeholder_is_kept() {
        assert_eq!(expand("x-{rand:abc}"), "x-{rand:abc}");
    }

    #[test]
    fn test_pattern_without_arg() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(pattern(&mut rng, None).is_null());
    }
}
