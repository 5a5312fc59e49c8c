//! Word-based generators: `words`, `password`, `fileName`.

use rand::{Rng, RngCore};
use seed_core::SeedValue;
use tracing::warn;

use super::data::WORDS;
use super::names::pick;

const FILE_EXTENSIONS: &[&str] = &["jpg", "pdf", "png"];
const PASSWORD_LENGTH: usize = 8;
/// Upper bound on the `words` count.
pub const MAX_WORDS: usize = 1000;

fn word_list(rng: &mut dyn RngCore, count: usize) -> Vec<&'static str> {
    (0..count).map(|_| pick(rng, WORDS)).collect()
}

/// `arg` is the word count (default 1, at most [`MAX_WORDS`]).
pub fn words(rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
    let requested = arg.and_then(SeedValue::as_i64).unwrap_or(1).max(0);
    let count = match usize::try_from(requested) {
        Ok(n) if n <= MAX_WORDS => n,
        _ => {
            warn!("Word count {} capped at {}", requested, MAX_WORDS);
            MAX_WORDS
        }
    };
    SeedValue::String(word_list(rng, count).join(" "))
}

/// Four concatenated words truncated to eight characters.
pub fn password(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    let joined: String = word_list(rng, 4).concat();
    SeedValue::String(joined.chars().take(PASSWORD_LENGTH).collect())
}

/// Two lowercase letter-only words plus an extension, e.g. `rivertoken.pdf`.
pub fn file_name(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    let stem: String = word_list(rng, 2)
        .concat()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let extension = FILE_EXTENSIONS[rng.gen_range(0..FILE_EXTENSIONS.len())];
    SeedValue::String(format!("{stem}.{extension}"))
}
