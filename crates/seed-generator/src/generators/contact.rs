//! Contact detail generators: `email`, `phone`.

use rand::{Rng, RngCore};
use seed_core::SeedValue;

use super::names::first_name_string;

pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

/// `{FirstName}{100-999}@{domain}`. A string `arg` overrides the domain.
pub fn email(rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
    let domain = arg
        .and_then(SeedValue::as_str)
        .unwrap_or(DEFAULT_EMAIL_DOMAIN);
    let name = first_name_string(rng);
    let suffix: u32 = rng.gen_range(100..=999);
    SeedValue::String(format!("{name}{suffix}@{domain}"))
}

/// Ten digits: a repeated leading digit (3-9) three times, then seven digits.
pub fn phone(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    let lead: u32 = rng.gen_range(3..=9);
    let rest: u32 = rng.gen_range(2_000_000..=9_999_999);
    SeedValue::String(format!("{lead}{lead}{lead}{rest}"))
}
