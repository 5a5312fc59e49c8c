//! Selection generators: `pickOne` and `static`.

use rand::{Rng, RngCore};
use seed_core::SeedValue;

/// Uniformly choose one element of an array `arg`.
///
/// A scalar `arg` is returned as is; a missing or empty one yields null.
pub fn pick_one(rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
    match arg {
        Some(SeedValue::Array(values)) if !values.is_empty() => {
            values[rng.gen_range(0..values.len())].clone()
        }
        Some(SeedValue::Array(_)) | None => SeedValue::Null,
        Some(other) => other.clone(),
    }
}

/// Return `arg` unchanged (null when absent).
pub fn static_value(_rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
    arg.cloned().unwrap_or(SeedValue::Null)
}
