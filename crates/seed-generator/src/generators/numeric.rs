//! Numeric value generators.

use rand::{Rng, RngCore};
use seed_core::SeedValue;
use tracing::warn;

const DEFAULT_MIN: i64 = 0;
const DEFAULT_MAX: i64 = 100;
const DEFAULT_WEIGHT: f64 = 0.5;

/// One bound of a `[min, max]` pair; integers are widened, NaN and infinities rejected.
fn finite_bound(value: &SeedValue) -> Option<f64> {
    value.as_f64().filter(|f| f.is_finite())
}

fn float_bounds(arg: Option<&SeedValue>) -> (f64, f64) {
    let defaults = (DEFAULT_MIN as f64, DEFAULT_MAX as f64);
    let Some(arg) = arg else {
        return defaults;
    };
    match arg.as_array() {
        Some([min, max]) => match (finite_bound(min), finite_bound(max)) {
            (Some(min), Some(max)) => (min.min(max), min.max(max)),
            _ => {
                warn!("Ignoring non-numeric range bounds {:?}", arg);
                defaults
            }
        },
        _ => {
            warn!("Expected a [min, max] range, got {:?}", arg);
            defaults
        }
    }
}

fn int_bounds(arg: Option<&SeedValue>) -> (i64, i64) {
    if let Some([min, max]) = arg.and_then(SeedValue::as_array) {
        if let (Some(min), Some(max)) = (min.as_i64(), max.as_i64()) {
            return (min.min(max), min.max(max));
        }
    }
    let (min, max) = float_bounds(arg);
    // `as` saturates, so huge float bounds clamp to the i64 range.
    let (min, max) = (min.ceil() as i64, max.floor() as i64);
    if min > max {
        // No integer inside a range such as [1.2, 1.8].
        (max, max)
    } else {
        (min, max)
    }
}

/// Random integer in the inclusive `[min, max]` given by `arg` (default `[0, 100]`).
///
/// Float bounds are accepted and narrowed to the integers they enclose.
pub fn int_range(rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
    let (min, max) = int_bounds(arg);
    SeedValue::Int(rng.gen_range(min..=max))
}

/// Random float in the inclusive `[min, max]` given by `arg` (default `[0, 100]`).
pub fn float_range(rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
    let (min, max) = float_bounds(arg);
    SeedValue::Float(rng.gen_range(min..=max))
}

/// `true` with the probability given by a numeric `arg` (default 0.5).
pub fn weighted_bool(rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
    let weight = match arg {
        None => DEFAULT_WEIGHT,
        Some(value) => match value.as_f64() {
            Some(weight) if !weight.is_nan() => weight.clamp(0.0, 1.0),
            _ => {
                warn!("Ignoring invalid probability {:?}", value);
                DEFAULT_WEIGHT
            }
        },
    };
    SeedValue::Bool(rng.gen_bool(weight))
}
