//! Person name generators.

use rand::{Rng, RngCore};
use seed_core::SeedValue;

use super::data::{FIRST_NAMES_MEN, FIRST_NAMES_WOMEN, LAST_NAMES};

pub(crate) fn pick<'a>(rng: &mut dyn RngCore, list: &[&'a str]) -> &'a str {
    list[rng.gen_range(0..list.len())]
}

pub(crate) fn first_name_string(rng: &mut dyn RngCore) -> String {
    if rng.gen_bool(0.5) {
        pick(rng, FIRST_NAMES_WOMEN).to_string()
    } else {
        pick(rng, FIRST_NAMES_MEN).to_string()
    }
}

pub fn first_men(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    SeedValue::from(pick(rng, FIRST_NAMES_MEN))
}

pub fn first_women(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    SeedValue::from(pick(rng, FIRST_NAMES_WOMEN))
}

pub fn first_name(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    SeedValue::String(first_name_string(rng))
}

pub fn last_name(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    SeedValue::from(pick(rng, LAST_NAMES))
}

pub fn full_name(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    let first = first_name_string(rng);
    SeedValue::String(format!("{first} {}", pick(rng, LAST_NAMES)))
}

/// `[husband, wife, shared last name]`.
pub fn husband_and_wife(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    let last = pick(rng, LAST_NAMES);
    SeedValue::Array(vec![
        SeedValue::from(pick(rng, FIRST_NAMES_MEN)),
        SeedValue::from(pick(rng, FIRST_NAMES_WOMEN)),
        SeedValue::from(last),
    ])
}
