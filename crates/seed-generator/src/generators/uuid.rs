//! UUID value generator.

use rand::{Rng, RngCore};
use seed_core::SeedValue;
use uuid::Uuid;

/// Build a random UUID v4 from the provided RNG, so seeded runs are reproducible.
pub(crate) fn uuid_v4(rng: &mut dyn RngCore) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// Hyphenated UUID v4 string.
pub fn uuid_string(rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    SeedValue::String(uuid_v4(rng).to_string())
}
