//! Built-in value generators.
//!
//! Every generator has the registry signature
//! `fn(&mut dyn RngCore, Option<&SeedValue>) -> SeedValue`, so it can be
//! registered directly and unit tested with a seeded RNG.

pub mod contact;
pub mod data;
pub mod names;
pub mod numeric;
pub mod pattern;
pub mod static_value;
pub mod text;
pub mod timestamp;
pub mod uuid;

use crate::registry::GeneratorRegistry;

/// Register every built-in generator under its schema name.
pub fn register_builtins(registry: &mut GeneratorRegistry) {
    registry
        .register("email", contact::email)
        .register("phone", contact::phone)
        .register("firstName", names::first_name)
        .register("firstMen", names::first_men)
        .register("firstWomen", names::first_women)
        .register("lastName", names::last_name)
        .register("fullName", names::full_name)
        .register("husbandAndWife", names::husband_and_wife)
        .register("words", text::words)
        .register("password", text::password)
        .register("fileName", text::file_name)
        .register("pickOne", static_value::pick_one)
        .register("static", static_value::static_value)
        .register("intRange", numeric::int_range)
        .register("floatRange", numeric::float_range)
        .register("bool", numeric::weighted_bool)
        .register("pattern", pattern::pattern)
        .register("uuid", self::uuid::uuid_string)
        .register("dateRange", timestamp::date_range)
        .register("now", timestamp::now);
}
