//! Timestamp value generators.

use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use seed_core::SeedValue;

/// Random timestamp between the two dates given as `arg` (`[start, end]`).
///
/// Dates may be RFC 3339 or `YYYY-MM-DD`. Without a usable range, yields
/// the current time.
pub fn date_range(rng: &mut dyn RngCore, arg: Option<&SeedValue>) -> SeedValue {
    let bounds = match arg.and_then(SeedValue::as_array) {
        Some([start, end]) => (
            start.as_str().and_then(parse_timestamp),
            end.as_str().and_then(parse_timestamp),
        ),
        _ => (None, None),
    };

    match bounds {
        (Some(start), Some(end)) => {
            let (start_ts, end_ts) = (start.timestamp(), end.timestamp());
            if start_ts >= end_ts {
                SeedValue::DateTime(start)
            } else {
                let random_ts = rng.gen_range(start_ts..=end_ts);
                let dt = DateTime::from_timestamp(random_ts, 0).unwrap_or(start);
                SeedValue::DateTime(dt)
            }
        }
        (Some(dt), None) | (None, Some(dt)) => SeedValue::DateTime(dt),
        (None, None) => SeedValue::DateTime(Utc::now()),
    }
}

/// Current UTC time.
pub fn now(_rng: &mut dyn RngCore, _arg: Option<&SeedValue>) -> SeedValue {
    SeedValue::DateTime(Utc::now())
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
