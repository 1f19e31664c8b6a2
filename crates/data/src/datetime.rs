//! Wall-clock timestamps as exchanged with the backend.
//!
//! The backend stores duty boundaries as local times without an offset, so
//! values are kept as `NaiveDateTime` and written without any UTC
//! conversion. Offsets sent by the backend are dropped after taking the
//! wall-clock time they describe.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn to_local_iso(value: &NaiveDateTime) -> String {
    value.format(ISO_FORMAT).to_string()
}

pub fn parse(value: &str) -> Option<NaiveDateTime> {
    value
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_local_iso(value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
}

pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn midnight_keeps_its_wall_clock_day() {
        let value = midnight(2024, 6, 10);
        let iso = to_local_iso(&value);

        assert_eq!(iso, "2024-06-10T00:00:00");
        assert_eq!(parse(&iso), Some(value));
    }

    #[test]
    fn accepts_fractional_seconds_offsets_and_dates() {
        assert_eq!(parse("2024-06-10T00:00:00.123456").map(|v| v.date()), Some(midnight(2024, 6, 10).date()));
        assert_eq!(parse("2024-06-10T00:00:00+02:00"), Some(midnight(2024, 6, 10)));
        assert_eq!(parse("2024-06-10"), Some(midnight(2024, 6, 10)));
        assert_eq!(parse("10.06.2024"), None);
    }
}
