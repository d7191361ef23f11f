//! ISO 8601 combined date and time, as used by the REST API.

use crate::error::Error;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Serializer;

// basic offset form, e.g. `+0000`
const BASIC_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const NO_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses an ISO 8601 combined date and time. A value without an offset is
/// taken as UTC.
pub fn parse(s: &str) -> Result<DateTime<FixedOffset>, Error> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Ok(timestamp);
    }
    if let Ok(timestamp) = DateTime::parse_from_str(s, BASIC_OFFSET) {
        return Ok(timestamp);
    }
    match NaiveDateTime::parse_from_str(s, NO_OFFSET) {
        Ok(naive) => Ok(Utc.from_utc_datetime(&naive).into()),
        Err(_) => Err(Error::format_violation(
            "timestamp",
            s,
            "expected an ISO 8601 date and time",
        )),
    }
}

pub fn to_string(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn serialize<S>(
    timestamp: &Option<DateTime<FixedOffset>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Some(timestamp) => serializer.serialize_str(&to_string(timestamp)),
        None => serializer.serialize_none(),
    }
}

#[test]
fn utc_round_trip() -> Result<(), Error> {
    for ts in &[
        "2025-01-01T00:00:00Z",
        "2014-09-23T20:42:50.500Z",
        "2014-09-23T22:42:50+02:00",
    ] {
        assert_eq!(to_string(&parse(ts)?), *ts);
    }
    // +00:00 and Z are the same instant, written back as Z
    assert_eq!(
        to_string(&parse("2025-01-01T00:00:00+00:00")?),
        "2025-01-01T00:00:00Z"
    );
    Ok(())
}

#[test]
fn basic_offset_and_missing_offset() -> Result<(), Error> {
    let basic = parse("2014-09-17T21:47:00.000+0000")?;
    assert_eq!(basic.offset().local_minus_utc(), 0);
    assert_eq!(basic.timestamp(), 1_410_990_420);
    assert_eq!(to_string(&basic), "2014-09-17T21:47:00Z");

    let shifted = parse("2014-09-17T23:47:00+0200")?;
    assert_eq!(shifted.offset().local_minus_utc(), 7200);
    assert_eq!(shifted.timestamp(), 1_410_990_420);

    // no offset reads as UTC
    let naive = parse("2014-09-17T21:47:00")?;
    assert_eq!(naive, basic);
    assert_eq!(to_string(&naive), "2014-09-17T21:47:00Z");
    assert_eq!(
        to_string(&parse("2014-09-17T21:47:00.250")?),
        "2014-09-17T21:47:00.250Z"
    );
    Ok(())
}

#[test]
fn rejects_dates_without_time() {
    for ts in &[
        "2025-01-01",
        "yesterday",
        "2025-13-01T00:00:00Z",
        "2014-09-17 21:47",
        "",
    ] {
        match parse(ts) {
            Err(Error::FormatViolation { field, .. }) => assert_eq!(field, "timestamp"),
            other => panic!("unexpected result for {:?}: {:?}", ts, other),
        }
    }
}
