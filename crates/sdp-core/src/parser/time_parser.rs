//! Timing (t=), repeat time (r=) and time zone (z=) parsing

use crate::attributes::common::parse_number;
use crate::error::{Error, Result};
use crate::types::{RepeatTime, TimeDescription, TimeUnit, TimeZoneAdjustment, TypedTime};

/// Parse a time value with an optional unit suffix, e.g. `7d`, `-1h`, `3600`
pub fn parse_typed_time(field: &'static str, value: &str) -> Result<TypedTime> {
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let (digits, unit) = match unsigned.chars().last().and_then(TimeUnit::from_suffix) {
        Some(unit) => (&unsigned[..unsigned.len() - 1], Some(unit)),
        None => (unsigned, None),
    };

    let amount: i64 = parse_number(field, digits).map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })?;

    Ok(TypedTime {
        amount: if negative { -amount } else { amount },
        unit,
    })
}

/// Parse a timing line (t=), `<start-time> <stop-time>`
pub fn parse_time_description_line(value: &str) -> Result<TimeDescription> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let [start, stop] = parts.as_slice() else {
        return Err(Error::invalid_line(
            't',
            format!("expected start and stop time, found {} fields", parts.len()),
        ));
    };

    Ok(TimeDescription {
        start_time: parse_number("start time", start)?,
        stop_time: parse_number("stop time", stop)?,
        repeat_times: Vec::new(),
    })
}

/// Parse a repeat time line (r=), `<repeat interval> <active duration> <offsets from start-time>`
pub fn parse_repeat_time_line(value: &str) -> Result<RepeatTime> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(Error::invalid_line(
            'r',
            "expected a repeat interval and an active duration",
        ));
    }

    Ok(RepeatTime {
        interval: parse_typed_time("repeat interval", parts[0])?,
        active_duration: parse_typed_time("active duration", parts[1])?,
        offsets: parts[2..]
            .iter()
            .map(|offset| parse_typed_time("repeat offset", offset))
            .collect::<Result<Vec<_>>>()?,
    })
}

/// Parse a time zone line (z=), `<adjustment time> <offset> ...`
pub fn parse_time_zone_line(value: &str) -> Result<Vec<TimeZoneAdjustment>> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.is_empty() || parts.len() % 2 != 0 {
        return Err(Error::invalid_line(
            'z',
            "expected pairs of adjustment time and offset",
        ));
    }

    parts
        .chunks(2)
        .map(|pair| {
            Ok(TimeZoneAdjustment {
                adjustment_time: parse_number("adjustment time", pair[0])?,
                offset: parse_typed_time("time zone offset", pair[1])?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed_time() {
        assert_eq!(
            parse_typed_time("offset", "7d").unwrap(),
            TypedTime { amount: 7, unit: Some(TimeUnit::Days) }
        );
        assert_eq!(parse_typed_time("offset", "-1h").unwrap().as_seconds(), Some(-3600));
        assert_eq!(parse_typed_time("offset", "604800").unwrap(), TypedTime::seconds(604800));
        assert!(parse_typed_time("offset", "d").is_err());
        assert!(parse_typed_time("offset", "1w").is_err());
        assert!(parse_typed_time("offset", "--1").is_err());
    }

    #[test]
    fn test_parse_time_description() {
        let t = parse_time_description_line("2873397496 2873404696").unwrap();
        assert_eq!(t.start_time, 2873397496);
        assert_eq!(t.stop_time, 2873404696);
        assert!(parse_time_description_line("0").is_err());
        assert!(matches!(
            parse_time_description_line("0 never"),
            Err(Error::InvalidNumber { field: "stop time", .. })
        ));
    }

    #[test]
    fn test_parse_repeat_time() {
        // Example from RFC 8866 section 5.10
        let r = parse_repeat_time_line("7d 1h 0 25h").unwrap();
        assert_eq!(r.interval.as_seconds(), Some(604800));
        assert_eq!(r.active_duration.as_seconds(), Some(3600));
        assert_eq!(r.offsets.len(), 2);
        assert_eq!(r.to_string(), "7d 1h 0 25h");
    }

    #[test]
    fn test_parse_time_zones() {
        let zones = parse_time_zone_line("2882844526 -1h 2898848070 0").unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].offset.as_seconds(), Some(-3600));
        assert!(parse_time_zone_line("2882844526").is_err());
    }

    #[test]
    fn test_huge_offset_does_not_overflow() {
        let zones = parse_time_zone_line("0 9223372036854775807d").unwrap();
        assert_eq!(zones[0].offset.amount, i64::MAX);
        assert_eq!(zones[0].offset.as_seconds(), None);
        assert_eq!(zones[0].offset.to_string(), "9223372036854775807d");
    }
}
