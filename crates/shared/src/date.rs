use time::{OffsetDateTime, macros::format_description};

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Formats epoch milliseconds as `2025-01-02T03:04:05.678Z`.
pub fn to_iso8601(millis: i64) -> crate::Result<String> {
    let date = OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000)?;

    Ok(date.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))?)
}

pub fn now_iso8601() -> crate::Result<String> {
    to_iso8601(now_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_millis_in_utc() {
        assert_eq!(
            to_iso8601(1_735_787_045_678).unwrap(),
            "2025-01-02T03:04:05.678Z"
        );
        assert_eq!(to_iso8601(0).unwrap(), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn now_is_after_2024() {
        assert!(now_millis() > 1_704_067_200_000);
    }
}
