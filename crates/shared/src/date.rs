use time::OffsetDateTime;

pub const DAY_SECONDS: i64 = 86_400;

/// Current unix timestamp in seconds.
pub fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Unix timestamp `days` days before `from`.
pub fn days_before(from: i64, days: i64) -> i64 {
    from - days * DAY_SECONDS
}
