//! Wall-clock source.
//!
//! Handlers never call `Local::now()` directly; they go through a [`Clock`]
//! so tests and `opentime check --at` can pin the instant.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

use crate::types::MinuteOfDay;

/// Source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    /// `minute` on `date`, at UTC offset zero.
    pub fn at_minute_on(date: NaiveDate, minute: MinuteOfDay) -> Self {
        let time = NaiveTime::from_hms_opt(minute.hour().into(), minute.minute().into(), 0)
            .expect("MinuteOfDay is always a valid time of day");
        Self(Utc.from_utc_datetime(&date.and_time(time)).fixed_offset())
    }

    /// `minute` on today's (UTC) date.
    pub fn at_minute(minute: MinuteOfDay) -> Self {
        Self::at_minute_on(Utc::now().date_naive(), minute)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Minute of day in the instant's own offset.
pub fn minute_of_day(instant: &DateTime<FixedOffset>) -> MinuteOfDay {
    MinuteOfDay::from_time(instant)
}

/// `H:MM:SS`, 24-hour, no leading zero on the hour (e.g. `9:05:07`).
pub fn format_wall_clock(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%-H:%M:%S").to_string()
}

/// ISO-8601 in UTC with millisecond precision and a `Z` suffix.
pub fn format_timestamp(instant: &DateTime<FixedOffset>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).expect("rfc3339")
    }

    #[test]
    fn minute_of_day_uses_local_offset() {
        let at = instant("2023-01-01T10:30:59+09:00");
        assert_eq!(minute_of_day(&at).get(), 630);
    }

    #[test]
    fn wall_clock_format_drops_hour_padding() {
        assert_eq!(format_wall_clock(&instant("2023-01-01T09:05:07+09:00")), "9:05:07");
        assert_eq!(format_wall_clock(&instant("2023-01-01T21:00:00+09:00")), "21:00:00");
        assert_eq!(format_wall_clock(&instant("2023-01-01T00:00:00+09:00")), "0:00:00");
    }

    #[test]
    fn timestamp_is_utc_millis() {
        let at = instant("2023-01-01T09:00:00+09:00");
        assert_eq!(format_timestamp(&at), "2023-01-01T00:00:00.000Z");
    }

    #[test]
    fn fixed_clock_at_minute() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).expect("date");
        let clock = FixedClock::at_minute_on(date, MinuteOfDay::from_hm(8, 59).expect("8:59"));
        assert_eq!(minute_of_day(&clock.now()).get(), 539);
        assert_eq!(clock.now(), clock.now());
    }
}
