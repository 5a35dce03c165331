//! Wall-clock rendering of fractional hours.

use std::fmt;

use chrono::{Duration, NaiveTime};
use serde::{Serialize, Serializer};

use crate::constants::{HOURS_PER_DAY, MINUTES_PER_HOUR};

/// Time of day quantized to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build from an hour in `0..24` and a minute in `0..60`.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Convert a fractional local hour into a clock time.
    ///
    /// The hour is floored and the remainder rounded to the nearest minute. A
    /// remainder that rounds up to 60 carries into the hour, and hours outside
    /// `[0, 24)` wrap around the day, so `-0.5` reads as `23:30` and `24.25`
    /// as `00:15`. Returns `None` for NaN or infinite input.
    pub fn from_fractional_hours(hours: f64) -> Option<Self> {
        if !hours.is_finite() {
            return None;
        }
        let whole = hours.floor();
        let mut minute = ((hours - whole) * MINUTES_PER_HOUR).round() as i64;
        let mut hour = whole as i64;
        if minute >= 60 {
            hour += minute / 60;
            minute %= 60;
        }
        let hour = hour.rem_euclid(HOURS_PER_DAY as i64);
        Some(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn minutes_since_midnight(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// The clock time read back as a fractional hour in `[0, 24)`.
    pub fn as_fractional_hours(self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / MINUTES_PER_HOUR
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::MIN + Duration::minutes(i64::from(self.minutes_since_midnight()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hours: f64) -> (u8, u8) {
        let t = ClockTime::from_fractional_hours(hours).expect("finite");
        (t.hour(), t.minute())
    }

    #[test]
    fn floors_hour_and_rounds_minute() {
        assert_eq!(hm(4.101_818), (4, 6));
        assert_eq!(hm(15.496_798), (15, 30));
        assert_eq!(hm(0.0), (0, 0));
    }

    #[test]
    fn minute_rounding_to_sixty_carries_into_hour() {
        assert_eq!(hm(5.999_9), (6, 0));
        assert_eq!(hm(23.999_9), (0, 0));
    }

    #[test]
    fn hours_outside_the_day_wrap() {
        assert_eq!(hm(24.815_144), (0, 49));
        assert_eq!(hm(-0.5), (23, 30));
        assert_eq!(hm(-25.0), (23, 0));
    }

    #[test]
    fn non_finite_hours_are_rejected() {
        assert!(ClockTime::from_fractional_hours(f64::NAN).is_none());
        assert!(ClockTime::from_fractional_hours(f64::INFINITY).is_none());
    }

    #[test]
    fn display_and_naive_time_agree() {
        let t = ClockTime::new(7, 5).unwrap();
        assert_eq!(t.to_string(), "07:05");
        assert_eq!(t.to_naive_time(), NaiveTime::from_hms_opt(7, 5, 0).unwrap());
        assert!(ClockTime::new(24, 0).is_none());
    }
}
