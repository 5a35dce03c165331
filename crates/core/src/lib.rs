//! Core constants, angle helpers, and shared primitives for the Prayer Times Calculator workspace.

pub mod clock;
pub mod location;

pub use clock::ClockTime;
pub use location::{Location, LocationError};

/// Astronomical and calendar constants shared by the solar model and the prayer calculator.
pub mod constants {
    /// Julian day at which each calendar day is evaluated, for 1970-01-01.
    ///
    /// Midnight UTC would be `2_440_587.5`; the extra 0.21 day samples the sun
    /// at about 05:02 UTC.
    pub const JDN_UNIX_EPOCH: f64 = 2_440_587.71;
    /// Julian day of the J2000.0 epoch.
    pub const JDN_J2000: f64 = 2_451_545.0;
    /// Days per Julian century.
    pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
    /// Zenith distance of the sun's upper limb at sunrise/sunset, refraction included (degrees).
    pub const SUNRISE_ZENITH_DEG: f64 = 90.833;
    /// Apparent rotation of the sky per hour of time (degrees).
    pub const DEGREES_PER_HOUR: f64 = 15.0;
    /// Minutes of time per degree of longitude.
    pub const MINUTES_PER_DEGREE: f64 = 4.0;
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    pub const HOURS_PER_DAY: f64 = 24.0;
    /// Local noon expressed in minutes after midnight.
    pub const NOON_MINUTES: f64 = 720.0;
    /// Safety margin added after Dhuhur, Asr, and Maghrib (minutes).
    pub const DEFAULT_PRECAUTION_MINUTES: f64 = 5.0;
    /// Widest UTC offsets in civil use (hours).
    pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;
}

/// Degree-based trigonometry.
///
/// Every angle in the solar model is carried in degrees; conversion to radians
/// happens only here, right before evaluation.
pub mod angles {
    #[inline]
    pub fn sin_deg(deg: f64) -> f64 {
        deg.to_radians().sin()
    }

    #[inline]
    pub fn cos_deg(deg: f64) -> f64 {
        deg.to_radians().cos()
    }

    #[inline]
    pub fn tan_deg(deg: f64) -> f64 {
        deg.to_radians().tan()
    }

    /// Arc tangent in degrees.
    #[inline]
    pub fn atan_deg(x: f64) -> f64 {
        x.atan().to_degrees()
    }

    /// Arc sine in degrees, or `None` when `x` falls outside `[-1, 1]`.
    #[inline]
    pub fn asin_deg(x: f64) -> Option<f64> {
        in_unit_range(x).then(|| x.asin().to_degrees())
    }

    /// Arc cosine in degrees, or `None` when `x` falls outside `[-1, 1]`.
    #[inline]
    pub fn acos_deg(x: f64) -> Option<f64> {
        in_unit_range(x).then(|| x.acos().to_degrees())
    }

    /// Wrap an angle into `[0, 360)`.
    #[inline]
    pub fn normalize_degrees(deg: f64) -> f64 {
        deg.rem_euclid(360.0)
    }

    fn in_unit_range(x: f64) -> bool {
        (-1.0..=1.0).contains(&x)
    }
}

/// Calendar day arithmetic.
pub mod time {
    use chrono::{Datelike, NaiveDate};

    /// Value of `num_days_from_ce` for 1970-01-01.
    const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

    /// Days elapsed since 1970-01-01 in the proleptic Gregorian calendar (negative before).
    pub fn days_since_unix_epoch(date: NaiveDate) -> i64 {
        i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
    }
}

#[cfg(test)]
mod tests {
    use super::angles::*;
    use super::time::days_since_unix_epoch;
    use chrono::NaiveDate;

    #[test]
    fn inverse_trig_rejects_out_of_range_arguments() {
        assert!(acos_deg(1.000_001).is_none());
        assert!(asin_deg(-1.2).is_none());
        assert!(acos_deg(f64::NAN).is_none());
        assert!((acos_deg(0.0).unwrap() - 90.0).abs() < 1e-12);
        assert!((asin_deg(0.5).unwrap() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_wraps_negative_angles() {
        assert!((normalize_degrees(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn epoch_day_count_handles_both_sides_of_1970() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(days_since_unix_epoch(date(1970, 1, 1)), 0);
        assert_eq!(days_since_unix_epoch(date(2000, 1, 1)), 10_957);
        assert_eq!(days_since_unix_epoch(date(2017, 6, 25)), 17_342);
        assert_eq!(days_since_unix_epoch(date(1969, 12, 31)), -1);
    }
}
