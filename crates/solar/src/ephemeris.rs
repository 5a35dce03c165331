//! Low-precision solar ephemeris: the sun's apparent place for a calendar day.
//!
//! The series are the NOAA spreadsheet approximations (Meeus, *Astronomical
//! Algorithms*, ch. 25), evaluated once per day at the instant implied by
//! [`JDN_UNIX_EPOCH`].

use chrono::NaiveDate;
use prayer_core::angles::{asin_deg, cos_deg, normalize_degrees, sin_deg, tan_deg};
use prayer_core::constants::{
    DAYS_PER_JULIAN_CENTURY, JDN_J2000, JDN_UNIX_EPOCH, MINUTES_PER_DEGREE,
};
use prayer_core::time::days_since_unix_epoch;
use serde::Serialize;

use crate::SolarError;

/// Orbital elements and apparent coordinates of the sun. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    pub julian_day: f64,
    pub julian_century: f64,
    pub mean_longitude: f64,
    pub mean_anomaly: f64,
    pub eccentricity: f64,
    pub equation_of_center: f64,
    pub true_longitude: f64,
    pub true_anomaly: f64,
    /// Sun-earth distance in astronomical units.
    pub radius_vector: f64,
    pub apparent_longitude: f64,
    pub mean_obliquity: f64,
    pub corrected_obliquity: f64,
    pub declination: f64,
    /// `tan²(ε/2)`, the `y` term of the equation of time.
    pub obliquity_factor: f64,
    /// Apparent minus mean solar time, in minutes.
    pub equation_of_time_minutes: f64,
}

/// Compute the sun's position for `date`.
pub fn solar_position(date: NaiveDate) -> Result<SolarPosition, SolarError> {
    let julian_day = JDN_UNIX_EPOCH + days_since_unix_epoch(date) as f64;
    let jc = (julian_day - JDN_J2000) / DAYS_PER_JULIAN_CENTURY;

    let mean_longitude = normalize_degrees(280.46646 + jc * (36000.76983 + jc * 0.0003032));
    let mean_anomaly = 357.52911 + jc * (35999.05029 - 0.0001537 * jc);
    let eccentricity = 0.016708634 - jc * (0.000042037 + 0.0000001267 * jc);

    let equation_of_center = sin_deg(mean_anomaly) * (1.914602 - jc * (0.004817 + 0.000014 * jc))
        + sin_deg(2.0 * mean_anomaly) * (0.019993 - 0.000101 * jc)
        + sin_deg(3.0 * mean_anomaly) * 0.000289;

    let true_longitude = mean_longitude + equation_of_center;
    let true_anomaly = mean_anomaly + equation_of_center;
    let radius_vector = 1.000001018 * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * cos_deg(true_anomaly));

    // Longitude of the moon's ascending node, drives nutation and aberration.
    let omega = 125.04 - 1934.136 * jc;
    let apparent_longitude = true_longitude - 0.00569 - 0.00478 * sin_deg(omega);

    let mean_obliquity =
        23.0 + (26.0 + (21.448 - jc * (46.815 + jc * (0.00059 - jc * 0.001813))) / 60.0) / 60.0;
    let corrected_obliquity = mean_obliquity + 0.00256 * cos_deg(omega);

    let sin_declination = sin_deg(corrected_obliquity) * sin_deg(apparent_longitude);
    let declination = asin_deg(sin_declination).ok_or(SolarError::DeclinationUndefined {
        argument: sin_declination,
    })?;

    let y = tan_deg(corrected_obliquity / 2.0).powi(2);
    let e = eccentricity;
    let l0 = mean_longitude;
    let m = mean_anomaly;
    // The bracket is an angle in radians.
    let equation_of_time_rad = y * sin_deg(2.0 * l0) - 2.0 * e * sin_deg(m)
        + 4.0 * e * y * sin_deg(m) * cos_deg(2.0 * l0)
        - 0.5 * y * y * sin_deg(4.0 * l0)
        - 1.25 * e * e * sin_deg(2.0 * m);
    let equation_of_time_minutes = MINUTES_PER_DEGREE * equation_of_time_rad.to_degrees();

    Ok(SolarPosition {
        julian_day,
        julian_century: jc,
        mean_longitude,
        mean_anomaly,
        eccentricity,
        equation_of_center,
        true_longitude,
        true_anomaly,
        radius_vector,
        apparent_longitude,
        mean_obliquity,
        corrected_obliquity,
        declination,
        obliquity_factor: y,
        equation_of_time_minutes,
    })
}
