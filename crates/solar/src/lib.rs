//! Solar model: from a calendar day and an observer to solar noon, sunrise, and sunset.
//!
//! All outputs are fractional local hours (clock time at the given UTC offset)
//! or degrees. The computation is a fixed chain of closed-form expressions and
//! holds no state between calls.

pub mod ephemeris;

use chrono::NaiveDate;
use prayer_core::angles::{acos_deg, cos_deg, sin_deg, tan_deg};
use prayer_core::constants::{
    DEGREES_PER_HOUR, MAX_UTC_OFFSET_HOURS, MINUTES_PER_DEGREE, MINUTES_PER_HOUR, NOON_MINUTES,
    SUNRISE_ZENITH_DEG,
};
use prayer_core::{ClockTime, Location};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub use ephemeris::{SolarPosition, solar_position};

/// Errors surfaced by the solar model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolarError {
    #[error(
        "the sun neither rises nor sets on {date} at latitude {latitude}° (declination {declination:.3}°)"
    )]
    NoSunriseOrSunset {
        date: NaiveDate,
        latitude: f64,
        declination: f64,
    },
    #[error("solar declination is undefined (asin argument {argument})")]
    DeclinationUndefined { argument: f64 },
    #[error("UTC offset {0} h is outside [-14, 14]")]
    InvalidUtcOffset(f64),
}

/// Everything the prayer calculator needs about the sun on one day at one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarParameters {
    pub date: NaiveDate,
    pub location: Location,
    pub utc_offset_hours: f64,
    pub position: SolarPosition,
    /// Hour angle of the sun's upper limb at the horizon, refraction included (degrees).
    pub sunrise_hour_angle: f64,
    pub solar_noon: f64,
    pub sunrise: f64,
    pub sunset: f64,
}

impl SolarParameters {
    pub fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude()
    }

    pub fn declination(&self) -> f64 {
        self.position.declination
    }

    pub fn equation_of_time_minutes(&self) -> f64 {
        self.position.equation_of_time_minutes
    }

    /// Hour angle at which the sun stands `altitude_deg` above the horizon on this day.
    pub fn hour_angle_at(&self, altitude_deg: f64) -> Option<f64> {
        hour_angle(altitude_deg, self.latitude(), self.declination())
    }

    pub fn sunrise_clock(&self) -> Option<ClockTime> {
        ClockTime::from_fractional_hours(self.sunrise)
    }

    pub fn solar_noon_clock(&self) -> Option<ClockTime> {
        ClockTime::from_fractional_hours(self.solar_noon)
    }

    pub fn sunset_clock(&self) -> Option<ClockTime> {
        ClockTime::from_fractional_hours(self.sunset)
    }
}

/// Solar noon as a fractional local hour.
///
/// Each degree of longitude east moves noon four minutes earlier; the equation
/// of time corrects for the sun running ahead of or behind mean time.
pub fn solar_noon_hours(longitude: f64, equation_of_time_minutes: f64, utc_offset_hours: f64) -> f64 {
    (NOON_MINUTES - MINUTES_PER_DEGREE * longitude - equation_of_time_minutes
        + utc_offset_hours * MINUTES_PER_HOUR)
        / MINUTES_PER_HOUR
}

/// Hour angle (degrees) at which the sun reaches `altitude_deg`.
///
/// Solves `cos H = sin a / (cos φ · cos δ) − tan φ · tan δ`. Returns `None`
/// when the right-hand side leaves `[-1, 1]`: the sun stays entirely above or
/// entirely below that altitude all day.
pub fn hour_angle(altitude_deg: f64, latitude_deg: f64, declination_deg: f64) -> Option<f64> {
    let cos_h = sin_deg(altitude_deg) / (cos_deg(latitude_deg) * cos_deg(declination_deg))
        - tan_deg(latitude_deg) * tan_deg(declination_deg);
    acos_deg(cos_h)
}

/// Compute the solar parameters for `date` at `location`, with clock times at `utc_offset_hours`.
pub fn compute_solar_parameters(
    date: NaiveDate,
    location: &Location,
    utc_offset_hours: f64,
) -> Result<SolarParameters, SolarError> {
    if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(SolarError::InvalidUtcOffset(utc_offset_hours));
    }

    let position = solar_position(date)?;
    let latitude = location.latitude();

    let sunrise_hour_angle = hour_angle(90.0 - SUNRISE_ZENITH_DEG, latitude, position.declination)
        .ok_or(SolarError::NoSunriseOrSunset {
            date,
            latitude,
            declination: position.declination,
        })?;

    let solar_noon = solar_noon_hours(
        location.longitude(),
        position.equation_of_time_minutes,
        utc_offset_hours,
    );
    let half_day = sunrise_hour_angle / DEGREES_PER_HOUR;

    debug!(
        %date,
        latitude,
        longitude = location.longitude(),
        declination = position.declination,
        equation_of_time = position.equation_of_time_minutes,
        solar_noon,
        "computed solar parameters"
    );

    Ok(SolarParameters {
        date,
        location: *location,
        utc_offset_hours,
        position,
        sunrise_hour_angle,
        solar_noon,
        sunrise: solar_noon - half_day,
        sunset: solar_noon + half_day,
    })
}
