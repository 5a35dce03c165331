//! Daily prayer schedule derived from the solar model.

pub mod calculator;
pub mod conventions;

use std::fmt;

use prayer_core::ClockTime;
use serde::Serialize;
use thiserror::Error;

pub use calculator::{PrayerCalculator, compute_schedule};
pub use conventions::{AsrConvention, ConventionError, FajrIshaConvention, IshaRule};

/// Named instants of the daily schedule, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhur,
    Asr,
    Maghrib,
    Isha,
    Midnight,
}

impl Prayer {
    pub const ALL: [Prayer; 7] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhur,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
        Prayer::Midnight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhur => "Dhuhur",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
            Prayer::Midnight => "Midnight",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised while turning solar parameters into a schedule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error(
        "the sun never reaches the {prayer} angle at latitude {latitude}° (declination {declination:.3}°)"
    )]
    NoSunriseOrSunset {
        prayer: Prayer,
        latitude: f64,
        declination: f64,
    },
    #[error("precaution of {0} minutes must be a finite, non-negative number")]
    InvalidPrecaution(f64),
    #[error("{prayer} falls at a non-finite hour")]
    NonFiniteTime { prayer: Prayer },
}

/// Prayer times as fractional local hours, before clock rounding.
///
/// Values may fall outside `[0, 24)` when the location and offset push an
/// event into the neighbouring day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrayerHours {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhur: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
    pub midnight: f64,
}

impl PrayerHours {
    pub fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhur => self.dhuhur,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::Midnight => self.midnight,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, f64)> + '_ {
        Prayer::ALL.into_iter().map(|prayer| (prayer, self.get(prayer)))
    }

    /// Round every entry to a wall-clock time.
    pub fn to_schedule(&self) -> Result<PrayerSchedule, ScheduleError> {
        let mut entries = Vec::with_capacity(Prayer::ALL.len());
        for (prayer, hours) in self.iter() {
            let time = ClockTime::from_fractional_hours(hours)
                .ok_or(ScheduleError::NonFiniteTime { prayer })?;
            entries.push(ScheduledPrayer { prayer, time });
        }
        Ok(PrayerSchedule { entries })
    }
}

/// One row of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledPrayer {
    pub prayer: Prayer,
    pub time: ClockTime,
}

/// The seven daily instants as clock times, always in [`Prayer::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrayerSchedule {
    entries: Vec<ScheduledPrayer>,
}

impl PrayerSchedule {
    pub fn get(&self, prayer: Prayer) -> ClockTime {
        self.entries[prayer.index()].time
    }

    pub fn entries(&self) -> &[ScheduledPrayer] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledPrayer> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PrayerSchedule {
    type Item = &'a ScheduledPrayer;
    type IntoIter = std::slice::Iter<'a, ScheduledPrayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
