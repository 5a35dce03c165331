//! One-day pipeline: observation request → solar model → prayer calculator.

use chrono::NaiveDate;
use prayer_config::SiteConfig;
use prayer_core::constants::DEFAULT_PRECAUTION_MINUTES;
use prayer_core::{Location, LocationError};
use prayer_export::Row;
use prayer_schedule::{
    AsrConvention, ConventionError, FajrIshaConvention, Prayer, PrayerCalculator, PrayerHours,
    PrayerSchedule, ScheduleError,
};
use prayer_solar::{SolarError, SolarParameters, compute_solar_parameters};
use thiserror::Error;
use tracing::debug;

/// Top-level error for schedule requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrayerTimesError {
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] LocationError),
    #[error("solar model failed: {0}")]
    Solar(#[from] SolarError),
    #[error("schedule calculation failed: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("invalid convention: {0}")]
    InvalidConvention(#[from] ConventionError),
    #[error("a {days}-day timetable starting {start} runs past the last representable date")]
    DateOutOfRange { start: NaiveDate, days: usize },
}

impl PrayerTimesError {
    /// True when the sun never crosses a required altitude on that day (polar day or night,
    /// twilight that never deepens far enough, or an Asr elevation the sun never reaches).
    pub fn is_polar(&self) -> bool {
        matches!(
            self,
            PrayerTimesError::Solar(SolarError::NoSunriseOrSunset { .. })
                | PrayerTimesError::Schedule(ScheduleError::NoSunriseOrSunset { .. })
        )
    }
}

/// Everything needed to compute one day's schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationRequest {
    pub date: NaiveDate,
    pub utc_offset_hours: f64,
    pub location: Location,
    pub convention: FajrIshaConvention,
    pub asr: AsrConvention,
    pub precaution_minutes: f64,
}

impl ObservationRequest {
    /// Request with the default conventions (Omani, standard Asr) and a five-minute precaution.
    pub fn new(date: NaiveDate, utc_offset_hours: f64, location: Location) -> Self {
        Self {
            date,
            utc_offset_hours,
            location,
            convention: FajrIshaConvention::default(),
            asr: AsrConvention::default(),
            precaution_minutes: DEFAULT_PRECAUTION_MINUTES,
        }
    }

    /// Build a request from an untyped site preset.
    pub fn from_site(site: &SiteConfig, date: NaiveDate) -> Result<Self, PrayerTimesError> {
        let location = Location::new(site.longitude, site.latitude)?;
        let convention = site.convention.parse::<FajrIshaConvention>()?;
        let asr = site.asr.parse::<AsrConvention>()?;
        Ok(Self {
            convention,
            asr,
            precaution_minutes: site.precaution_minutes.unwrap_or(DEFAULT_PRECAUTION_MINUTES),
            ..Self::new(date, site.utc_offset_hours, location)
        })
    }

    pub fn with_convention(mut self, convention: FajrIshaConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_asr(mut self, asr: AsrConvention) -> Self {
        self.asr = asr;
        self
    }

    pub fn with_precaution_minutes(mut self, minutes: f64) -> Self {
        self.precaution_minutes = minutes;
        self
    }

    /// The same request on another date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn calculator(&self) -> Result<PrayerCalculator, ScheduleError> {
        PrayerCalculator::new(self.convention, self.asr)
            .with_precaution_minutes(self.precaution_minutes)
    }
}

/// Result of a one-day computation.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPrayers {
    pub date: NaiveDate,
    pub solar: SolarParameters,
    pub hours: PrayerHours,
    pub schedule: PrayerSchedule,
}

impl DailyPrayers {
    /// Flatten into an export row.
    pub fn to_row(&self) -> Row {
        let at = |prayer| self.schedule.get(prayer);
        Row {
            date: self.date,
            fajr: at(Prayer::Fajr),
            sunrise: at(Prayer::Sunrise),
            dhuhur: at(Prayer::Dhuhur),
            asr: at(Prayer::Asr),
            maghrib: at(Prayer::Maghrib),
            isha: at(Prayer::Isha),
            midnight: at(Prayer::Midnight),
        }
    }
}

/// Compute the schedule for a single request.
pub fn compute_day(request: &ObservationRequest) -> Result<DailyPrayers, PrayerTimesError> {
    let calculator = request.calculator()?;
    let solar = compute_solar_parameters(request.date, &request.location, request.utc_offset_hours)?;
    let hours = calculator.compute_hours(&solar)?;
    let schedule = hours.to_schedule()?;
    debug!(date = %request.date, convention = %request.convention, "schedule ready");
    Ok(DailyPrayers {
        date: request.date,
        solar,
        hours,
        schedule,
    })
}
