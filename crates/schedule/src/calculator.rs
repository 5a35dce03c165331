//! Sun-angle thresholds to prayer hours.

use prayer_core::angles::{atan_deg, tan_deg};
use prayer_core::constants::{DEFAULT_PRECAUTION_MINUTES, DEGREES_PER_HOUR, MINUTES_PER_HOUR};
use prayer_solar::SolarParameters;
use tracing::trace;

use crate::conventions::{AsrConvention, FajrIshaConvention, IshaRule};
use crate::{Prayer, PrayerHours, PrayerSchedule, ScheduleError};

/// Computes the daily schedule for one convention pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerCalculator {
    convention: FajrIshaConvention,
    asr: AsrConvention,
    precaution_minutes: f64,
}

impl Default for PrayerCalculator {
    fn default() -> Self {
        Self::new(FajrIshaConvention::default(), AsrConvention::default())
    }
}

impl PrayerCalculator {
    /// Calculator with the default five-minute precaution margin.
    pub fn new(convention: FajrIshaConvention, asr: AsrConvention) -> Self {
        Self {
            convention,
            asr,
            precaution_minutes: DEFAULT_PRECAUTION_MINUTES,
        }
    }

    /// Override the margin added after Dhuhur, Asr, and Maghrib.
    pub fn with_precaution_minutes(mut self, minutes: f64) -> Result<Self, ScheduleError> {
        if !minutes.is_finite() || minutes < 0.0 {
            return Err(ScheduleError::InvalidPrecaution(minutes));
        }
        self.precaution_minutes = minutes;
        Ok(self)
    }

    pub fn convention(&self) -> FajrIshaConvention {
        self.convention
    }

    pub fn asr_convention(&self) -> AsrConvention {
        self.asr
    }

    pub fn precaution_minutes(&self) -> f64 {
        self.precaution_minutes
    }

    /// Fractional local hours for all seven instants.
    pub fn compute_hours(&self, solar: &SolarParameters) -> Result<PrayerHours, ScheduleError> {
        let precaution = self.precaution_minutes / MINUTES_PER_HOUR;

        let fajr = solar.solar_noon
            - twilight_hour_angle(solar, Prayer::Fajr, self.convention.fajr_angle())?
                / DEGREES_PER_HOUR;
        let sunrise = solar.sunrise;
        let dhuhur = solar.solar_noon + precaution;
        let asr = solar.solar_noon + asr_hour_angle(solar, self.asr)? / DEGREES_PER_HOUR + precaution;
        let maghrib = solar.sunset + precaution;
        let isha = match self.convention.isha_rule() {
            IshaRule::AfterMaghrib(minutes) => maghrib + minutes / MINUTES_PER_HOUR,
            IshaRule::Depression(angle) => {
                solar.solar_noon + twilight_hour_angle(solar, Prayer::Isha, angle)? / DEGREES_PER_HOUR
            }
        };
        // Midpoint of Fajr and sunset, shifted twelve hours.
        let midnight = 12.0 + (fajr + solar.sunset) / 2.0;

        let hours = PrayerHours {
            fajr,
            sunrise,
            dhuhur,
            asr,
            maghrib,
            isha,
            midnight,
        };
        trace!(?hours, convention = %self.convention, asr = %self.asr, "prayer hours");
        Ok(hours)
    }

    /// Clock times for all seven instants.
    pub fn compute_schedule(&self, solar: &SolarParameters) -> Result<PrayerSchedule, ScheduleError> {
        self.compute_hours(solar)?.to_schedule()
    }
}

/// Compute the schedule for `solar` under the given conventions and precaution margin.
pub fn compute_schedule(
    solar: &SolarParameters,
    convention: FajrIshaConvention,
    asr: AsrConvention,
    precaution_minutes: f64,
) -> Result<PrayerSchedule, ScheduleError> {
    PrayerCalculator::new(convention, asr)
        .with_precaution_minutes(precaution_minutes)?
        .compute_schedule(solar)
}

/// Hour angle at which the sun is `depression` degrees below the horizon.
fn twilight_hour_angle(
    solar: &SolarParameters,
    prayer: Prayer,
    depression: f64,
) -> Result<f64, ScheduleError> {
    solar
        .hour_angle_at(-depression)
        .ok_or_else(|| unreachable_angle(solar, prayer))
}

/// Hour angle at which an object's shadow exceeds its noon shadow by `k` times its height.
fn asr_hour_angle(solar: &SolarParameters, asr: AsrConvention) -> Result<f64, ScheduleError> {
    // A non-positive shadow term leaves the Asr elevation undefined.
    let shadow = asr.shadow_ratio() + tan_deg(solar.latitude() - solar.declination());
    if shadow <= 0.0 {
        return Err(unreachable_angle(solar, Prayer::Asr));
    }
    let altitude = atan_deg(1.0 / shadow);
    solar
        .hour_angle_at(altitude)
        .ok_or_else(|| unreachable_angle(solar, Prayer::Asr))
}

fn unreachable_angle(solar: &SolarParameters, prayer: Prayer) -> ScheduleError {
    ScheduleError::NoSunriseOrSunset {
        prayer,
        latitude: solar.latitude(),
        declination: solar.declination(),
    }
}
