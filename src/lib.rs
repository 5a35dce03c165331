//! Daily Islamic prayer times from a solar position model.
//!
//! The workspace crates are re-exported here so front-ends (the CLI, a web
//! service) depend on one library. [`daily`] runs the solar model and the
//! prayer calculator for one date; [`timetable`] repeats that over a span of
//! consecutive days.

pub mod daily;
pub mod timetable;

pub use daily::{DailyPrayers, ObservationRequest, PrayerTimesError, compute_day};
pub use prayer_config as config;
pub use prayer_core as common;
pub use prayer_core::{ClockTime, Location, LocationError};
pub use prayer_export as export;
pub use prayer_schedule as schedule;
pub use prayer_schedule::{AsrConvention, FajrIshaConvention, Prayer, PrayerSchedule};
pub use prayer_solar as solar;
pub use timetable::{Timetable, compute_timetable};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
