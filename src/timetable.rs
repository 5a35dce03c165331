//! Schedules for a run of consecutive days (e.g. a monthly timetable).

use chrono::Days;
use prayer_export::Row;
use prayer_export::json::Metadata;
use tracing::info_span;

use crate::daily::{DailyPrayers, ObservationRequest, PrayerTimesError, compute_day};

/// Consecutive daily schedules sharing one location and convention set.
#[derive(Debug, Clone)]
pub struct Timetable {
    pub request: ObservationRequest,
    pub days: Vec<DailyPrayers>,
}

impl Timetable {
    pub fn rows(&self) -> Vec<Row> {
        self.days.iter().map(DailyPrayers::to_row).collect()
    }

    pub fn metadata<'a>(&self, site: Option<&'a str>) -> Metadata<'a> {
        Metadata {
            site,
            longitude: self.request.location.longitude(),
            latitude: self.request.location.latitude(),
            utc_offset_hours: self.request.utc_offset_hours,
            convention: self.request.convention.token(),
            asr: self.request.asr.token(),
            precaution_minutes: self.request.precaution_minutes,
        }
    }
}

/// Compute `days` schedules starting at `request.date`.
///
/// The first failing day aborts the whole table; no partial table is returned.
/// A run that would pass `NaiveDate::MAX` is rejected up front.
pub fn compute_timetable(
    request: &ObservationRequest,
    days: usize,
) -> Result<Timetable, PrayerTimesError> {
    let _span = info_span!("timetable", start = %request.date, days).entered();
    let last_offset = days.saturating_sub(1) as u64;
    if request.date.checked_add_days(Days::new(last_offset)).is_none() {
        return Err(PrayerTimesError::DateOutOfRange {
            start: request.date,
            days,
        });
    }
    let days = request
        .date
        .iter_days()
        .take(days)
        .map(|date| compute_day(&request.on(date)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Timetable {
        request: *request,
        days,
    })
}
