use std::io::{self, Write};

use prayer_times_calculator::timetable::Timetable;
use prayer_times_calculator::DailyPrayers;

/// Console rendering: a header block, then one block per day.
pub fn write_text(writer: &mut dyn Write, timetable: &Timetable, show_solar: bool) -> io::Result<()> {
    let request = &timetable.request;
    writeln!(writer, "=== Prayer Times ===")?;
    writeln!(
        writer,
        "Location   : {} (UTC{})",
        format_coordinates(request.location.latitude(), request.location.longitude()),
        format_offset(request.utc_offset_hours)
    )?;
    writeln!(
        writer,
        "Convention : {} (Fajr {}°), Asr {}",
        request.convention,
        request.convention.fajr_angle(),
        request.asr
    )?;
    writeln!(writer, "Precaution : {} min", request.precaution_minutes)?;

    for day in &timetable.days {
        writeln!(writer)?;
        write_day(writer, day, show_solar)?;
    }
    writer.flush()
}

fn write_day(writer: &mut dyn Write, day: &DailyPrayers, show_solar: bool) -> io::Result<()> {
    writeln!(writer, "{}", day.date.format("%A %Y-%m-%d"))?;
    for entry in &day.schedule {
        writeln!(writer, "  {:<9}{}", entry.prayer.label(), entry.time)?;
    }
    if show_solar {
        let solar = &day.solar;
        writeln!(
            writer,
            "  solar    : declination {:.4}°, equation of time {:.2} min",
            solar.declination(),
            solar.equation_of_time_minutes()
        )?;
        writeln!(
            writer,
            "             noon {:.4} h, sunrise {:.4} h, sunset {:.4} h, hour angle {:.4}°",
            solar.solar_noon, solar.sunrise, solar.sunset, solar.sunrise_hour_angle
        )?;
        writeln!(
            writer,
            "             day length {}",
            format_minutes(day_length_minutes(solar.sunrise, solar.sunset))
        )?;
    }
    Ok(())
}

fn format_coordinates(latitude: f64, longitude: f64) -> String {
    let ns = if latitude >= 0.0 { 'N' } else { 'S' };
    let ew = if longitude >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}°{ns}, {:.4}°{ew}", latitude.abs(), longitude.abs())
}

fn format_offset(hours: f64) -> String {
    let sign = if hours < 0.0 { '-' } else { '+' };
    let total = (hours.abs() * 60.0).round() as u32;
    format!("{sign}{:02}:{:02}", total / 60, total % 60)
}

/// Sunrise to sunset, without the Maghrib precaution.
fn day_length_minutes(sunrise: f64, sunset: f64) -> u32 {
    ((sunset - sunrise) * 60.0).round().max(0.0) as u32
}

fn format_minutes(minutes: u32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_render_as_hours_and_minutes() {
        assert_eq!(format_offset(4.0), "+04:00");
        assert_eq!(format_offset(-3.5), "-03:30");
        assert_eq!(format_offset(5.75), "+05:45");
    }

    #[test]
    fn day_length_runs_from_sunrise_to_sunset() {
        // Interior Oman, 2017-06-25: 805.6 minutes of daylight.
        assert_eq!(format_minutes(day_length_minutes(5.522_226, 18.948_356)), "13h 26m");
        assert_eq!(format_minutes(day_length_minutes(6.0, 18.0)), "12h 00m");
    }

    #[test]
    fn coordinates_carry_hemisphere_letters() {
        assert_eq!(format_coordinates(-33.9, 18.4), "33.9000°S, 18.4000°E");
        assert_eq!(format_coordinates(51.5, -0.1278), "51.5000°N, 0.1278°W");
    }
}
