use chrono::NaiveDate;
use prayer_times_calculator::Location;
use prayer_times_calculator::solar::{
    SolarError, compute_solar_parameters, hour_angle, solar_noon_hours, solar_position,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn interior_oman_midsummer_parameters() {
    let location = Location::new(57.1306229, 21.305724).expect("location");
    let solar = compute_solar_parameters(date(2017, 6, 25), &location, 4.0).expect("solar");

    assert_close(solar.position.julian_day, 2_457_929.71, 1e-9, "julian day");
    assert_close(solar.position.julian_century, 0.174_803_833, 1e-8, "julian century");
    assert_close(solar.declination(), 23.378_934, 1e-5, "declination");
    assert_close(solar.equation_of_time_minutes(), -2.639_966, 1e-5, "equation of time");
    assert_close(solar.sunrise_hour_angle, 100.695_977, 1e-5, "hour angle");
    assert_close(solar.solar_noon, 12.235_291, 1e-5, "solar noon");
    assert_close(solar.sunrise, 5.522_226, 1e-5, "sunrise");
    assert_close(solar.sunset, 18.948_356, 1e-5, "sunset");

    assert_eq!(solar.sunrise_clock().map(|t| t.to_string()).as_deref(), Some("05:31"));
    assert_eq!(solar.solar_noon_clock().map(|t| t.to_string()).as_deref(), Some("12:14"));
    assert_eq!(solar.sunset_clock().map(|t| t.to_string()).as_deref(), Some("18:57"));
}

#[test]
fn sunrise_and_sunset_are_symmetric_about_noon() {
    let location = Location::new(31.2357, 30.0444).expect("location");
    let solar = compute_solar_parameters(date(2021, 3, 1), &location, 2.0).expect("solar");
    assert_close(
        solar.solar_noon - solar.sunrise,
        solar.sunset - solar.solar_noon,
        1e-12,
        "half day",
    );
}

#[test]
fn polar_night_has_no_sunrise() {
    let location = Location::new(0.0, 85.0).expect("location");
    let err = compute_solar_parameters(date(2017, 12, 21), &location, 0.0)
        .expect_err("polar night must not produce a sunrise");
    assert!(matches!(err, SolarError::NoSunriseOrSunset { latitude, .. } if latitude == 85.0));
}

#[test]
fn polar_day_has_no_sunset() {
    let location = Location::new(0.0, 85.0).expect("location");
    let err = compute_solar_parameters(date(2017, 6, 21), &location, 0.0)
        .expect_err("midnight sun must not produce a sunset");
    assert!(matches!(err, SolarError::NoSunriseOrSunset { .. }));
}

#[test]
fn equator_hour_angles_are_defined_all_year() {
    let start = date(2017, 1, 1);
    for day in start.iter_days().take(365) {
        let declination = solar_position(day).expect("position").declination;
        for altitude in [-0.833, -15.0, -17.0, -17.5, -18.0, -18.5, -19.5] {
            let angle = hour_angle(altitude, 0.0, declination)
                .unwrap_or_else(|| panic!("undefined at {altitude}° on {day}"));
            assert!(angle.is_finite() && angle > 90.0 && angle < 112.0);
        }
    }
}

#[test]
fn solar_noon_moves_earlier_eastward() {
    let equation_of_time = solar_position(date(2017, 6, 25))
        .expect("position")
        .equation_of_time_minutes;
    let mut previous = f64::INFINITY;
    let mut longitude = -180.0;
    while longitude <= 180.0 {
        let noon_utc = solar_noon_hours(longitude, equation_of_time, 0.0);
        assert!(noon_utc < previous, "noon did not decrease at {longitude}°");
        previous = noon_utc;
        longitude += 7.5;
    }
}

#[test]
fn utc_offset_shifts_every_event_by_the_same_amount() {
    let location = Location::new(-74.006, 40.7128).expect("location");
    let utc = compute_solar_parameters(date(2019, 9, 10), &location, 0.0).expect("utc");
    let local = compute_solar_parameters(date(2019, 9, 10), &location, -4.0).expect("local");
    assert_close(utc.solar_noon - local.solar_noon, 4.0, 1e-12, "noon shift");
    assert_close(utc.sunrise - local.sunrise, 4.0, 1e-12, "sunrise shift");
    assert_close(utc.sunset - local.sunset, 4.0, 1e-12, "sunset shift");
}

#[test]
fn out_of_range_utc_offset_is_rejected() {
    let location = Location::new(0.0, 0.0).expect("location");
    assert!(matches!(
        compute_solar_parameters(date(2017, 6, 25), &location, 15.0),
        Err(SolarError::InvalidUtcOffset(offset)) if offset == 15.0
    ));
    assert!(compute_solar_parameters(date(2017, 6, 25), &location, f64::NAN).is_err());
}
