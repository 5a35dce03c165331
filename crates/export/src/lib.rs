//! Export helpers for CSV and JSON timetables.

use chrono::NaiveDate;
use prayer_core::ClockTime;
use serde::Serialize;

/// One day of a timetable, columns in schedule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Row {
    pub date: NaiveDate,
    pub fajr: ClockTime,
    pub sunrise: ClockTime,
    pub dhuhur: ClockTime,
    pub asr: ClockTime,
    pub maghrib: ClockTime,
    pub isha: ClockTime,
    pub midnight: ClockTime,
}

pub mod timetable {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use super::Row;

    const HEADER: &str = "date,fajr,sunrise,dhuhur,asr,maghrib,isha,midnight";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the timetable CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    impl Row {
        /// Serialize the row to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{}",
                self.date,
                self.fajr,
                self.sunrise,
                self.dhuhur,
                self.asr,
                self.maghrib,
                self.isha,
                self.midnight,
            )
        }
    }

    /// Header plus one line per row.
    pub fn write_csv(writer: &mut dyn Write, rows: &[Row]) -> io::Result<()> {
        write_header(writer)?;
        for row in rows {
            row.write_to(writer)?;
        }
        writer.flush()
    }
}

pub mod json {
    use std::io::{self, Write};

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use super::Row;

    /// Site and convention metadata written alongside the rows.
    #[derive(Debug, Clone, Serialize)]
    pub struct Metadata<'a> {
        pub site: Option<&'a str>,
        pub longitude: f64,
        pub latitude: f64,
        pub utc_offset_hours: f64,
        pub convention: &'a str,
        pub asr: &'a str,
        pub precaution_minutes: f64,
    }

    #[derive(Serialize)]
    struct Document<'a> {
        #[serde(flatten)]
        meta: &'a Metadata<'a>,
        days: &'a [Row],
    }

    /// Write a pretty-printed JSON timetable.
    pub fn write_timetable_json(
        writer: &mut dyn Write,
        meta: &Metadata<'_>,
        rows: &[Row],
    ) -> io::Result<()> {
        to_writer_pretty(&mut *writer, &Document { meta, days: rows })?;
        writeln!(writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(h: u8, m: u8) -> ClockTime {
        ClockTime::new(h, m).unwrap()
    }

    fn sample_row() -> Row {
        Row {
            date: NaiveDate::from_ymd_opt(2017, 6, 25).unwrap(),
            fajr: clock(4, 6),
            sunrise: clock(5, 31),
            dhuhur: clock(12, 19),
            asr: clock(15, 30),
            maghrib: clock(19, 2),
            isha: clock(20, 22),
            midnight: clock(23, 32),
        }
    }

    #[test]
    fn csv_rows_follow_header_order() {
        let mut buffer = Vec::new();
        timetable::write_csv(&mut buffer, &[sample_row()]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("date,fajr,sunrise,dhuhur,asr,maghrib,isha,midnight")
        );
        assert_eq!(
            lines.next(),
            Some("2017-06-25,04:06,05:31,12:19,15:30,19:02,20:22,23:32")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn json_document_flattens_metadata() {
        let meta = json::Metadata {
            site: Some("Muscat"),
            longitude: 57.13,
            latitude: 21.31,
            utc_offset_hours: 4.0,
            convention: "omani",
            asr: "standard",
            precaution_minutes: 5.0,
        };
        let mut buffer = Vec::new();
        json::write_timetable_json(&mut buffer, &meta, &[sample_row()]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["site"], "Muscat");
        assert_eq!(value["convention"], "omani");
        assert_eq!(value["days"][0]["date"], "2017-06-25");
        assert_eq!(value["days"][0]["isha"], "20:22");
    }

    #[test]
    fn writer_for_path_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out/table.csv");
        {
            let mut writer = timetable::writer_for_path(&path).unwrap();
            timetable::write_csv(&mut *writer, &[sample_row()]).unwrap();
        }
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("date,fajr"));
    }
}
