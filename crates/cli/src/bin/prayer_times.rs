use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, ValueEnum};
use prayer_times_calculator::config::{find_site, load_sites};
use prayer_times_calculator::export::json::write_timetable_json;
use prayer_times_calculator::export::timetable::{write_csv, writer_for_path};
use prayer_times_calculator::{
    AsrConvention, FajrIshaConvention, Location, ObservationRequest, compute_timetable,
};
use tracing::info;

#[path = "prayer_times/logging.rs"]
mod logging;
#[path = "prayer_times/render.rs"]
mod render;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Daily prayer times from a solar position model"
)]
struct Cli {
    /// Observer longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Observer latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Local offset from UTC in hours (e.g. 4, -5, 5.5)
    #[arg(long, allow_negative_numbers = true)]
    utc_offset: Option<f64>,

    /// First day of the timetable (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Fajr/Isha convention (omani, mwl, isna, egypt, umm_alqura, karachi, north_america)
    #[arg(long)]
    school: Option<FajrIshaConvention>,

    /// Asr convention (standard or hanafi)
    #[arg(long)]
    asr: Option<AsrConvention>,

    /// Minutes added after Dhuhur, Asr and Maghrib
    #[arg(long)]
    precaution: Option<f64>,

    /// Number of consecutive days to compute
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=366))]
    days: u32,

    /// Site preset name (case-insensitive); explicit flags override its values
    #[arg(long)]
    site: Option<String>,

    /// Preset file or directory used with --site
    #[arg(long, default_value = "configs/sites")]
    sites: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Print the solar parameters behind each day
    #[arg(long, default_value_t = false)]
    show_solar: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let (request, site_name) = build_request(&cli, date)?;
    info!(site = site_name.as_deref(), %date, days = cli.days, "computing timetable");

    let timetable = compute_timetable(&request, cli.days as usize)
        .with_context(|| format!("failed to compute prayer times starting {date}"))?;

    let mut writer = writer_for_path(&cli.output)
        .with_context(|| format!("failed to open {}", cli.output.display()))?;
    match cli.format {
        OutputFormat::Text => render::write_text(&mut *writer, &timetable, cli.show_solar)?,
        OutputFormat::Csv => write_csv(&mut *writer, &timetable.rows())?,
        OutputFormat::Json => write_timetable_json(
            &mut *writer,
            &timetable.metadata(site_name.as_deref()),
            &timetable.rows(),
        )?,
    }
    Ok(())
}

/// Resolve flags and the optional preset into a request, plus the preset's display name.
fn build_request(
    cli: &Cli,
    date: NaiveDate,
) -> anyhow::Result<(ObservationRequest, Option<String>)> {
    let (mut request, site_name) = match &cli.site {
        Some(name) => {
            let sites = load_sites(&cli.sites)
                .with_context(|| format!("failed to load presets from {}", cli.sites.display()))?;
            let site = find_site(&sites, name)?;
            let mut request = ObservationRequest::from_site(site, date)?;
            if cli.longitude.is_some() || cli.latitude.is_some() {
                request.location = Location::new(
                    cli.longitude.unwrap_or(site.longitude),
                    cli.latitude.unwrap_or(site.latitude),
                )?;
            }
            if let Some(offset) = cli.utc_offset {
                request.utc_offset_hours = offset;
            }
            (request, Some(site.name.clone()))
        }
        None => {
            let (Some(longitude), Some(latitude), Some(offset)) =
                (cli.longitude, cli.latitude, cli.utc_offset)
            else {
                bail!("--longitude, --latitude and --utc-offset are required without --site");
            };
            let location = Location::new(longitude, latitude)?;
            (ObservationRequest::new(date, offset, location), None)
        }
    };

    if let Some(school) = cli.school {
        request = request.with_convention(school);
    }
    if let Some(asr) = cli.asr {
        request = request.with_asr(asr);
    }
    if let Some(minutes) = cli.precaution {
        request = request.with_precaution_minutes(minutes);
    }
    Ok((request, site_name))
}
