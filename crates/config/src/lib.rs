//! Site presets for the Prayer Times Calculator.
//!
//! A site bundles an observer position, its UTC offset, and the calculation
//! conventions used there. Convention names stay as plain strings here; the
//! facade crate parses them into the closed enums of `prayer_schedule`.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Observation site parsed from preset files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub utc_offset_hours: f64,
    #[serde(default = "default_convention")]
    pub convention: String,
    #[serde(default = "default_asr")]
    pub asr: String,
    #[serde(default)]
    pub precaution_minutes: Option<f64>,
}

fn default_convention() -> String {
    "omani".to_string()
}

fn default_asr() -> String {
    "standard".to_string()
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read site presets: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("site '{0}' not found in presets")]
    UnknownSite(String),
}

/// Load site presets from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<SiteConfig>, ConfigError> {
    load_records(path)
}

/// Find a site by name, ignoring case.
pub fn find_site<'a>(sites: &'a [SiteConfig], name: &str) -> Result<&'a SiteConfig, ConfigError> {
    let upper = name.trim().to_uppercase();
    sites
        .iter()
        .find(|site| site.name.to_uppercase() == upper)
        .ok_or_else(|| ConfigError::UnknownSite(name.to_string()))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn toml_directory_is_read_in_file_name_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("b_muscat.toml"),
            "name = \"Muscat\"\nlongitude = 58.4\nlatitude = 23.6\nutc_offset_hours = 4\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("a_cairo.toml"),
            "name = \"Cairo\"\nlongitude = 31.2\nlatitude = 30.0\nutc_offset_hours = 2\nconvention = \"egypt\"\nprecaution_minutes = 2\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sites = load_sites(dir.path()).expect("sites");
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].name, "Cairo");
        assert_eq!(sites[0].convention, "egypt");
        assert_eq!(sites[0].precaution_minutes, Some(2.0));
        assert_eq!(sites[1].convention, "omani");
        assert_eq!(sites[1].asr, "standard");
        assert_eq!(sites[1].precaution_minutes, None);
    }

    #[test]
    fn yaml_list_and_lookup() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sites.yaml");
        fs::write(
            &path,
            "- name: Karachi\n  longitude: 67.0\n  latitude: 24.86\n  utc_offset_hours: 5\n  convention: karachi\n  asr: hanafi\n",
        )
        .unwrap();

        let sites = load_sites(&path).expect("sites");
        let site = find_site(&sites, "karachi").expect("found");
        assert_eq!(site.asr, "hanafi");
        assert!(matches!(
            find_site(&sites, "Lahore"),
            Err(ConfigError::UnknownSite(name)) if name == "Lahore"
        ));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = \"x\"\nlongitude = \"east\"\n").unwrap();
        assert!(matches!(load_sites(&path), Err(ConfigError::Toml(_))));
    }
}
