//! Interchange records and saved batch reports.
//!
//! A [`StarReport`] is the flat, serializable view of a [`StarRecord`]; a
//! [`BatchReport`] bundles a whole run for the JSON file written by
//! [`save_reports`].

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::core::angle::{format_degrees, format_hours};
use crate::core::catalog::Catalog;
use crate::core::error::{Result, ResultExt, StarmapError};
use crate::core::models::StarRecord;

use super::text_report::TextReportWriter;

// =============================================================================
// Star Report
// =============================================================================

/// Coordinates in decimal and sexagesimal notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCoordinates {
    pub ra_hours: f64,
    pub dec_degrees: f64,
    /// `HH:MM:SS`
    pub ra_formatted: String,
    /// `±DD°MM'SS"`
    pub dec_formatted: String,
}

/// Nearest reference star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosestStar {
    pub name: String,
    /// Planar distance, rounded to hundredths
    pub distance_deg: f64,
}

/// Serializable summary of one star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarReport {
    pub id: usize,
    pub word: String,
    /// Leading bits, `...` appended when cut short
    pub binary: String,
    pub binary_length: usize,
    pub coordinates: ReportCoordinates,
    pub closest_star: ClosestStar,
    pub brightness: f64,
    pub color: String,
    pub constellation: String,
}

impl StarReport {
    /// Summarize a record, keeping at most `preview_bits` bits of its binary.
    pub fn from_record(record: &StarRecord, preview_bits: usize) -> Self {
        let azimuth = record.coordinate.azimuth();
        let polar = record.coordinate.polar();
        Self {
            id: record.id,
            word: record.word.clone(),
            binary: record.bits.preview(preview_bits),
            binary_length: record.bit_length(),
            coordinates: ReportCoordinates {
                ra_hours: azimuth,
                dec_degrees: polar,
                ra_formatted: format_hours(azimuth),
                dec_formatted: format_degrees(polar),
            },
            closest_star: ClosestStar {
                name: record.nearest.name.clone(),
                distance_deg: round2(record.nearest_distance),
            },
            brightness: round2(record.brightness),
            color: record.color.name().to_string(),
            constellation: record.constellation.clone(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Batch Report
// =============================================================================

/// A whole run, as saved to `star_map_<timestamp>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// RFC 3339 generation time
    pub generated: String,
    pub words: Vec<String>,
    pub stars: Vec<StarReport>,
    pub constellations: Vec<String>,
    pub bright_stars: Vec<String>,
}

impl BatchReport {
    /// Assemble a report stamped with `generated`.
    pub fn new(
        generated: DateTime<Local>,
        words: &[String],
        records: &[StarRecord],
        catalog: &Catalog,
        preview_bits: usize,
    ) -> Self {
        Self {
            generated: generated.to_rfc3339(),
            words: words.to_vec(),
            stars: records
                .iter()
                .map(|r| StarReport::from_record(r, preview_bits))
                .collect(),
            constellations: catalog.region_names(),
            bright_stars: catalog.star_names(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// =============================================================================
// Persistence
// =============================================================================

/// Paths written by [`save_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReports {
    pub json: PathBuf,
    pub text: PathBuf,
}

/// File stem timestamp, e.g. `20240131_235959`.
pub fn file_stamp(at: &DateTime<Local>) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// Write the JSON batch report and the text report into `dir`.
pub fn save_reports(
    dir: &Path,
    words: &[String],
    records: &[StarRecord],
    catalog: &Catalog,
    preview_bits: usize,
) -> Result<SavedReports> {
    save_reports_at(dir, Local::now(), words, records, catalog, preview_bits)
}

/// [`save_reports`] with an explicit timestamp.
pub fn save_reports_at(
    dir: &Path,
    at: DateTime<Local>,
    words: &[String],
    records: &[StarRecord],
    catalog: &Catalog,
    preview_bits: usize,
) -> Result<SavedReports> {
    fs::create_dir_all(dir)
        .map_err(StarmapError::from)
        .context(format!("creating {}", dir.display()))?;

    let stamp = file_stamp(&at);
    let json_path = dir.join(format!("star_map_{}.json", stamp));
    let text_path = dir.join(format!("star_map_report_{}.txt", stamp));

    let report = BatchReport::new(at, words, records, catalog, preview_bits);
    fs::write(&json_path, report.to_json()?)
        .map_err(StarmapError::from)
        .context(format!("writing {}", json_path.display()))?;

    let file = File::create(&text_path)
        .map_err(StarmapError::from)
        .context(format!("creating {}", text_path.display()))?;
    let mut writer = TextReportWriter::new(BufWriter::new(file));
    writer
        .write_report(&at, words, records)
        .and_then(|_| writer.flush())
        .context(format!("writing {}", text_path.display()))?;

    Ok(SavedReports {
        json: json_path,
        text: text_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forge::StarForge;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 14, 21, 5, 9).unwrap()
    }

    #[test]
    fn test_star_report_fields() {
        let record = StarForge::default().forge("hello", 1).unwrap();
        let report = StarReport::from_record(&record, 64);

        assert_eq!(report.word, "hello");
        assert_eq!(report.binary, "0110100001100101011011000110110001101111");
        assert_eq!(report.binary_length, 40);
        assert_eq!(report.coordinates.ra_formatted, "01:15:57");
        assert_eq!(report.coordinates.dec_formatted, "+21°13'20\"");
        assert_eq!(report.closest_star.name, "Regulus");
        assert_eq!(report.closest_star.distance_deg, 12.82);
        assert_eq!(report.brightness, 2.1);
        assert_eq!(report.color, "white");
    }

    #[test]
    fn test_star_report_truncates_binary() {
        let record = StarForge::default().forge("constellation", 1).unwrap();
        let report = StarReport::from_record(&record, 64);
        assert_eq!(report.binary_length, 104);
        assert_eq!(report.binary.len(), 67);
        assert!(report.binary.ends_with("..."));
    }

    #[test]
    fn test_batch_report_json_shape() {
        let words = vec!["sun".to_string(), "moon".to_string()];
        let records = StarForge::default().forge_all(&words).unwrap();
        let report = BatchReport::new(fixed_time(), &words, &records, Catalog::builtin(), 64);

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(value["generated"].as_str().unwrap().starts_with("2024-03-14T21:05:09"));
        assert_eq!(value["words"].as_array().unwrap().len(), 2);
        assert_eq!(value["stars"][1]["word"], "moon");
        assert_eq!(value["constellations"][0], "Ursa Major");
        assert_eq!(value["bright_stars"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_save_reports_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let words = vec!["comet".to_string()];
        let records = StarForge::default().forge_all(&words).unwrap();

        let saved = save_reports_at(
            dir.path(),
            fixed_time(),
            &words,
            &records,
            Catalog::builtin(),
            64,
        )
        .unwrap();

        assert_eq!(saved.json.file_name().unwrap(), "star_map_20240314_210509.json");
        assert_eq!(
            saved.text.file_name().unwrap(),
            "star_map_report_20240314_210509.txt"
        );

        let parsed: BatchReport =
            serde_json::from_str(&fs::read_to_string(&saved.json).unwrap()).unwrap();
        assert_eq!(parsed.stars[0].word, "comet");

        let text = fs::read_to_string(&saved.text).unwrap();
        assert!(text.contains("Star #1: 'comet'"));
    }
}
