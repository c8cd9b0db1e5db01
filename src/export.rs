//! The dashboard export pipeline: query the store, shape the rows into
//! the three JSON artifacts, write them, and report statistics.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::db::repository::{category, medication};
use crate::db::{self, DatabaseError};
use crate::models::{CategoryReport, Classification, MedicationDetail, MedicationRecord, MedicationSummary};
use crate::stats::DashboardStats;

/// Status shown for medications still awaiting formulary review.
pub const STATUS_NEEDS_REVIEW: &str = "NEEDS_REVIEW";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reduce a medication row to the fields the table view needs.
pub fn summarize(medications: &[MedicationRecord]) -> Vec<MedicationSummary> {
    medications
        .iter()
        .map(|med| MedicationSummary {
            id: med.id,
            name: med.name.clone(),
            status: med
                .status
                .clone()
                .unwrap_or_else(|| STATUS_NEEDS_REVIEW.to_string()),
            topical_only: med.topical_only,
            level4_code: med.level4_code.clone(),
            level4_name: med.level4_name.clone(),
            ahfs_category: med.ahfs_category.clone(),
            who_mapping_type: med.who_mapping_type.clone(),
            who_mapping_notes: med.who_mapping_notes.clone(),
        })
        .collect()
}

/// Nest each medication row into the full-detail shape, keyed by its id
/// rendered as a string. One entry per row.
pub fn full_detail(medications: &[MedicationRecord]) -> BTreeMap<String, MedicationDetail> {
    medications
        .iter()
        .map(|med| {
            let detail = MedicationDetail {
                id: med.id,
                name: med.name.clone(),
                status: med
                    .status
                    .clone()
                    .unwrap_or_else(|| STATUS_NEEDS_REVIEW.to_string()),
                topical_only: med.topical_only,
                rationale: med.rationale.clone(),
                classification: Classification {
                    level4_code: med.level4_code.clone(),
                    level4_name: med.level4_name.clone(),
                },
                ahfs_category: med.ahfs_category.clone(),
                who_mapping_type: med.who_mapping_type.clone(),
                who_mapping_notes: med.who_mapping_notes.clone(),
                natural_connection: med.natural_connection.clone(),
                full_report: med.full_research_report.clone().unwrap_or_default(),
            };
            (med.id.to_string(), detail)
        })
        .collect()
}

/// Key the category research reports by their Level 4 code.
pub fn category_map(reports: Vec<CategoryReport>) -> BTreeMap<String, CategoryReport> {
    reports
        .into_iter()
        .map(|report| (report.level4_code.clone(), report))
        .collect()
}

/// Serialize a value as pretty-printed JSON (2-space indent) to `path`,
/// creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ExportError::Write {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| ExportError::Write {
        path: path.display().to_string(),
        source: e,
    })
}

/// Run the whole export: read the store at `db_path`, write the three
/// JSON artifacts into `output_dir`, print the statistics report.
pub fn run_export(db_path: &Path, output_dir: &Path) -> Result<(), ExportError> {
    let conn = db::open_database(db_path)?;

    tracing::info!("Generating enhanced dashboard data from {}", db_path.display());

    let medications = medication::fetch_medications(&conn)?;
    tracing::info!("Loaded {} medications", medications.len());

    let summary = summarize(&medications);
    let summary_file = output_dir.join(config::SUMMARY_FILE);
    write_json(&summary_file, &summary)?;
    tracing::info!("Saved summary data: {}", summary_file.display());

    let full = full_detail(&medications);
    let full_file = output_dir.join(config::FULL_FILE);
    write_json(&full_file, &full)?;
    tracing::info!("Saved full data: {}", full_file.display());

    let categories = category_map(category::fetch_category_reports(&conn)?);
    let category_file = output_dir.join(config::CATEGORY_FILE);
    write_json(&category_file, &categories)?;
    tracing::info!(
        "Saved WHO category reports: {} ({} categories with research reports)",
        category_file.display(),
        categories.len()
    );

    let stats = DashboardStats::collect(&summary);
    stats.print_report();

    tracing::info!("Enhanced dashboard data generated successfully");
    tracing::info!("Output directory: {}", output_dir.display());

    Ok(())
}
