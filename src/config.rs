use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Medication Research";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output filenames inside the dashboard data directory
pub const SUMMARY_FILE: &str = "medications-summary.json";
pub const FULL_FILE: &str = "medications-full.json";
pub const CATEGORY_FILE: &str = "who-category-reports.json";

/// Get the project data directory
/// ~/Medication_Research/ on all platforms
pub fn project_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Medication_Research")
}

/// Get the path of the ATC validation database
pub fn database_path() -> PathBuf {
    project_dir().join("data").join("atc_validation.db")
}

/// Get the directory the dashboard JSON artifacts are written to
pub fn dashboard_output_dir() -> PathBuf {
    project_dir().join("output").join("dashboard_data")
}
