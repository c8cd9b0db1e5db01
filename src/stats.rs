//! Frequency statistics over the summary records, printed at the end of
//! the export run.

use std::collections::BTreeMap;

use crate::models::MedicationSummary;

/// Three frequency tables built in a single pass over the summary data.
/// BTreeMap keeps iteration alphabetical, so the printed report is
/// deterministic.
#[derive(Debug, Default)]
pub struct DashboardStats {
    pub status_counts: BTreeMap<String, usize>,
    pub atc_counts: BTreeMap<String, usize>,
    pub ahfs_counts: BTreeMap<String, usize>,
}

impl DashboardStats {
    pub fn collect(summary: &[MedicationSummary]) -> Self {
        let mut stats = Self::default();
        for med in summary {
            *stats.status_counts.entry(med.status.clone()).or_default() += 1;

            if let Some(code) = &med.level4_code {
                *stats.atc_counts.entry(code.clone()).or_default() += 1;
            }

            if let Some(category) = &med.ahfs_category {
                let label = normalize_category(category);
                *stats.ahfs_counts.entry(label.to_string()).or_default() += 1;
            }
        }
        stats
    }

    /// Top `n` AHFS categories by medication count, ties broken by label.
    pub fn top_categories(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .ahfs_counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    pub fn print_report(&self) {
        println!("\nDashboard Statistics:");

        println!("\nFormulary Status:");
        for (status, count) in &self.status_counts {
            println!("  {status}: {count}");
        }

        println!("\nWHO ATC Level 4 Categories: {}", self.atc_counts.len());
        println!("AHFS Therapeutic Classes: {}", self.ahfs_counts.len());

        println!("\nTop 10 AHFS Categories:");
        for (category, count) in self.top_categories(10) {
            println!("  {category}: {count} medications");
        }
    }
}

/// Strip the `" - "` separated prefix/suffix from a raw AHFS label:
/// take the segment after the first separator, then the segment before
/// any further separator. Labels without a separator pass through.
pub fn normalize_category(raw: &str) -> &str {
    match raw.split_once(" - ") {
        Some((_, rest)) => rest.split(" - ").next().unwrap_or(rest),
        None => raw,
    }
}
