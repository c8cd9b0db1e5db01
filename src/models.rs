use serde::{Deserialize, Serialize};

/// One medication row as materialized by the dashboard query: the
/// `mapped_medications` columns left-joined to at most one
/// `comprehensive_research` row. Natural-connection flags are already
/// COALESCEd (research row preferred, base row as fallback).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationRecord {
    pub id: i64,
    pub name: String,
    pub status: Option<String>,
    pub rationale: Option<String>,
    pub topical_only: bool,
    pub level4_code: Option<String>,
    pub level4_name: Option<String>,
    pub ahfs_category: Option<String>,
    pub who_mapping_type: Option<String>,
    pub who_mapping_notes: Option<String>,
    pub full_research_report: Option<String>,
    pub natural_connection: NaturalConnection,
}

/// The eight natural-connection research flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NaturalConnection {
    pub direct_natural_source: bool,
    pub semi_synthetic_natural: bool,
    pub structural_analog_natural: bool,
    pub endogenous_compound: bool,
    pub biosynthetic_product: bool,
    pub works_natural_pathways: bool,
    pub facilitates_natural_processes: bool,
    pub no_natural_connection: bool,
}

/// Reduced projection for the dashboard table view.
/// Status is never null here; NULL collapses to `NEEDS_REVIEW`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationSummary {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub topical_only: bool,
    pub level4_code: Option<String>,
    pub level4_name: Option<String>,
    pub ahfs_category: Option<String>,
    pub who_mapping_type: Option<String>,
    pub who_mapping_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub level4_code: Option<String>,
    pub level4_name: Option<String>,
}

/// Full detail record for the per-medication report view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationDetail {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub topical_only: bool,
    pub rationale: Option<String>,
    pub classification: Classification,
    pub ahfs_category: Option<String>,
    pub who_mapping_type: Option<String>,
    pub who_mapping_notes: Option<String>,
    pub natural_connection: NaturalConnection,
    pub full_report: String,
}

/// One completed row from `level4_category_research`, including the
/// ancestor codes three levels up the ATC hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub level4_code: String,
    pub level4_name: Option<String>,
    pub medication_count: Option<i64>,
    pub category_description: Option<String>,
    pub therapeutic_purpose: Option<String>,
    pub common_mechanisms: Option<String>,
    pub typical_clinical_uses: Option<String>,
    pub predominantly_natural: bool,
    pub predominantly_synthetic: bool,
    pub mixed_natural_synthetic: bool,
    pub natural_therapies_available: bool,
    pub natural_alternatives_notes: Option<String>,
    pub category_status: Option<String>,
    pub naturopathic_considerations: Option<String>,
    pub safety_considerations: Option<String>,
    pub typical_naturopathic_applications: Option<String>,
    pub full_report: String,
    pub level1_code: Option<String>,
    pub level1_name: Option<String>,
    pub level2_code: Option<String>,
    pub level2_name: Option<String>,
    pub level3_code: Option<String>,
    pub level3_name: Option<String>,
}
