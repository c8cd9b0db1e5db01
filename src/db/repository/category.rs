use rusqlite::{Connection, Row};

use super::medication::flag;
use crate::db::DatabaseError;
use crate::models::CategoryReport;

/// WHO Level 4 category research reports, completed rows only.
pub fn fetch_category_reports(conn: &Connection) -> Result<Vec<CategoryReport>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT
            level4_code,
            level4_name,
            medication_count,
            category_description,
            therapeutic_purpose,
            common_mechanisms,
            typical_clinical_uses,
            predominantly_natural,
            predominantly_synthetic,
            mixed_natural_synthetic,
            natural_therapies_available,
            natural_alternatives_notes,
            category_status,
            naturopathic_considerations,
            safety_considerations,
            typical_naturopathic_applications,
            full_research_report,
            level1_code,
            level1_name,
            level2_code,
            level2_name,
            level3_code,
            level3_name
         FROM level4_category_research
         WHERE research_completed = 1
         ORDER BY level4_code",
    )?;

    let rows = stmt.query_map([], category_from_row)?;

    let mut reports = Vec::new();
    for row in rows {
        reports.push(row?);
    }
    Ok(reports)
}

fn category_from_row(row: &Row<'_>) -> Result<CategoryReport, rusqlite::Error> {
    Ok(CategoryReport {
        level4_code: row.get(0)?,
        level4_name: row.get(1)?,
        medication_count: row.get(2)?,
        category_description: row.get(3)?,
        therapeutic_purpose: row.get(4)?,
        common_mechanisms: row.get(5)?,
        typical_clinical_uses: row.get(6)?,
        predominantly_natural: flag(row, 7)?,
        predominantly_synthetic: flag(row, 8)?,
        mixed_natural_synthetic: flag(row, 9)?,
        natural_therapies_available: flag(row, 10)?,
        natural_alternatives_notes: row.get(11)?,
        category_status: row.get(12)?,
        naturopathic_considerations: row.get(13)?,
        safety_considerations: row.get(14)?,
        typical_naturopathic_applications: row.get(15)?,
        full_report: row.get::<_, Option<String>>(16)?.unwrap_or_default(),
        level1_code: row.get(17)?,
        level1_name: row.get(18)?,
        level2_code: row.get(19)?,
        level2_name: row.get(20)?,
        level3_code: row.get(21)?,
        level3_name: row.get(22)?,
    })
}
